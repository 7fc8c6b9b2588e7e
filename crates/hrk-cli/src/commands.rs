// Command implementations: load inputs for a run, hand them to the scoring
// core, and return the result for rendering.

use std::path::Path;

use anyhow::Context;
use hrk_core::{score_league, ScoringRun, StatKind};
use tracing::info;

use crate::config::Config;
use crate::feed;
use crate::pitching::{build_kbb_report, KbbOptions, KbbReport, RateColumn};
use crate::rosters::load_roster_book;

/// Score the configured (or overridden) league's HR/K totals.
pub fn totals(base_dir: &Path, config: &Config, league: Option<&str>) -> anyhow::Result<ScoringRun> {
    let paths = &config.data_paths;
    let book = load_roster_book(&base_dir.join(&paths.rosters))
        .context("failed to load roster book")?;

    let pitching = feed::load_stat_index(&base_dir.join(&paths.pitching), StatKind::Strikeouts)
        .context("failed to load pitching stats")?;
    let batting = feed::load_stat_index(&base_dir.join(&paths.batting), StatKind::HomeRuns)
        .context("failed to load batting stats")?;

    let league = league.unwrap_or(config.league.as_str());
    info!(
        "Scoring league '{}' for {} ({} SP / {} RP counted)",
        league, config.season, config.lineup.starters, config.lineup.relievers
    );

    let run = score_league(&book, league, &pitching, &batting, &config.lineup)
        .with_context(|| format!("failed to score league '{league}'"))?;
    Ok(run)
}

/// Build the K-BB%+ report with optional team/order overrides.
pub fn kbb_plus(
    base_dir: &Path,
    config: &Config,
    team: Option<&str>,
    order_by: Option<RateColumn>,
) -> anyhow::Result<KbbReport> {
    let rows = feed::load_pitching_rates(&base_dir.join(&config.data_paths.pitching_rates))
        .context("failed to load pitching rates")?;

    let options = KbbOptions {
        qualifying_ip: config.plus.qualifying_ip,
        team: team.or(config.plus.team.as_deref()),
        order_by: order_by.unwrap_or(config.plus.order_by),
    };
    let report = build_kbb_report(&rows, &options);
    info!(
        "K-BB%+ report: {} lines from {} qualified pitchers",
        report.lines.len(),
        report.qualified
    );
    Ok(report)
}
