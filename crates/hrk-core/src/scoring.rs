// Run pipeline: select a league, then attach -> rank -> select lineup for
// every team.

use serde::Serialize;
use tracing::{debug, error, info};

use crate::attach::attach_team;
use crate::error::{ScoringError, ScoringWarning};
use crate::lineup::{select_lineup, LineupCaps};
use crate::rank::rank_team;
use crate::roster::{RosterBook, Team};
use crate::stats::StatIndex;

/// Output of one scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringRun {
    pub league: String,
    pub teams: Vec<Team>,
    pub warnings: Vec<ScoringWarning>,
}

/// Score every team in the named league.
///
/// Missing players never abort the run; they are returned in `warnings`.
/// An unknown league or a league with no teams is an error.
pub fn score_league(
    book: &RosterBook,
    league_name: &str,
    pitching: &StatIndex,
    batting: &StatIndex,
    caps: &LineupCaps,
) -> Result<ScoringRun, ScoringError> {
    let Some(league) = book.league(league_name) else {
        let available: Vec<String> = book.league_names().map(str::to_string).collect();
        error!(
            "league '{}' is not configured (available: {})",
            league_name,
            available.join(", ")
        );
        return Err(ScoringError::UnknownLeague {
            name: league_name.to_string(),
            available,
        });
    };

    if league.teams.is_empty() {
        error!("league '{}' has no teams to score", league.name);
        return Err(ScoringError::EmptyLeague {
            name: league.name.clone(),
        });
    }

    let mut warnings = Vec::new();
    let mut teams = Vec::with_capacity(league.teams.len());

    for roster in &league.teams {
        let mut team = Team::from(roster);
        warnings.extend(attach_team(&mut team, pitching, batting));
        rank_team(&mut team);
        let totals = select_lineup(&mut team, caps);
        debug!(
            team = %team.name,
            strikeouts = totals.strikeouts,
            home_runs = totals.home_runs,
            "team scored"
        );
        teams.push(team);
    }

    info!(
        "scored {} teams in league '{}' ({} missing players)",
        teams.len(),
        league.name,
        warnings.len()
    );

    Ok(ScoringRun {
        league: league.name.clone(),
        teams,
        warnings,
    })
}
