// Plain-text and JSON rendering of scoring runs and the K-BB%+ report.
//
// An unattached stat renders as `no data`, never as 0. Team totals always
// render (0 when selection never ran).

use std::io::{self, Write};

use hrk_core::{Player, ScoringRun, StatKind, Team};
use serde::Serialize;

use crate::pitching::{undefined_reason, KbbLine, KbbReport};

/// Marker for a player whose stat was not found.
pub const NO_DATA: &str = "no data";

/// Marker for a plus stat with no usable league average.
pub const UNDEFINED: &str = "undefined";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format an optional counting stat for display.
pub fn format_stat(value: Option<u32>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| v.to_string())
}

/// Format a fraction as a percentage with two decimals ("25.30%").
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.decimals$}"))
}

// ---------------------------------------------------------------------------
// Roster scoring run
// ---------------------------------------------------------------------------

/// Render one team: strikeout total and ranked pitchers (`*` = counted),
/// then home-run total and ranked batters.
pub fn render_team<W: Write>(team: &Team, out: &mut W) -> io::Result<()> {
    let totals = team.totals_or_default();

    writeln!(out)?;
    writeln!(
        out,
        "{} {} total is: {}",
        team.name,
        StatKind::Strikeouts.label(),
        totals.strikeouts
    )?;
    for pitcher in &team.pitchers {
        writeln!(
            out,
            "{} {} {}: {}",
            if pitcher.used { "*" } else { " " },
            pitcher.role.tag(),
            pitcher.name,
            format_stat(pitcher.stat())
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} {} total is: {}",
        team.name,
        StatKind::HomeRuns.label(),
        totals.home_runs
    )?;
    for batter in &team.batters {
        writeln!(out, "{}: {}", batter.name, format_stat(batter.stat()))?;
    }
    Ok(())
}

/// Render every team in a run followed by any missing-player warnings.
pub fn render_run<W: Write>(run: &ScoringRun, out: &mut W) -> io::Result<()> {
    writeln!(out, "League: {}", run.league)?;
    for team in &run.teams {
        render_team(team, out)?;
    }
    if !run.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "{} players had no stat data:", run.warnings.len())?;
        for warning in &run.warnings {
            writeln!(out, "  {warning}")?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// K-BB%+ report
// ---------------------------------------------------------------------------

const KBB_HEADERS: [&str; 10] = [
    "Name", "IP", "K%", "BB%", "K-BB%", "K-BB%+", "Stuff+", "Loc+", "Pitch+", "xFIP",
];

fn kbb_cells(line: &KbbLine) -> [String; 10] {
    let r = &line.rates;
    [
        r.name.clone(),
        format!("{:.1}", r.ip),
        format_percentage(r.k_pct),
        format_percentage(r.bb_pct),
        format_percentage(line.k_minus_bb),
        line.k_minus_bb_plus
            .map_or_else(|| UNDEFINED.to_string(), |v| v.to_string()),
        format_optional(r.stuff_plus, 0),
        format_optional(r.location_plus, 0),
        format_optional(r.pitching_plus, 0),
        format_optional(r.xfip, 2),
    ]
}

/// Render the K-BB%+ report as an aligned text table.
pub fn render_kbb<W: Write>(report: &KbbReport, out: &mut W) -> io::Result<()> {
    match report.league_average {
        Some(avg) => writeln!(
            out,
            "League K-BB%: {} over {} qualified pitchers",
            format_percentage(avg),
            report.qualified
        )?,
        None => writeln!(out, "League K-BB%: {UNDEFINED} (no qualified pitchers)")?,
    }
    if report.lines.iter().any(|l| l.k_minus_bb_plus.is_none()) {
        writeln!(out, "K-BB%+ {UNDEFINED}: {}", undefined_reason(report.league_average))?;
    }
    writeln!(out, "Ordered by {}", report.order_by)?;

    if report.lines.is_empty() {
        writeln!(out, "No pitchers to report.")?;
        return Ok(());
    }

    let rows: Vec<[String; 10]> = report.lines.iter().map(kbb_cells).collect();
    let mut widths = KBB_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let header: Vec<String> = KBB_HEADERS.iter().map(|h| h.to_string()).collect();
    write_row(out, &header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

/// Name column left-aligned, numbers right-aligned.
fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if i == 0 {
            line.push_str(&format!("{cell:<width$}"));
        } else {
            line.push_str(&format!("  {cell:>width$}"));
        }
    }
    writeln!(out, "{}", line.trim_end())
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Write any report as pretty JSON followed by a newline.
pub fn write_json<T: Serialize, W: Write>(value: &T, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
