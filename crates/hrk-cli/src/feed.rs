// Season stat feeds: CSV exports from the stat provider.
//
// Counting-stat files (batting HR, pitching SO) become a `StatIndex`; the
// pitching-rates file feeds the K-BB%+ report. Malformed rows are skipped
// with a warning rather than failing the load.

use std::io::Read;
use std::path::Path;

use hrk_core::{StatIndex, StatKind};
use serde::Deserialize;
use tracing::{info, warn};

use crate::pitching::PitcherRates;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

/// Batting row. Counting stats are f64 because some exports carry
/// fractional values; extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawBattingRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "HR")]
    home_runs: f64,
}

#[derive(Debug, Deserialize)]
struct RawPitchingRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "SO", alias = "K")]
    strikeouts: f64,
}

#[derive(Debug, Deserialize)]
struct RawRateRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Team", default)]
    team: String,
    #[serde(rename = "IP")]
    ip: f64,
    #[serde(rename = "K%")]
    k_pct: String,
    #[serde(rename = "BB%")]
    bb_pct: String,
    #[serde(rename = "Stuff+", default)]
    stuff_plus: Option<f64>,
    #[serde(rename = "Location+", default)]
    location_plus: Option<f64>,
    #[serde(rename = "Pitching+", default)]
    pitching_plus: Option<f64>,
    #[serde(rename = "xFIP", default)]
    xfip: Option<f64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Round a counting stat. NaN, infinities, negatives and values too large for
/// a `u32` count are rejected with the reason.
fn counting_value(value: f64) -> Result<u32, &'static str> {
    if !value.is_finite() {
        return Err("not a finite number");
    }
    if value < 0.0 {
        return Err("negative");
    }
    let rounded = value.round();
    if rounded > f64::from(u32::MAX) {
        return Err("out of range");
    }
    Ok(rounded as u32)
}

/// Parse a rate given either as a fraction ("0.253") or a percent string
/// ("25.3%" / "25.3 %"). Returns the fraction.
pub fn parse_rate(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let value = match trimmed.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? / 100.0,
        None => trimmed.parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

fn finite_or_none(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

fn load_batting_from_reader<R: Read>(rdr: R) -> Result<Vec<(String, u32)>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut records = Vec::new();
    for result in reader.deserialize::<RawBattingRow>() {
        match result {
            Ok(raw) => {
                let name = raw.name.trim();
                match counting_value(raw.home_runs) {
                    Ok(hr) => records.push((name.to_string(), hr)),
                    Err(reason) => {
                        warn!("skipping batter '{}': invalid HR value ({})", name, reason)
                    }
                }
            }
            Err(e) => {
                warn!("skipping malformed batting row: {}", e);
            }
        }
    }
    Ok(records)
}

fn load_pitching_from_reader<R: Read>(rdr: R) -> Result<Vec<(String, u32)>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut records = Vec::new();
    for result in reader.deserialize::<RawPitchingRow>() {
        match result {
            Ok(raw) => {
                let name = raw.name.trim();
                match counting_value(raw.strikeouts) {
                    Ok(so) => records.push((name.to_string(), so)),
                    Err(reason) => {
                        warn!("skipping pitcher '{}': invalid SO value ({})", name, reason)
                    }
                }
            }
            Err(e) => {
                warn!("skipping malformed pitching row: {}", e);
            }
        }
    }
    Ok(records)
}

fn load_rates_from_reader<R: Read>(rdr: R) -> Result<Vec<PitcherRates>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut rows = Vec::new();
    for result in reader.deserialize::<RawRateRow>() {
        match result {
            Ok(raw) => {
                let name = raw.name.trim().to_string();
                if !raw.ip.is_finite() {
                    warn!("skipping pitcher '{}': non-finite IP value", name);
                    continue;
                }
                let (Some(k_pct), Some(bb_pct)) = (parse_rate(&raw.k_pct), parse_rate(&raw.bb_pct))
                else {
                    warn!("skipping pitcher '{}': unparsable K% or BB%", name);
                    continue;
                };
                rows.push(PitcherRates {
                    name,
                    team: raw.team.trim().to_string(),
                    ip: raw.ip,
                    k_pct,
                    bb_pct,
                    stuff_plus: finite_or_none(raw.stuff_plus),
                    location_plus: finite_or_none(raw.location_plus),
                    pitching_plus: finite_or_none(raw.pitching_plus),
                    xfip: finite_or_none(raw.xfip),
                });
            }
            Err(e) => {
                warn!("skipping malformed pitching-rate row: {}", e);
            }
        }
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<std::fs::File, FeedError> {
    std::fs::File::open(path).map_err(|e| FeedError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn csv_error(path: &Path) -> impl FnOnce(csv::Error) -> FeedError + '_ {
    move |e| FeedError::Csv {
        path: path.display().to_string(),
        source: e,
    }
}

/// Build a `StatIndex` of `kind` from a season CSV file.
pub fn load_stat_index(path: &Path, kind: StatKind) -> Result<StatIndex, FeedError> {
    let file = open(path)?;
    let records = match kind {
        StatKind::HomeRuns => load_batting_from_reader(file),
        StatKind::Strikeouts => load_pitching_from_reader(file),
    }
    .map_err(csv_error(path))?;
    info!("loaded {} {} records from {}", records.len(), kind, path.display());
    Ok(StatIndex::build(kind, records))
}

/// Load per-pitcher rate stats for the K-BB%+ report.
pub fn load_pitching_rates(path: &Path) -> Result<Vec<PitcherRates>, FeedError> {
    let file = open(path)?;
    let rows = load_rates_from_reader(file).map_err(csv_error(path))?;
    info!("loaded {} pitching-rate rows from {}", rows.len(), path.display());
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
