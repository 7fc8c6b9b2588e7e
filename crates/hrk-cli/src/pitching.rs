// K-BB%+ pitching report: per-pitcher strikeout-minus-walk rate against the
// league average of a qualifying universe.

use std::fmt;
use std::str::FromStr;

use hrk_core::plus::{league_average, plus_against};
use hrk_core::PlusStatError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One pitcher's season rate line. Rates are fractions of batters faced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitcherRates {
    pub name: String,
    pub team: String,
    pub ip: f64,
    pub k_pct: f64,
    pub bb_pct: f64,
    pub stuff_plus: Option<f64>,
    pub location_plus: Option<f64>,
    pub pitching_plus: Option<f64>,
    pub xfip: Option<f64>,
}

impl PitcherRates {
    pub fn k_minus_bb(&self) -> f64 {
        self.k_pct - self.bb_pct
    }
}

/// Column the report is ordered by (descending).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateColumn {
    #[default]
    #[serde(rename = "Stuff+")]
    StuffPlus,
    #[serde(rename = "Location+")]
    LocationPlus,
    #[serde(rename = "Pitching+")]
    PitchingPlus,
    #[serde(rename = "xFIP")]
    Xfip,
    #[serde(rename = "IP")]
    Ip,
    #[serde(rename = "K-BB%")]
    KMinusBb,
}

impl RateColumn {
    const ALL: [RateColumn; 6] = [
        RateColumn::StuffPlus,
        RateColumn::LocationPlus,
        RateColumn::PitchingPlus,
        RateColumn::Xfip,
        RateColumn::Ip,
        RateColumn::KMinusBb,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RateColumn::StuffPlus => "Stuff+",
            RateColumn::LocationPlus => "Location+",
            RateColumn::PitchingPlus => "Pitching+",
            RateColumn::Xfip => "xFIP",
            RateColumn::Ip => "IP",
            RateColumn::KMinusBb => "K-BB%",
        }
    }

    /// The row's value in this column, if present.
    pub fn value(self, row: &PitcherRates) -> Option<f64> {
        match self {
            RateColumn::StuffPlus => row.stuff_plus,
            RateColumn::LocationPlus => row.location_plus,
            RateColumn::PitchingPlus => row.pitching_plus,
            RateColumn::Xfip => row.xfip,
            RateColumn::Ip => Some(row.ip),
            RateColumn::KMinusBb => Some(row.k_minus_bb()),
        }
    }
}

impl fmt::Display for RateColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RateColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RateColumn::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = RateColumn::ALL.iter().map(|c| c.label()).collect();
                format!("unknown column '{s}', expected one of: {}", names.join(", "))
            })
    }
}

/// One rendered report line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KbbLine {
    #[serde(flatten)]
    pub rates: PitcherRates,
    pub k_minus_bb: f64,
    /// `None` when the league average is undefined or zero.
    pub k_minus_bb_plus: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KbbReport {
    /// `None` when no pitcher qualified.
    pub league_average: Option<f64>,
    pub qualified: usize,
    pub order_by: RateColumn,
    pub lines: Vec<KbbLine>,
}

/// Report options, usually from `[plus]` with command-line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct KbbOptions<'a> {
    pub qualifying_ip: f64,
    pub team: Option<&'a str>,
    pub order_by: RateColumn,
}

/// Build the K-BB%+ report.
///
/// The league average comes from every pitcher with at least
/// `qualifying_ip` innings; the listed lines are that universe narrowed to
/// `team` when given, sorted descending by `order_by` (missing values as 0,
/// ties in input order).
pub fn build_kbb_report(rows: &[PitcherRates], options: &KbbOptions<'_>) -> KbbReport {
    let universe: Vec<&PitcherRates> = rows
        .iter()
        .filter(|r| r.ip >= options.qualifying_ip)
        .collect();

    let pairs: Vec<(f64, f64)> = universe.iter().map(|r| (r.k_pct, r.bb_pct)).collect();
    let average = league_average(&pairs);
    if let Err(e) = average {
        warn!("K-BB% league average unavailable: {}", e);
    }

    let mut subset: Vec<&PitcherRates> = universe
        .iter()
        .copied()
        .filter(|r| {
            options
                .team
                .map_or(true, |team| r.team.eq_ignore_ascii_case(team.trim()))
        })
        .collect();
    let column = options.order_by;
    subset.sort_by(|a, b| {
        let a = column.value(a).unwrap_or(0.0);
        let b = column.value(b).unwrap_or(0.0);
        b.total_cmp(&a)
    });

    let lines = subset
        .into_iter()
        .map(|r| {
            let delta = r.k_minus_bb();
            KbbLine {
                rates: r.clone(),
                k_minus_bb: delta,
                k_minus_bb_plus: plus_against(delta, average).ok(),
            }
        })
        .collect();

    KbbReport {
        league_average: average.ok(),
        qualified: universe.len(),
        order_by: column,
        lines,
    }
}

/// Describe why a plus stat is missing, for reports.
pub fn undefined_reason(average: Option<f64>) -> PlusStatError {
    match average {
        None => PlusStatError::UndefinedAverage,
        Some(_) => PlusStatError::ZeroAverage,
    }
}
