// Roster model: immutable league/team configuration plus the working
// per-run `Team` that gets stats attached, ranked, and totalled.

use serde::{Deserialize, Serialize};

use crate::lineup::TeamTotals;
use crate::stats::StatKind;

// ---------------------------------------------------------------------------
// Pitcher role
// ---------------------------------------------------------------------------

/// Whether a rostered pitcher fills a starter or reliever slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitcherRole {
    #[serde(rename = "SP")]
    Starter,
    #[serde(rename = "RP")]
    Reliever,
}

impl PitcherRole {
    /// Short tag used in reports ("SP" / "RP").
    pub fn tag(self) -> &'static str {
        match self {
            PitcherRole::Starter => "SP",
            PitcherRole::Reliever => "RP",
        }
    }
}

// ---------------------------------------------------------------------------
// Configured rosters (immutable input)
// ---------------------------------------------------------------------------

/// A pitcher as configured on a roster: name and role only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitcherEntry {
    pub name: String,
    pub role: PitcherRole,
}

/// A team as configured: ordered pitcher and batter lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub name: String,
    #[serde(default)]
    pub pitchers: Vec<PitcherEntry>,
    /// Batters are configured by name only.
    #[serde(default)]
    pub batters: Vec<String>,
}

/// A named collection of teams scored together in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub name: String,
    #[serde(default)]
    pub teams: Vec<TeamRoster>,
}

/// Every configured league. Constructed once at startup and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterBook {
    #[serde(default)]
    pub leagues: Vec<League>,
}

impl RosterBook {
    pub fn new(leagues: Vec<League>) -> Self {
        RosterBook { leagues }
    }

    /// Look up a league by exact name.
    pub fn league(&self, name: &str) -> Option<&League> {
        self.leagues.iter().find(|l| l.name == name)
    }

    pub fn league_names(&self) -> impl Iterator<Item = &str> {
        self.leagues.iter().map(|l| l.name.as_str())
    }
}

// ---------------------------------------------------------------------------
// Working players
// ---------------------------------------------------------------------------

/// Common capability of the two player variants: a name and one optional
/// attached counting stat.
pub trait Player {
    /// The stat this variant is valued by.
    const STAT: StatKind;

    fn name(&self) -> &str;

    /// The attached stat, `None` until a lookup succeeds.
    fn stat(&self) -> Option<u32>;

    fn set_stat(&mut self, value: u32);

    /// Stat value for arithmetic and ordering; unattached counts as zero.
    fn stat_or_zero(&self) -> u32 {
        self.stat().unwrap_or(0)
    }
}

/// A rostered pitcher valued by strikeouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pitcher {
    pub name: String,
    pub role: PitcherRole,
    pub strikeouts: Option<u32>,
    /// Set by lineup selection when this pitcher counts toward the total.
    pub used: bool,
}

impl Pitcher {
    pub fn new(name: impl Into<String>, role: PitcherRole) -> Self {
        Pitcher {
            name: name.into(),
            role,
            strikeouts: None,
            used: false,
        }
    }
}

impl Player for Pitcher {
    const STAT: StatKind = StatKind::Strikeouts;

    fn name(&self) -> &str {
        &self.name
    }

    fn stat(&self) -> Option<u32> {
        self.strikeouts
    }

    fn set_stat(&mut self, value: u32) {
        self.strikeouts = Some(value);
    }
}

/// A rostered batter valued by home runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batter {
    pub name: String,
    pub home_runs: Option<u32>,
}

impl Batter {
    pub fn new(name: impl Into<String>) -> Self {
        Batter {
            name: name.into(),
            home_runs: None,
        }
    }
}

impl Player for Batter {
    const STAT: StatKind = StatKind::HomeRuns;

    fn name(&self) -> &str {
        &self.name
    }

    fn stat(&self) -> Option<u32> {
        self.home_runs
    }

    fn set_stat(&mut self, value: u32) {
        self.home_runs = Some(value);
    }
}

// ---------------------------------------------------------------------------
// Working team
// ---------------------------------------------------------------------------

/// A team being scored in the current run.
///
/// Composition is copied from a `TeamRoster` and never changes; only player
/// stats, ordering, `used` flags, and `totals` are written during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub pitchers: Vec<Pitcher>,
    pub batters: Vec<Batter>,
    /// Filled by lineup selection.
    pub totals: Option<TeamTotals>,
}

impl Team {
    pub fn new(name: impl Into<String>, pitchers: Vec<Pitcher>, batters: Vec<Batter>) -> Self {
        Team {
            name: name.into(),
            pitchers,
            batters,
            totals: None,
        }
    }

    /// Totals as reported: zero when selection has not run.
    pub fn totals_or_default(&self) -> TeamTotals {
        self.totals.unwrap_or_default()
    }
}

impl From<&TeamRoster> for Team {
    fn from(roster: &TeamRoster) -> Self {
        Team::new(
            roster.name.clone(),
            roster
                .pitchers
                .iter()
                .map(|p| Pitcher::new(p.name.clone(), p.role))
                .collect(),
            roster.batters.iter().map(Batter::new).collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
