// Roster scoring core: stat attachment, ranking, lineup-capped team totals,
// and league-relative plus stats. No I/O beyond tracing events.

pub mod attach;
pub mod error;
pub mod lineup;
pub mod plus;
pub mod rank;
pub mod roster;
pub mod scoring;
pub mod stats;

pub use error::{PlusStatError, ScoringError, ScoringWarning};
pub use lineup::{LineupCaps, TeamTotals};
pub use roster::{Batter, League, Pitcher, PitcherRole, Player, RosterBook, Team, TeamRoster};
pub use scoring::{score_league, ScoringRun};
pub use stats::{StatIndex, StatKind};
