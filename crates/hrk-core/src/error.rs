// Error and warning taxonomy for a scoring run.

use serde::Serialize;
use thiserror::Error;

use crate::stats::StatKind;

/// Run-level failures surfaced to the caller instead of scoring nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("league not found: {name} (configured leagues: {})", .available.join(", "))]
    UnknownLeague {
        name: String,
        available: Vec<String>,
    },

    #[error("league `{name}` has no teams")]
    EmptyLeague { name: String },
}

/// Recoverable per-player conditions collected alongside a run's result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringWarning {
    #[error("could not find {stat} for '{player}' on team {team}")]
    MissingStat {
        team: String,
        player: String,
        stat: StatKind,
    },
}

/// League-average and plus-stat calculation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlusStatError {
    #[error("league average is undefined over an empty stat universe")]
    UndefinedAverage,

    #[error("plus stat is undefined against a league average of zero")]
    ZeroAverage,
}
