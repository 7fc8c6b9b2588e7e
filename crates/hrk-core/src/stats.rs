// Season stat lookup: player name -> counting stat value.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// The counting stats a roster is valued by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    #[serde(rename = "HR")]
    HomeRuns,
    #[serde(rename = "SO")]
    Strikeouts,
}

impl StatKind {
    /// Column name used by the stat provider's tables.
    pub fn column(self) -> &'static str {
        match self {
            StatKind::HomeRuns => "HR",
            StatKind::Strikeouts => "SO",
        }
    }

    /// Human-readable label for totals lines.
    pub fn label(self) -> &'static str {
        match self {
            StatKind::HomeRuns => "homerun",
            StatKind::Strikeouts => "strikeout",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Immutable name -> value mapping for one stat over one season.
///
/// Keys are full player names, matched exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatIndex {
    kind: StatKind,
    values: HashMap<String, u32>,
}

impl StatIndex {
    /// Build an index from `(name, value)` records. When a name appears more
    /// than once the last occurrence wins.
    pub fn build<I, S>(kind: StatKind, records: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut values = HashMap::new();
        for (name, value) in records {
            let name = name.into();
            if let Some(previous) = values.insert(name.clone(), value) {
                warn!(
                    stat = %kind,
                    "duplicate {} entry for '{}' ({} replaced by {}), using latest value",
                    kind, name, previous, value
                );
            }
        }
        StatIndex { kind, values }
    }

    pub fn kind(&self) -> StatKind {
        self.kind
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
