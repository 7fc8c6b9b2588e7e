// Roster book loading (config/rosters.toml).
//
// Roles are parsed strictly: anything other than "SP"/"RP" fails the load.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use hrk_core::RosterBook;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse roster file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid roster book: {0}")]
    Invalid(String),
}

/// Load and validate a roster book from a TOML file.
pub fn load_roster_book(path: &Path) -> Result<RosterBook, RosterError> {
    let text = std::fs::read_to_string(path).map_err(|e| RosterError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let book = parse_roster_book(&text).map_err(|e| match e {
        ParseFailure::Toml(source) => RosterError::Parse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Invalid(message) => RosterError::Invalid(message),
    })?;
    info!(
        "loaded {} leagues from {}",
        book.leagues.len(),
        path.display()
    );
    Ok(book)
}

enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(String),
}

fn parse_roster_book(text: &str) -> Result<RosterBook, ParseFailure> {
    let book: RosterBook = toml::from_str(text).map_err(ParseFailure::Toml)?;
    validate(&book).map_err(ParseFailure::Invalid)?;
    Ok(book)
}

fn validate(book: &RosterBook) -> Result<(), String> {
    let mut league_names = HashSet::new();
    for league in &book.leagues {
        if league.name.trim().is_empty() {
            return Err("league with empty name".into());
        }
        if !league_names.insert(league.name.as_str()) {
            return Err(format!("duplicate league '{}'", league.name));
        }
        for team in &league.teams {
            if team.name.trim().is_empty() {
                return Err(format!("team with empty name in league '{}'", league.name));
            }
            let mut pitcher_names = HashSet::new();
            for pitcher in &team.pitchers {
                if pitcher.name.trim().is_empty() {
                    return Err(format!("pitcher with empty name on team '{}'", team.name));
                }
                if !pitcher_names.insert(pitcher.name.as_str()) {
                    return Err(format!(
                        "duplicate pitcher '{}' on team '{}'",
                        pitcher.name, team.name
                    ));
                }
            }
            if let Some(blank) = team.batters.iter().position(|b| b.trim().is_empty()) {
                return Err(format!(
                    "batter #{} has an empty name on team '{}'",
                    blank + 1,
                    team.name
                ));
            }
        }
    }
    Ok(())
}
