// Configuration loading and parsing (config/draft.toml).

use chrono::Datelike;
use hrk_core::LineupCaps;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::pitching::RateColumn;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub season: i32,
    pub league: String,
    pub lineup: LineupCaps,
    pub plus: PlusConfig,
    /// Paths with `{season}` already substituted, relative to the base dir.
    pub data_paths: DataPaths,
}

// ---------------------------------------------------------------------------
// draft.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire draft.toml file.
#[derive(Debug, Clone, Deserialize)]
struct DraftFile {
    run: RunSection,
    #[serde(default)]
    lineup: LineupSection,
    #[serde(default)]
    plus: PlusConfig,
    data_paths: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
struct RunSection {
    /// Defaults to the current calendar year when omitted.
    #[serde(default)]
    season: Option<i32>,
    league: String,
}

#[derive(Debug, Clone, Deserialize)]
struct LineupSection {
    #[serde(default = "default_starters")]
    starters: usize,
    #[serde(default = "default_relievers")]
    relievers: usize,
}

impl Default for LineupSection {
    fn default() -> Self {
        LineupSection {
            starters: default_starters(),
            relievers: default_relievers(),
        }
    }
}

fn default_starters() -> usize {
    LineupCaps::DEFAULT_STARTERS
}

fn default_relievers() -> usize {
    LineupCaps::DEFAULT_RELIEVERS
}

/// Settings for the K-BB%+ pitching report.
#[derive(Debug, Clone, Deserialize)]
pub struct PlusConfig {
    /// Minimum innings pitched to enter the league-average universe.
    #[serde(default = "default_qualifying_ip")]
    pub qualifying_ip: f64,
    #[serde(default)]
    pub order_by: RateColumn,
    /// Restrict the report to one club (the `Team` column). All when absent.
    #[serde(default)]
    pub team: Option<String>,
}

impl Default for PlusConfig {
    fn default() -> Self {
        PlusConfig {
            qualifying_ip: default_qualifying_ip(),
            order_by: RateColumn::default(),
            team: None,
        }
    }
}

fn default_qualifying_ip() -> f64 {
    30.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub batting: String,
    pub pitching: String,
    pub pitching_rates: String,
    pub rosters: String,
}

impl DataPaths {
    fn for_season(&self, season: i32) -> DataPaths {
        let sub = |p: &str| p.replace("{season}", &season.to_string());
        DataPaths {
            batting: sub(&self.batting),
            pitching: sub(&self.pitching),
            pitching_rates: sub(&self.pitching_rates),
            rosters: sub(&self.rosters),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/draft.toml` relative to the
/// given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let draft_path = base_dir.join("config").join("draft.toml");
    let draft_text = read_file(&draft_path)?;
    let draft: DraftFile = toml::from_str(&draft_text).map_err(|e| ConfigError::ParseError {
        path: draft_path.clone(),
        source: e,
    })?;

    let season = draft
        .run
        .season
        .unwrap_or_else(|| chrono::Local::now().year());

    let config = Config {
        season,
        league: draft.run.league,
        lineup: LineupCaps {
            starters: draft.lineup.starters,
            relievers: draft.lineup.relievers,
        },
        plus: draft.plus,
        data_paths: draft.data_paths.for_season(season),
    };

    validate(&config)?;

    Ok(config)
}

/// Files under `config/` that a fresh checkout is seeded with.
const SEEDED_FILES: [&str; 2] = ["draft.toml", "rosters.toml"];

/// Seed `config/draft.toml` and `config/rosters.toml` from `defaults/` when
/// they are missing. Existing files are never overwritten. Returns the paths
/// that were written.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");
    let mut copied = Vec::new();

    for file_name in SEEDED_FILES {
        let target = config_dir.join(file_name);
        if target.exists() {
            continue;
        }

        let source = defaults_dir.join(file_name);
        if !source.is_file() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "{} is missing and there is no {} to seed it from; \
                     run from the crate root or pass --base-dir",
                    target.display(),
                    source.display()
                ),
            });
        }

        std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", config_dir.display()),
        })?;
        std::fs::copy(&source, &target).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to copy {} to {}: {e}", source.display(), target.display()),
        })?;
        info!("seeded {} from {}", target.display(), source.display());
        copied.push(target);
    }

    Ok(copied)
}

/// Loads config relative to `base_dir`, copying defaults first.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_files(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// First MLB season on record.
const FIRST_SEASON: i32 = 1871;

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.season < FIRST_SEASON {
        return Err(ConfigError::ValidationError {
            field: "run.season".into(),
            message: format!("must be {FIRST_SEASON} or later, got {}", config.season),
        });
    }

    if config.league.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "run.league".into(),
            message: "must not be empty".into(),
        });
    }

    let ip = config.plus.qualifying_ip;
    if !ip.is_finite() || ip < 0.0 {
        return Err(ConfigError::ValidationError {
            field: "plus.qualifying_ip".into(),
            message: format!("must be a finite value >= 0, got {ip}"),
        });
    }

    let paths = &config.data_paths;
    let path_fields: &[(&str, &str)] = &[
        ("data_paths.batting", paths.batting.as_str()),
        ("data_paths.pitching", paths.pitching.as_str()),
        ("data_paths.pitching_rates", paths.pitching_rates.as_str()),
        ("data_paths.rosters", paths.rosters.as_str()),
    ];
    for (name, val) in path_fields {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Helper: returns the path to the hrk-cli crate root
    /// (works whether `cargo test` runs from the crate root or repo root).
    fn project_root() -> PathBuf {
        let cwd = std::env::current_dir().unwrap();
        if cwd.join("defaults").exists() {
            cwd
        } else if cwd.join("crates/hrk-cli/defaults").exists() {
            cwd.join("crates/hrk-cli")
        } else {
            panic!("Cannot locate defaults/ directory from CWD {:?}", cwd);
        }
    }

    /// Fresh scratch dir with an empty `config/` subdirectory.
    fn scratch(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        tmp
    }

    fn default_draft_text() -> String {
        fs::read_to_string(project_root().join("defaults/draft.toml")).unwrap()
    }

    fn expect_validation_field(err: ConfigError, expected: &str) {
        match &err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, expected),
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn load_valid_config_from_project_files() {
        let tmp = scratch("hrk_config_test_defaults");
        fs::write(tmp.join("config/draft.toml"), default_draft_text()).unwrap();

        let config = load_config_from(&tmp).expect("should load valid config");

        assert_eq!(config.season, 2025);
        assert_eq!(config.league, "hr-k");
        assert_eq!(config.lineup, LineupCaps::default());
        assert!((config.plus.qualifying_ip - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.plus.order_by, RateColumn::StuffPlus);
        assert_eq!(config.plus.team, None);
        assert_eq!(config.data_paths.batting, "data/2025/batting.csv");
        assert_eq!(config.data_paths.pitching, "data/2025/pitching.csv");
        assert_eq!(config.data_paths.rosters, "config/rosters.toml");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn optional_sections_use_defaults() {
        let tmp = scratch("hrk_config_test_minimal");
        let draft = r#"
[run]
season = 2024
league = "hr-k"

[data_paths]
batting = "b.csv"
pitching = "p.csv"
pitching_rates = "r.csv"
rosters = "rosters.toml"
"#;
        fs::write(tmp.join("config/draft.toml"), draft).unwrap();

        let config = load_config_from(&tmp).unwrap();
        assert_eq!(config.lineup.starters, 5);
        assert_eq!(config.lineup.relievers, 4);
        assert!((config.plus.qualifying_ip - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.plus.order_by, RateColumn::StuffPlus);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_season_defaults_to_current_year() {
        let tmp = scratch("hrk_config_test_no_season");
        let modified = default_draft_text().replace("season = 2025\n", "");
        fs::write(tmp.join("config/draft.toml"), modified).unwrap();

        let config = load_config_from(&tmp).unwrap();
        let year = chrono::Local::now().year();
        assert_eq!(config.season, year);
        assert_eq!(config.data_paths.batting, format!("data/{year}/batting.csv"));

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn custom_caps_and_report_settings() {
        let tmp = scratch("hrk_config_test_custom");
        let modified = default_draft_text()
            .replace("starters = 5", "starters = 6")
            .replace("relievers = 4", "relievers = 2")
            .replace("order_by = \"Stuff+\"", "order_by = \"xFIP\"\nteam = \"MIN\"");
        fs::write(tmp.join("config/draft.toml"), modified).unwrap();

        let config = load_config_from(&tmp).unwrap();
        assert_eq!(
            config.lineup,
            LineupCaps {
                starters: 6,
                relievers: 2
            }
        );
        assert_eq!(config.plus.order_by, RateColumn::Xfip);
        assert_eq!(config.plus.team.as_deref(), Some("MIN"));

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_league() {
        let tmp = scratch("hrk_config_test_empty_league");
        let modified = default_draft_text().replace("league = \"hr-k\"", "league = \"  \"");
        fs::write(tmp.join("config/draft.toml"), modified).unwrap();

        expect_validation_field(load_config_from(&tmp).unwrap_err(), "run.league");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_ancient_season() {
        let tmp = scratch("hrk_config_test_old_season");
        let modified = default_draft_text().replace("season = 2025", "season = 1850");
        fs::write(tmp.join("config/draft.toml"), modified).unwrap();

        expect_validation_field(load_config_from(&tmp).unwrap_err(), "run.season");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_negative_qualifying_ip() {
        let tmp = scratch("hrk_config_test_negative_ip");
        let modified =
            default_draft_text().replace("qualifying_ip = 30.0", "qualifying_ip = -1.0");
        fs::write(tmp.join("config/draft.toml"), modified).unwrap();

        expect_validation_field(load_config_from(&tmp).unwrap_err(), "plus.qualifying_ip");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_data_path() {
        let tmp = scratch("hrk_config_test_empty_path");
        let modified = default_draft_text()
            .replace("pitching = \"data/{season}/pitching.csv\"", "pitching = \"\"");
        fs::write(tmp.join("config/draft.toml"), modified).unwrap();

        expect_validation_field(load_config_from(&tmp).unwrap_err(), "data_paths.pitching");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn unknown_order_by_column_is_parse_error() {
        let tmp = scratch("hrk_config_test_bad_order");
        let modified =
            default_draft_text().replace("order_by = \"Stuff+\"", "order_by = \"Velo\"");
        fs::write(tmp.join("config/draft.toml"), modified).unwrap();

        match load_config_from(&tmp).unwrap_err() {
            ConfigError::ParseError { path, .. } => assert!(path.ends_with("draft.toml")),
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_draft_toml() {
        let tmp = scratch("hrk_config_test_missing");

        match load_config_from(&tmp).unwrap_err() {
            ConfigError::FileNotFound { path } => assert!(path.ends_with("draft.toml")),
            other => panic!("expected FileNotFound, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = scratch("hrk_config_test_invalid_toml");
        fs::write(tmp.join("config/draft.toml"), "this is not valid [[[ toml").unwrap();

        match load_config_from(&tmp).unwrap_err() {
            ConfigError::ParseError { path, .. } => assert!(path.ends_with("draft.toml")),
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    fn seed_defaults(defaults_dir: &Path) {
        fs::create_dir_all(defaults_dir).unwrap();
        let root = project_root();
        for name in SEEDED_FILES {
            fs::copy(root.join("defaults").join(name), defaults_dir.join(name)).unwrap();
        }
    }

    #[test]
    fn seeds_draft_and_rosters_only() {
        let tmp = scratch("hrk_config_test_seed_fresh");
        let defaults_dir = tmp.join("defaults");
        seed_defaults(&defaults_dir);
        fs::write(defaults_dir.join("notes.txt"), "not a config file\n").unwrap();

        let copied = ensure_config_files(&tmp).expect("should seed");
        assert_eq!(copied.len(), 2);
        assert!(tmp.join("config/draft.toml").is_file());
        assert!(tmp.join("config/rosters.toml").is_file());
        assert!(!tmp.join("config/notes.txt").exists());

        let config = load_config_from(&tmp).expect("seeded config should load");
        assert_eq!(config.league, "hr-k");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn seeding_keeps_existing_files() {
        let tmp = scratch("hrk_config_test_seed_keeps");
        seed_defaults(&tmp.join("defaults"));
        let config_dir = tmp.join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("rosters.toml"), "# hand edited\n").unwrap();

        let copied = ensure_config_files(&tmp).expect("should seed");
        assert_eq!(copied, vec![config_dir.join("draft.toml")]);
        assert_eq!(
            fs::read_to_string(config_dir.join("rosters.toml")).unwrap(),
            "# hand edited\n"
        );

        assert!(ensure_config_files(&tmp).unwrap().is_empty());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn seeding_needs_config_or_defaults() {
        let tmp = scratch("hrk_config_test_seed_nothing");
        fs::create_dir_all(&tmp).unwrap();

        match ensure_config_files(&tmp).unwrap_err() {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains("draft.toml"));
                assert!(message.contains("--base-dir"));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn seeding_without_defaults_is_fine_when_config_exists() {
        let tmp = scratch("hrk_config_test_seed_no_defaults");
        let config_dir = tmp.join("config");
        fs::create_dir_all(&config_dir).unwrap();
        for name in SEEDED_FILES {
            fs::write(config_dir.join(name), "").unwrap();
        }

        assert!(ensure_config_files(&tmp).unwrap().is_empty());

        let _ = fs::remove_dir_all(&tmp);
    }
}
