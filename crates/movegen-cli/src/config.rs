//! Scenario file loading for the harness.
//!
//! Scenarios are described in TOML as an array of `[[scenario]]` tables. When
//! no file is given and `scenarios.toml` is absent from the working directory,
//! the built-in set compiled into the binary is used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The scenario set shipped with the harness.
pub const BUILTIN_SCENARIOS: &str = include_str!("../scenarios/builtin.toml");

/// Errors that can occur when loading or resolving scenarios.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the scenario file from disk.
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the scenario file as valid TOML.
    #[error("Failed to parse scenarios: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A square could not be parsed.
    #[error("Scenario '{scenario}': invalid square '{value}'")]
    InvalidSquare { scenario: String, value: String },
    /// A piece glyph or placement could not be parsed.
    #[error("Scenario '{scenario}': invalid piece '{value}'")]
    InvalidPiece { scenario: String, value: String },
    /// Two placements name the same square.
    #[error("Scenario '{scenario}': square {square} is placed twice")]
    DuplicatePlacement { scenario: String, square: String },
    /// Requested scenario was not found in the file.
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),
}

/// A square given either by name (`"d4"`) or by coordinates (`[3, 3]`).
///
/// Coordinates may lie off the board, which is how out-of-bounds scenarios
/// are written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SquareSpec {
    Name(String),
    Coords([i8; 2]),
}

/// The failure a scenario expects from generation.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExpectedError {
    OutOfBounds,
    InvalidOrigin,
}

/// One scenario as written in the file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScenarioConfig {
    /// Unique name used in reports and `--only`.
    pub name: String,
    /// Glyph of the moving piece; uppercase is White, lowercase Black.
    pub piece: String,
    /// Square the piece moves from.
    pub origin: SquareSpec,
    /// Leave the origin empty instead of placing the moving piece there.
    #[serde(default)]
    pub origin_empty: bool,
    /// Other pieces, each a glyph followed by a square (e.g. `"pd6"`).
    #[serde(default)]
    pub with: Vec<String>,
    /// Exact set of quiet destinations.
    #[serde(default)]
    pub quiet: Option<Vec<String>>,
    /// Exact set of capture destinations.
    #[serde(default)]
    pub captures: Option<Vec<String>>,
    /// Squares that must be reachable.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Squares that must not be reachable.
    #[serde(default)]
    pub excludes: Vec<String>,
    /// Exact number of moves.
    #[serde(default)]
    pub count: Option<usize>,
    /// Generation must fail with this error.
    #[serde(default)]
    pub error: Option<ExpectedError>,
}

/// A parsed scenario file.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ScenarioFile {
    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<ScenarioConfig>,
}

impl ScenarioFile {
    /// Loads scenarios.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// path is tried and the built-in set is used if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    tracing::debug!("{:?} not found, using built-in scenarios", default_path);
                    Self::builtin()
                }
            }
        }
    }

    /// Reads and parses the scenario file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Parses the built-in scenario set.
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(toml::from_str(BUILTIN_SCENARIOS)?)
    }

    /// Returns the default scenario file path: `scenarios.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("scenarios.toml")
    }

    /// Retrieves a scenario by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ScenarioNotFound`] if no scenario has that name.
    pub fn get(&self, name: &str) -> Result<&ScenarioConfig, ConfigError> {
        self.scenarios
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ConfigError::ScenarioNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_scenario() {
        let toml_content = r#"
[[scenario]]
name = "rook capture"
piece = "R"
origin = "d4"
with = ["pd6"]
quiet = ["d5"]
captures = ["d6"]
includes = ["d5"]
excludes = ["d7", "d8"]
count = 11
"#;

        let file: ScenarioFile = toml::from_str(toml_content).unwrap();
        assert_eq!(file.scenarios.len(), 1);

        let s = &file.scenarios[0];
        assert_eq!(s.name, "rook capture");
        assert_eq!(s.piece, "R");
        assert_eq!(s.origin, SquareSpec::Name("d4".to_string()));
        assert!(!s.origin_empty);
        assert_eq!(s.with, vec!["pd6"]);
        assert_eq!(s.quiet.as_deref(), Some(&["d5".to_string()][..]));
        assert_eq!(s.captures.as_deref(), Some(&["d6".to_string()][..]));
        assert_eq!(s.excludes, vec!["d7", "d8"]);
        assert_eq!(s.count, Some(11));
        assert_eq!(s.error, None);
    }

    #[test]
    fn test_parse_minimal_scenario_defaults() {
        let toml_content = r#"
[[scenario]]
name = "bare"
piece = "k"
origin = [8, 0]
error = "out-of-bounds"
"#;

        let file: ScenarioFile = toml::from_str(toml_content).unwrap();
        let s = &file.scenarios[0];
        assert_eq!(s.origin, SquareSpec::Coords([8, 0]));
        assert!(s.with.is_empty());
        assert!(s.quiet.is_none());
        assert!(s.captures.is_none());
        assert!(s.includes.is_empty());
        assert_eq!(s.count, None);
        assert_eq!(s.error, Some(ExpectedError::OutOfBounds));
    }

    #[test]
    fn test_empty_file_has_no_scenarios() {
        let file: ScenarioFile = toml::from_str("").unwrap();
        assert!(file.scenarios.is_empty());
    }

    #[test]
    fn test_unknown_error_kind_is_rejected() {
        let toml_content = r#"
[[scenario]]
name = "bad"
piece = "K"
origin = "a1"
error = "checkmate"
"#;
        assert!(toml::from_str::<ScenarioFile>(toml_content).is_err());
    }

    #[test]
    fn test_builtin_scenarios_parse() {
        let file = ScenarioFile::builtin().unwrap();
        assert!(!file.scenarios.is_empty());

        let mut names: Vec<&str> = file.scenarios.iter().map(|s| s.name.as_str()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total, "scenario names must be unique");
    }

    #[test]
    fn test_get_returns_error_for_unknown_scenario() {
        let file = ScenarioFile::default();
        match file.get("nonexistent") {
            Err(ConfigError::ScenarioNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected ScenarioNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[scenario]]
name = "from disk"
piece = "N"
origin = "b1"
"#
        )
        .unwrap();

        let loaded = ScenarioFile::load(Some(file.path())).unwrap();
        assert_eq!(loaded.scenarios.len(), 1);
        assert!(loaded.get("from disk").is_ok());
    }

    #[test]
    fn test_load_reports_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            ScenarioFile::load(Some(&missing)),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn test_load_reports_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[scenario]\nname = ").unwrap();
        assert!(matches!(
            ScenarioFile::load(Some(file.path())),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(ScenarioFile::default_path(), PathBuf::from("scenarios.toml"));
    }
}
