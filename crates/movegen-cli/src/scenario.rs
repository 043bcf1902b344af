//! Scenario resolution and execution.
//!
//! A [`Scenario`] is a [`ScenarioConfig`] with every string parsed: a board,
//! the moving piece and the expectations. Running it calls the generator and
//! collects every unmet expectation into an [`Outcome`].

use crate::config::{ConfigError, ExpectedError, ScenarioConfig, SquareSpec};
use chess_core::{Board, Color, Occupant, PieceKind, Square};
use chess_engine::{generate, MoveGenError, MoveSet};
use serde::Serialize;
use std::collections::BTreeSet;

/// Parses a placement such as `"Rd4"` into a square and a piece.
pub fn parse_placement(text: &str) -> Option<(Square, Color, PieceKind)> {
    let mut chars = text.chars();
    let glyph = chars.next()?;
    let (kind, color) = PieceKind::from_char(glyph)?;
    let sq = Square::from_algebraic(chars.as_str())?;
    Some((sq, color, kind))
}

/// A scenario ready to run.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub board: Board,
    pub origin: Square,
    pub color: Color,
    pub kind: PieceKind,
    quiet: Option<BTreeSet<Square>>,
    captures: Option<BTreeSet<Square>>,
    includes: Vec<Square>,
    excludes: Vec<Square>,
    count: Option<usize>,
    error: Option<ExpectedError>,
}

/// The result of running one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub name: String,
    pub passed: bool,
    /// One entry per unmet expectation.
    pub failures: Vec<String>,
    /// Generated moves, e.g. `"d4-d5"` or `"d4xd6"`.
    pub moves: Vec<String>,
    /// Generation error, if generation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Scenario {
    /// Resolves a scenario from its file form.
    ///
    /// Placements listed in `with` are applied first. The moving piece is then
    /// put on the origin unless `origin_empty` is set or a placement already
    /// occupies it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unparsable squares or glyphs and for
    /// squares placed twice.
    pub fn from_config(config: &ScenarioConfig) -> Result<Self, ConfigError> {
        let name = config.name.clone();
        let invalid_square = |value: &str| ConfigError::InvalidSquare {
            scenario: name.clone(),
            value: value.to_string(),
        };
        let parse_square =
            |value: &str| Square::from_algebraic(value).ok_or_else(|| invalid_square(value));
        let parse_squares = |values: &[String]| -> Result<Vec<Square>, ConfigError> {
            values.iter().map(|v| parse_square(v.as_str())).collect()
        };

        let mut glyphs = config.piece.chars();
        let (kind, color) = match (glyphs.next(), glyphs.next()) {
            (Some(glyph), None) => PieceKind::from_char(glyph),
            _ => None,
        }
        .ok_or_else(|| ConfigError::InvalidPiece {
            scenario: name.clone(),
            value: config.piece.clone(),
        })?;

        let origin = match &config.origin {
            SquareSpec::Name(value) => parse_square(value.as_str())?,
            SquareSpec::Coords([row, col]) => Square::new(*row, *col),
        };

        let mut board = Board::empty();
        for placement in &config.with {
            let (sq, c, k) = parse_placement(placement).ok_or_else(|| ConfigError::InvalidPiece {
                scenario: name.clone(),
                value: placement.clone(),
            })?;
            let previous = board
                .set(sq, Occupant::piece(c, k))
                .map_err(|_| invalid_square(placement.as_str()))?;
            if !previous.is_empty() {
                return Err(ConfigError::DuplicatePlacement {
                    scenario: name.clone(),
                    square: sq.to_string(),
                });
            }
        }

        if !config.origin_empty && board.get(origin) == Ok(Occupant::Empty) {
            board
                .set(origin, Occupant::piece(color, kind))
                .map_err(|_| invalid_square(origin.to_string().as_str()))?;
        }

        let quiet = match &config.quiet {
            Some(values) => Some(parse_squares(values.as_slice())?.into_iter().collect()),
            None => None,
        };
        let captures = match &config.captures {
            Some(values) => Some(parse_squares(values.as_slice())?.into_iter().collect()),
            None => None,
        };

        Ok(Scenario {
            name: name.clone(),
            board,
            origin,
            color,
            kind,
            quiet,
            captures,
            includes: parse_squares(config.includes.as_slice())?,
            excludes: parse_squares(config.excludes.as_slice())?,
            count: config.count,
            error: config.error,
        })
    }

    /// Generates moves and checks every expectation.
    pub fn run(&self) -> Outcome {
        let result = generate(&self.board, self.origin, self.color, self.kind);
        let mut failures = Vec::new();

        let (moves, error): (Vec<String>, Option<String>) = match &result {
            Ok(moves) => (moves.iter().map(|m| m.to_string()).collect(), None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        };

        match (self.error, &result) {
            (Some(expected), Ok(_)) => {
                failures.push(format!("expected {:?} error, generation succeeded", expected));
            }
            (Some(expected), Err(e)) => {
                if !error_matches(expected, e) {
                    failures.push(format!("expected {:?} error, got: {}", expected, e));
                }
            }
            (None, Err(e)) => failures.push(format!("unexpected error: {}", e)),
            (None, Ok(set)) => self.check_moves(set, &mut failures),
        }

        Outcome {
            name: self.name.clone(),
            passed: failures.is_empty(),
            failures,
            moves,
            error,
        }
    }

    fn check_moves(&self, set: &MoveSet, failures: &mut Vec<String>) {
        if let Some(expected) = &self.quiet {
            let actual: BTreeSet<Square> = set.quiet().collect();
            if &actual != expected {
                failures.push(format!(
                    "quiet moves: expected [{}], got [{}]",
                    join(expected),
                    join(&actual)
                ));
            }
        }
        if let Some(expected) = &self.captures {
            let actual: BTreeSet<Square> = set.captures().collect();
            if &actual != expected {
                failures.push(format!(
                    "captures: expected [{}], got [{}]",
                    join(expected),
                    join(&actual)
                ));
            }
        }
        for sq in &self.includes {
            if !set.contains(*sq) {
                failures.push(format!("{} should be reachable", sq));
            }
        }
        for sq in &self.excludes {
            if set.contains(*sq) {
                failures.push(format!("{} should not be reachable", sq));
            }
        }
        if let Some(count) = self.count {
            if set.len() != count {
                failures.push(format!("expected {} moves, got {}", count, set.len()));
            }
        }
    }
}

fn error_matches(expected: ExpectedError, actual: &MoveGenError) -> bool {
    matches!(
        (expected, actual),
        (ExpectedError::OutOfBounds, MoveGenError::OutOfBounds(_))
            | (ExpectedError::InvalidOrigin, MoveGenError::InvalidOrigin { .. })
    )
}

fn join(squares: &BTreeSet<Square>) -> String {
    squares
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioFile;

    fn config(toml_content: &str) -> ScenarioConfig {
        let file: ScenarioFile = toml::from_str(toml_content).unwrap();
        file.scenarios.into_iter().next().unwrap()
    }

    #[test]
    fn parse_placement_reads_glyph_and_square() {
        assert_eq!(
            parse_placement("Rd4"),
            Some((Square::new(3, 3), Color::White, PieceKind::Rook))
        );
        assert_eq!(
            parse_placement("pe7"),
            Some((Square::new(6, 4), Color::Black, PieceKind::Pawn))
        );
        assert_eq!(parse_placement("Xd4"), None);
        assert_eq!(parse_placement("R"), None);
        assert_eq!(parse_placement("Rz9"), None);
    }

    #[test]
    fn resolves_board_and_piece() {
        let scenario = Scenario::from_config(&config(
            r#"
[[scenario]]
name = "s"
piece = "r"
origin = "d4"
with = ["Pd6"]
"#,
        ))
        .unwrap();

        assert_eq!(scenario.color, Color::Black);
        assert_eq!(scenario.kind, PieceKind::Rook);
        assert_eq!(
            scenario.board.get(Square::new(3, 3)),
            Ok(Occupant::piece(Color::Black, PieceKind::Rook))
        );
        assert_eq!(scenario.board.piece_count(), 2);
    }

    #[test]
    fn placement_on_origin_wins_over_moving_piece() {
        let scenario = Scenario::from_config(&config(
            r#"
[[scenario]]
name = "s"
piece = "R"
origin = "d4"
with = ["rd4"]
"#,
        ))
        .unwrap();
        assert_eq!(
            scenario.board.get(scenario.origin),
            Ok(Occupant::piece(Color::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn rejects_bad_input() {
        let bad_piece = config(
            r#"
[[scenario]]
name = "s"
piece = "Rook"
origin = "d4"
"#,
        );
        assert!(matches!(
            Scenario::from_config(&bad_piece),
            Err(ConfigError::InvalidPiece { .. })
        ));

        let bad_square = config(
            r#"
[[scenario]]
name = "s"
piece = "R"
origin = "z4"
"#,
        );
        assert!(matches!(
            Scenario::from_config(&bad_square),
            Err(ConfigError::InvalidSquare { .. })
        ));

        let duplicate = config(
            r#"
[[scenario]]
name = "s"
piece = "R"
origin = "d4"
with = ["Pd6", "pd6"]
"#,
        );
        assert!(matches!(
            Scenario::from_config(&duplicate),
            Err(ConfigError::DuplicatePlacement { .. })
        ));
    }

    #[test]
    fn passing_scenario() {
        let scenario = Scenario::from_config(&config(
            r#"
[[scenario]]
name = "rook capture"
piece = "R"
origin = "d4"
with = ["pd6"]
captures = ["d6"]
excludes = ["d7", "d8"]
count = 12
"#,
        ))
        .unwrap();

        let outcome = scenario.run();
        assert!(outcome.passed, "failures: {:?}", outcome.failures);
        assert_eq!(outcome.moves.len(), 12);
        assert!(outcome.moves.contains(&"d4xd6".to_string()));
        assert!(outcome.error.is_none());
    }

    #[test]
    fn failing_scenario_lists_every_problem() {
        let scenario = Scenario::from_config(&config(
            r#"
[[scenario]]
name = "wrong"
piece = "K"
origin = "a1"
quiet = ["b1"]
includes = ["c3"]
excludes = ["b2"]
count = 1
"#,
        ))
        .unwrap();

        let outcome = scenario.run();
        assert!(!outcome.passed);
        assert_eq!(outcome.failures.len(), 4);
    }

    #[test]
    fn expected_errors() {
        let off_board = Scenario::from_config(&config(
            r#"
[[scenario]]
name = "off"
piece = "K"
origin = [8, 0]
error = "out-of-bounds"
"#,
        ))
        .unwrap();
        assert!(off_board.run().passed);

        let empty = Scenario::from_config(&config(
            r#"
[[scenario]]
name = "empty"
piece = "K"
origin = "a1"
origin_empty = true
error = "out-of-bounds"
"#,
        ))
        .unwrap();
        let outcome = empty.run();
        assert!(!outcome.passed);
        assert!(outcome.error.is_some());
    }

    #[test]
    fn unexpected_error_fails() {
        let scenario = Scenario::from_config(&config(
            r#"
[[scenario]]
name = "empty"
piece = "Q"
origin = "e4"
origin_empty = true
"#,
        ))
        .unwrap();
        let outcome = scenario.run();
        assert!(!outcome.passed);
        assert!(outcome.failures[0].starts_with("unexpected error"));
    }

    #[test]
    fn every_builtin_scenario_passes() {
        let file = ScenarioFile::builtin().unwrap();
        for config in &file.scenarios {
            let outcome = Scenario::from_config(config).unwrap().run();
            assert!(
                outcome.passed,
                "{} failed: {:?}",
                outcome.name, outcome.failures
            );
        }
    }
}
