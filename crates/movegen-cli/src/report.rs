//! Text and JSON output for harness runs.

use crate::scenario::Outcome;
use chess_core::{Board, MoveKind, Square};
use chess_engine::MoveSet;
use serde::Serialize;
use std::path::Path;

/// Renders the board with reachable squares marked.
///
/// Quiet destinations show `o`, captures show `x`; every other square shows
/// its occupant. Rank 8 is printed first, with rank and file labels.
pub fn render_board(board: &Board, moves: &MoveSet) -> String {
    let mut out = String::new();
    for row in (0..8).rev() {
        out.push_str(&format!("{} ", row + 1));
        for col in 0..8 {
            let sq = Square::new(row, col);
            let glyph = match moves.kind_at(sq) {
                Some(MoveKind::Quiet) => 'o',
                Some(MoveKind::Capture) => 'x',
                None => board.get(sq).map(|occ| occ.to_char()).unwrap_or('?'),
            };
            out.push(' ');
            out.push(glyph);
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}

/// Pass/fail totals of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn of(outcomes: &[Outcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        Summary {
            passed,
            failed: outcomes.len() - passed,
        }
    }

    pub fn all_passed(self) -> bool {
        self.failed == 0
    }
}

#[derive(Serialize)]
struct ReportJson<'a> {
    summary: Summary,
    scenarios: &'a [Outcome],
}

/// Writes a run report as pretty-printed JSON.
///
/// # File Format
///
/// ```json
/// {
///   "summary": { "passed": 1, "failed": 0 },
///   "scenarios": [
///     {
///       "name": "rook-captures-then-stops",
///       "passed": true,
///       "failures": [],
///       "moves": ["d4-d5", "d4xd6"]
///     }
///   ]
/// }
/// ```
pub fn write_json<P: AsRef<Path>>(path: P, outcomes: &[Outcome]) -> std::io::Result<()> {
    let json = ReportJson {
        summary: Summary::of(outcomes),
        scenarios: outcomes,
    };
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &json)?;
    Ok(())
}
