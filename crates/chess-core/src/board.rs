//! Board occupancy.

use crate::{Color, Occupant, PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Errors raised by board access.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("square {0} is off the board")]
    OutOfBounds(Square),
}

/// A total mapping from the 64 squares to their occupants.
///
/// Every accessor validates its square and reports [`BoardError::OutOfBounds`]
/// rather than clamping or wrapping.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Occupant; 64],
}

impl Board {
    /// Creates a board with every square empty.
    pub const fn empty() -> Self {
        Board {
            cells: [Occupant::Empty; 64],
        }
    }

    fn cell_index(sq: Square) -> Result<usize, BoardError> {
        sq.index().ok_or(BoardError::OutOfBounds(sq))
    }

    /// Returns what stands on `sq`.
    pub fn get(&self, sq: Square) -> Result<Occupant, BoardError> {
        Ok(self.cells[Self::cell_index(sq)?])
    }

    /// Returns a copy of this board with `sq` holding `occupant`.
    pub fn with(&self, sq: Square, occupant: Occupant) -> Result<Board, BoardError> {
        let mut board = self.clone();
        board.set(sq, occupant)?;
        Ok(board)
    }

    /// Places a piece, consuming and returning the board for chained setup.
    pub fn with_piece(
        mut self,
        sq: Square,
        color: Color,
        kind: PieceKind,
    ) -> Result<Board, BoardError> {
        self.set(sq, Occupant::piece(color, kind))?;
        Ok(self)
    }

    /// Replaces the occupant of `sq` in place, returning the previous one.
    pub fn set(&mut self, sq: Square, occupant: Occupant) -> Result<Occupant, BoardError> {
        let index = Self::cell_index(sq)?;
        Ok(std::mem::replace(&mut self.cells[index], occupant))
    }

    /// Iterates over occupied squares, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, PieceKind)> + '_ {
        Square::all().filter_map(move |sq| {
            let index = sq.index()?;
            match self.cells[index] {
                Occupant::Empty => None,
                Occupant::Occupied { color, kind } => Some((sq, color, kind)),
            }
        })
    }

    /// Returns the number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|occ| !occ.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    /// Prints rank 8 at the top, one glyph per square separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            let line: Vec<String> = (0..8)
                .map(|col| self.cells[(row * 8 + col) as usize].to_char().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pieces().map(|(sq, color, kind)| (sq, kind.to_char(color))))
            .finish()
    }
}
