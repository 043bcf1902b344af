//! Board square representation.

use crate::Direction;
use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// A square addressed by `(row, col)`.
///
/// a1 = (0, 0). The row is the rank index (rank 1 = row 0) and the column is
/// the file index (file a = col 0), so d4 = (3, 3) and h8 = (7, 7).
///
/// Off-board squares are representable so that offset arithmetic can walk past
/// an edge; use [`Square::in_bounds`] before treating one as a board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

/// Returns true if both coordinates of `sq` are in `0..=7`.
#[inline]
pub const fn in_bounds(sq: Square) -> bool {
    sq.in_bounds()
}

impl Square {
    /// Creates a square from row and column. The result may be off-board.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Creates a square from a board index (0-63, row-major from a1).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square::new((index / 8) as i8, (index % 8) as i8))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square::new((rank - b'1') as i8, (file - b'a') as i8))
    }

    /// Returns the row (rank index).
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Returns the column (file index).
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns true if the square lies on the 8×8 board.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns the board index (0-63), or `None` for an off-board square.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some((self.row * BOARD_SIZE + self.col) as usize)
        } else {
            None
        }
    }

    /// Returns the square displaced by `(drow, dcol)`.
    ///
    /// Saturates instead of wrapping, so an off-board square never comes back
    /// onto the board through overflow.
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Self {
        Square::new(self.row.saturating_add(drow), self.col.saturating_add(dcol))
    }

    /// Returns the neighbouring square in `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (drow, dcol) = dir.delta();
        self.offset(drow, dcol)
    }

    /// Returns the algebraic notation, or `None` for an off-board square.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.in_bounds() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        Some(format!("{}{}", file, rank))
    }

    /// Iterates over all 64 on-board squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).filter_map(Square::from_index)
    }

    // Corners
    pub const A1: Square = Square::new(0, 0);
    pub const H1: Square = Square::new(0, 7);
    pub const A8: Square = Square::new(7, 0);
    pub const H8: Square = Square::new(7, 7);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({},{})", self.row, self.col),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| format!("invalid square '{}'", s))
    }
}
