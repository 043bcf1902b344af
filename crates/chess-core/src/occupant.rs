//! What sits on a square.

use crate::{Color, PieceKind};
use std::fmt;

/// The content of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Occupied { color: Color, kind: PieceKind },
}

impl Occupant {
    /// Creates an occupied square.
    #[inline]
    pub const fn piece(color: Color, kind: PieceKind) -> Self {
        Occupant::Occupied { color, kind }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Returns the color of the piece, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied { color, .. } => Some(color),
        }
    }

    /// Returns the kind of the piece, if any.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied { kind, .. } => Some(kind),
        }
    }

    /// Returns true if a piece of `color` stands here.
    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Returns the board glyph: `.` for empty, otherwise the piece letter.
    pub const fn to_char(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::Occupied { color, kind } => kind.to_char(color),
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Empty => write!(f, "empty"),
            Occupant::Occupied { color, kind } => write!(f, "{} {}", color, kind),
        }
    }
}
