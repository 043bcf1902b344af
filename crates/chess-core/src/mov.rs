//! Move representation.

use crate::Square;
use std::fmt;

/// Whether a move lands on an empty square or takes an opposing piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveKind {
    /// Destination is empty.
    Quiet,
    /// Destination holds an opposing piece.
    Capture,
}

/// A single reachable destination from an origin square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    /// Creates a quiet move.
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Quiet)
    }

    /// Creates a capture.
    #[inline]
    pub const fn capture(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Capture)
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self.kind, MoveKind::Capture)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    /// `d4-d5` for a quiet move, `d4xd6` for a capture.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = match self.kind {
            MoveKind::Quiet => '-',
            MoveKind::Capture => 'x',
        };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_accessors() {
        let d4 = Square::new(3, 3);
        let d6 = Square::new(5, 3);
        let m = Move::capture(d4, d6);

        assert_eq!(m.from(), d4);
        assert_eq!(m.to(), d6);
        assert_eq!(m.kind(), MoveKind::Capture);
        assert!(m.is_capture());
        assert!(!Move::quiet(d4, d6).is_capture());
    }

    #[test]
    fn move_debug_display() {
        let d4 = Square::new(3, 3);
        let d5 = Square::new(4, 3);
        assert_eq!(format!("{}", Move::quiet(d4, d5)), "d4-d5");
        assert_eq!(format!("{:?}", Move::capture(d4, d5)), "Move(d4xd5)");
    }

    #[test]
    fn moves_order_by_destination_then_kind() {
        let d4 = Square::new(3, 3);
        let a = Move::quiet(d4, Square::new(4, 3));
        let b = Move::capture(d4, Square::new(4, 3));
        let c = Move::quiet(d4, Square::new(5, 3));
        assert!(a < b);
        assert!(b < c);
    }
}
