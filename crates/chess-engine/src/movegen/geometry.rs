//! Movement geometry for every piece kind.

use chess_core::{Direction, PieceKind};

/// King offsets: one step in each of the eight directions.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Knight offsets: (rank_delta, file_delta).
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// How a piece kind moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Applies each offset once from the origin.
    Leaper(&'static [(i8, i8)]),
    /// Extends along each direction until the edge or the first piece.
    Slider(&'static [Direction]),
    /// Single forward step onto an empty square, diagonal-forward captures.
    Pawn,
}

impl Geometry {
    /// Looks up the geometry for a piece kind.
    pub const fn of(kind: PieceKind) -> Geometry {
        match kind {
            PieceKind::King => Geometry::Leaper(&KING_OFFSETS),
            PieceKind::Knight => Geometry::Leaper(&KNIGHT_OFFSETS),
            PieceKind::Rook => Geometry::Slider(&Direction::ORTHOGONAL),
            PieceKind::Bishop => Geometry::Slider(&Direction::DIAGONAL),
            PieceKind::Queen => Geometry::Slider(&Direction::ALL),
            PieceKind::Pawn => Geometry::Pawn,
        }
    }
}
