//! Move generation.
//!
//! Destinations for one piece on one square are produced by walking the
//! piece's [`Geometry`] against the board's occupancy. Sliders stop at the
//! first piece they meet, taking it only if it belongs to the other side.

mod geometry;

use chess_core::{
    Board, BoardError, Color, Direction, Move, MoveKind, Occupant, PieceKind, Square,
};
use std::collections::BTreeSet;
use thiserror::Error;

pub use geometry::{Geometry, KING_OFFSETS, KNIGHT_OFFSETS};

/// Errors raised by move generation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveGenError {
    #[error("square {0} is off the board")]
    OutOfBounds(Square),

    /// The origin is empty or holds a piece of the other side.
    #[error("invalid origin {square}: found {found}")]
    InvalidOrigin { square: Square, found: Occupant },
}

impl From<BoardError> for MoveGenError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::OutOfBounds(sq) => MoveGenError::OutOfBounds(sq),
        }
    }
}

/// The set of moves available to one piece.
///
/// Ordering carries no meaning; two sets are equal when they hold the same
/// moves. Iteration is sorted by destination so output is reproducible.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: BTreeSet<Move>,
}

impl MoveSet {
    /// Creates an empty move set.
    #[inline]
    pub fn new() -> Self {
        MoveSet {
            moves: BTreeSet::new(),
        }
    }

    /// Adds a move, returning false if it was already present.
    #[inline]
    pub fn insert(&mut self, m: Move) -> bool {
        self.moves.insert(m)
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns true if some move lands on `sq`.
    pub fn contains(&self, sq: Square) -> bool {
        self.kind_at(sq).is_some()
    }

    /// Returns how `sq` is reached, if it is reached at all.
    pub fn kind_at(&self, sq: Square) -> Option<MoveKind> {
        self.moves.iter().find(|m| m.to() == sq).map(|m| m.kind())
    }

    /// Iterates over the moves.
    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter()
    }

    /// Iterates over destination squares.
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().map(|m| m.to())
    }

    /// Iterates over destinations reached by quiet moves.
    pub fn quiet(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves
            .iter()
            .filter(|m| !m.is_capture())
            .map(|m| m.to())
    }

    /// Iterates over destinations reached by captures.
    pub fn captures(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves
            .iter()
            .filter(|m| m.is_capture())
            .map(|m| m.to())
    }

    /// Returns the moves present in either set.
    pub fn union(&self, other: &MoveSet) -> MoveSet {
        MoveSet {
            moves: self.moves.union(&other.moves).copied().collect(),
        }
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(|m| f(m));
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveSet {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::collections::btree_set::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl std::fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.moves.iter()).finish()
    }
}

/// Generates the moves of a `color` `kind` standing on `origin`.
///
/// The origin must hold a piece of `color`; its kind is not checked against
/// `kind`, so a square can be probed with any movement pattern.
///
/// # Errors
///
/// [`MoveGenError::OutOfBounds`] if `origin` is off the board,
/// [`MoveGenError::InvalidOrigin`] if it is empty or holds the other side.
pub fn generate(
    board: &Board,
    origin: Square,
    color: Color,
    kind: PieceKind,
) -> Result<MoveSet, MoveGenError> {
    let found = board.get(origin)?;
    if !found.is_color(color) {
        return Err(MoveGenError::InvalidOrigin {
            square: origin,
            found,
        });
    }

    let mut moves = MoveSet::new();
    match Geometry::of(kind) {
        Geometry::Leaper(offsets) => generate_leaper(board, origin, color, offsets, &mut moves),
        Geometry::Slider(directions) => {
            for &dir in directions {
                generate_ray(board, origin, color, dir, &mut moves);
            }
        }
        Geometry::Pawn => generate_pawn(board, origin, color, &mut moves),
    }
    Ok(moves)
}

/// Generates the moves of whatever piece stands on `origin`.
///
/// # Errors
///
/// [`MoveGenError::OutOfBounds`] if `origin` is off the board,
/// [`MoveGenError::InvalidOrigin`] if it is empty.
pub fn generate_from(board: &Board, origin: Square) -> Result<MoveSet, MoveGenError> {
    match board.get(origin)? {
        Occupant::Occupied { color, kind } => generate(board, origin, color, kind),
        found @ Occupant::Empty => Err(MoveGenError::InvalidOrigin {
            square: origin,
            found,
        }),
    }
}

/// Classifies a target square for a piece of `us`.
///
/// Returns `None` for off-board squares and squares holding our own pieces.
#[inline]
fn target_kind(board: &Board, to: Square, us: Color) -> Option<MoveKind> {
    match board.get(to).ok()? {
        Occupant::Empty => Some(MoveKind::Quiet),
        Occupant::Occupied { color, .. } if color != us => Some(MoveKind::Capture),
        Occupant::Occupied { .. } => None,
    }
}

/// Generates king and knight moves.
fn generate_leaper(
    board: &Board,
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(drow, dcol) in offsets {
        let to = from.offset(drow, dcol);
        if let Some(kind) = target_kind(board, to, us) {
            moves.insert(Move::new(from, to, kind));
        }
    }
}

/// Generates moves along one ray, stopping at the edge or the first piece.
fn generate_ray(board: &Board, from: Square, us: Color, dir: Direction, moves: &mut MoveSet) {
    let mut to = from.step(dir);
    while let Ok(occupant) = board.get(to) {
        match occupant {
            Occupant::Empty => {
                moves.insert(Move::quiet(from, to));
            }
            Occupant::Occupied { color, .. } => {
                if color != us {
                    moves.insert(Move::capture(from, to));
                }
                break;
            }
        }
        to = to.step(dir);
    }
}

/// Generates pawn moves: one step forward onto an empty square, and
/// diagonal-forward captures.
fn generate_pawn(board: &Board, from: Square, us: Color, moves: &mut MoveSet) {
    let forward = us.pawn_direction();

    let push = from.offset(forward, 0);
    if board.get(push) == Ok(Occupant::Empty) {
        moves.insert(Move::quiet(from, push));
    }

    for dcol in [-1, 1] {
        let to = from.offset(forward, dcol);
        if target_kind(board, to, us) == Some(MoveKind::Capture) {
            moves.insert(Move::capture(from, to));
        }
    }
}
