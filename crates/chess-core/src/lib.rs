//! Core types for chess.
//!
//! This crate provides the fundamental types used by the move generator:
//! - [`Color`] and [`PieceKind`] for piece identity
//! - [`Square`] and [`Direction`] for board coordinates
//! - [`Occupant`] and [`Board`] for occupancy
//! - [`Move`] and [`MoveKind`] for generated moves

mod board;
mod color;
mod direction;
mod mov;
mod occupant;
mod piece;
mod square;

pub use board::{Board, BoardError};
pub use color::Color;
pub use direction::Direction;
pub use mov::{Move, MoveKind};
pub use occupant::Occupant;
pub use piece::PieceKind;
pub use square::{in_bounds, Square, BOARD_SIZE};
