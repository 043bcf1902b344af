//! Move generation for single chess pieces.
//!
//! This crate provides:
//! - [`Geometry`] - the movement table mapping each piece kind to a leaper,
//!   slider or pawn pattern
//! - [`generate`] - the destinations of one piece on one square, respecting
//!   blockers, captures and board edges
//! - [`MoveSet`] - the resulting set of quiet moves and captures
//!
//! # Architecture
//!
//! Generation is a pure function of `(board, origin, color, kind)`. The board
//! is only borrowed, nothing is cached, and there is no global state, so calls
//! may run concurrently on shared boards. Check detection and special moves
//! can be layered on top by filtering a [`MoveSet`] with [`MoveSet::retain`].
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Color, MoveKind, PieceKind, Square};
//! use chess_engine::generate;
//!
//! let d4 = Square::from_algebraic("d4").unwrap();
//! let d6 = Square::from_algebraic("d6").unwrap();
//! let board = Board::empty()
//!     .with_piece(d4, Color::White, PieceKind::Rook).unwrap()
//!     .with_piece(d6, Color::Black, PieceKind::Pawn).unwrap();
//!
//! let moves = generate(&board, d4, Color::White, PieceKind::Rook).unwrap();
//! assert_eq!(moves.kind_at(d6), Some(MoveKind::Capture));
//! assert!(!moves.contains(Square::from_algebraic("d7").unwrap()));
//! ```

pub mod movegen;

pub use movegen::{generate, generate_from, Geometry, MoveGenError, MoveSet};
