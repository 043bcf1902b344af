//! Properties that must hold for every board and every piece.

use chess_core::{Board, Color, MoveKind, Occupant, PieceKind, Square};
use chess_engine::{generate, MoveGenError};
use proptest::prelude::*;

fn arb_color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

fn arb_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn arb_square() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(|i| Square::from_index(i).unwrap())
}

/// A board with up to 24 random pieces plus a guaranteed piece on the origin.
fn arb_scenario() -> impl Strategy<Value = (Board, Square, Color, PieceKind)> {
    (
        prop::collection::vec((arb_square(), arb_color(), arb_kind()), 0..24),
        arb_square(),
        arb_color(),
        arb_kind(),
    )
        .prop_map(|(pieces, origin, color, kind)| {
            let mut board = Board::empty();
            for (sq, c, k) in pieces {
                board.set(sq, Occupant::piece(c, k)).unwrap();
            }
            board.set(origin, Occupant::piece(color, kind)).unwrap();
            (board, origin, color, kind)
        })
}

proptest! {
    #[test]
    fn destinations_stay_on_board((board, origin, color, kind) in arb_scenario()) {
        let moves = generate(&board, origin, color, kind).unwrap();
        for m in &moves {
            prop_assert!(m.to().in_bounds());
            prop_assert_eq!(m.from(), origin);
            prop_assert_ne!(m.to(), origin);
        }
    }

    #[test]
    fn own_pieces_are_never_destinations((board, origin, color, kind) in arb_scenario()) {
        let moves = generate(&board, origin, color, kind).unwrap();
        for to in moves.destinations() {
            prop_assert!(!board.get(to).unwrap().is_color(color));
        }
    }

    #[test]
    fn move_kind_matches_occupant((board, origin, color, kind) in arb_scenario()) {
        let moves = generate(&board, origin, color, kind).unwrap();
        for m in &moves {
            let target = board.get(m.to()).unwrap();
            match m.kind() {
                MoveKind::Quiet => prop_assert!(target.is_empty()),
                MoveKind::Capture => prop_assert!(target.is_color(color.opposite())),
            }
        }
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop((board, origin, color, _kind) in arb_scenario()) {
        let queen = generate(&board, origin, color, PieceKind::Queen).unwrap();
        let rook = generate(&board, origin, color, PieceKind::Rook).unwrap();
        let bishop = generate(&board, origin, color, PieceKind::Bishop).unwrap();
        prop_assert_eq!(queen, rook.union(&bishop));
    }

    #[test]
    fn generation_is_deterministic((board, origin, color, kind) in arb_scenario()) {
        let first = generate(&board, origin, color, kind).unwrap();
        let second = generate(&board.clone(), origin, color, kind).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn slider_rays_stop_at_first_piece((board, origin, color, _kind) in arb_scenario()) {
        let moves = generate(&board, origin, color, PieceKind::Queen).unwrap();
        for to in moves.destinations() {
            // Every square strictly between origin and destination is empty
            let drow = (to.row() - origin.row()).signum();
            let dcol = (to.col() - origin.col()).signum();
            let mut between = origin.offset(drow, dcol);
            while between != to {
                prop_assert!(board.get(between).unwrap().is_empty());
                between = between.offset(drow, dcol);
            }
        }
    }

    #[test]
    fn generation_does_not_touch_the_board((board, origin, color, kind) in arb_scenario()) {
        let before = board.clone();
        let _ = generate(&board, origin, color, kind).unwrap();
        prop_assert_eq!(before, board);
    }

    #[test]
    fn off_board_origins_fail(row in any::<i8>(), col in 8i8.., kind in arb_kind()) {
        let origin = Square::new(row, col);
        let result = generate(&Board::empty(), origin, Color::White, kind);
        prop_assert_eq!(result, Err(MoveGenError::OutOfBounds(origin)));
    }

    #[test]
    fn empty_origins_fail(origin in arb_square(), color in arb_color(), kind in arb_kind()) {
        let result = generate(&Board::empty(), origin, color, kind);
        let is_invalid_origin = matches!(result, Err(MoveGenError::InvalidOrigin { .. }));
        prop_assert!(is_invalid_origin);
    }
}

#[test]
fn concurrent_generation_on_a_shared_board() {
    let d4 = Square::from_algebraic("d4").unwrap();
    let board = Board::empty()
        .with_piece(d4, Color::White, PieceKind::Queen)
        .unwrap();
    let expected = generate(&board, d4, Color::White, PieceKind::Queen).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| generate(&board, d4, Color::White, PieceKind::Queen).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
