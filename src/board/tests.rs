use crate::board::square::*;
use crate::search_node::{PiecePlacement, SearchNode};
use crate::{castle_kingside, chess_position, std_move};

use super::*;

#[test]
fn test_put_get_remove() {
    let mut board = Board::new();
    board.put(D4, Piece::Queen, Color::Black).unwrap();

    assert_eq!(Some((Piece::Queen, Color::Black)), board.get(D4));
    assert!(board.is_occupied(D4));
    assert_eq!(
        Err(BoardError::SquareOccupiedBoardPutError(D4)),
        board.put(D4, Piece::Knight, Color::White)
    );

    assert_eq!(Some((Piece::Queen, Color::Black)), board.remove(D4));
    assert_eq!(None, board.remove(D4));
    assert!(board.occupied().is_empty());
}

#[test]
fn test_starting_position_occupancy() {
    let board = Board::starting_position();
    assert_eq!(32, board.occupied().count_ones());
    assert_eq!(Some((Piece::King, Color::White)), board.get(E1));
    assert_eq!(Some((Piece::Queen, Color::Black)), board.get(D8));
    assert_eq!(None, board.get(E4));
    assert_eq!(Color::White, board.turn());
    assert_eq!(Color::White, board.maximizing_player());
    assert_eq!(None, board.last_move());
}

#[test]
fn test_with_last_move_leaves_parent_untouched() {
    let root = Board::starting_position();
    let child = root.with_last_move(std_move!(E2, E4));

    assert_eq!(None, root.last_move());
    assert_eq!(Some(&std_move!(E2, E4)), child.last_move());
    assert_eq!(Some(&std_move!(E2, E4)), child.producing_move());
}

#[test]
fn test_pieces_visits_every_piece_once() {
    let board = Board::starting_position();

    for color in Color::ALL {
        let pieces = SearchNode::pieces(&board, color);
        assert_eq!((16, Some(16)), pieces.size_hint());

        let mut squares: Vec<_> = SearchNode::pieces(&board, color)
            .map(|placement| placement.square().unwrap())
            .collect();
        squares.dedup();
        assert_eq!(16, squares.len());
    }
}

#[test]
fn test_pieces_of_kind_reports_mobility() {
    let board = Board::starting_position();

    let knights: Vec<_> = board.pieces_of_kind(Color::White, Piece::Knight).collect();
    assert_eq!(
        vec![
            PiecePlacement::new(Piece::Knight, B1, 2),
            PiecePlacement::new(Piece::Knight, G1, 2),
        ],
        knights
    );

    let rook_moves: u32 = board
        .pieces_of_kind(Color::Black, Piece::Rook)
        .map(|placement| placement.legal_moves)
        .sum();
    assert_eq!(0, rook_moves);

    assert_eq!(8, board.pieces_of_kind(Color::Black, Piece::Pawn).count());
}

#[test]
fn test_mobility_by_square() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ........
        ...Q....
        ........
        ........
        ....K...
    };

    assert_eq!(Some(27), board.mobility(D4));
    assert_eq!(Some(5), board.mobility(E1));
    assert_eq!(None, board.mobility(A1));
}

#[test]
fn test_search_node_accessors() {
    let mut board = Board::starting_position().with_last_move(castle_kingside!(Color::Black));
    board.set_turn(Color::Black);
    board.set_maximizing_player(Color::White);

    assert_eq!(Color::Black, SearchNode::turn(&board));
    assert_eq!(Color::White, SearchNode::maximizing_player(&board));
    assert_eq!(Color::Black, board.minimizing_player());
    assert_eq!(
        Some(&castle_kingside!(Color::Black)),
        (&board).producing_move()
    );
}

#[test]
fn test_display() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ........
        ....P...
        ........
        ........
        ....K...
    };

    let expected = "\
8 ....k...
7 ........
6 ........
5 ........
4 ....P...
3 ........
2 ........
1 ....K...
  abcdefgh
";
    assert_eq!(expected, board.to_string());
}
