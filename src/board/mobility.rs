//! Pseudo-legal move counting for the reference board. Pins, checks, castling and
//! en passant are not considered; a driver with a real move generator supplies its
//! own counts through `SearchNode`.

use super::color::Color;
use super::piece::Piece;
use super::square::Square;
use super::Board;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(super) fn count_moves(board: &Board, square: Square, piece: Piece, color: Color) -> u32 {
    match piece {
        Piece::Pawn => count_pawn_moves(board, square, color),
        Piece::Knight => count_steps(board, square, color, &KNIGHT_JUMPS),
        Piece::King => count_steps(board, square, color, &KING_STEPS),
        Piece::Bishop => count_rays(board, square, color, &DIAGONAL),
        Piece::Rook => count_rays(board, square, color, &ORTHOGONAL),
        Piece::Queen => {
            count_rays(board, square, color, &DIAGONAL)
                + count_rays(board, square, color, &ORTHOGONAL)
        }
    }
}

#[inline]
fn is_reachable(board: &Board, target: Square, color: Color) -> bool {
    !board.pieces(color).is_occupied(target)
}

fn count_steps(board: &Board, square: Square, color: Color, steps: &[(i8, i8)]) -> u32 {
    steps
        .iter()
        .filter_map(|&(rank_delta, file_delta)| square.offset(rank_delta, file_delta))
        .filter(|&target| is_reachable(board, target, color))
        .count() as u32
}

fn count_rays(board: &Board, square: Square, color: Color, directions: &[(i8, i8)]) -> u32 {
    let mut count = 0;
    for &(rank_delta, file_delta) in directions {
        let mut current = square;
        while let Some(target) = current.offset(rank_delta, file_delta) {
            if board.pieces(color).is_occupied(target) {
                break;
            }
            count += 1;
            if board.pieces(color.opposite()).is_occupied(target) {
                break;
            }
            current = target;
        }
    }
    count
}

fn count_pawn_moves(board: &Board, square: Square, color: Color) -> u32 {
    let forward = color.forward();
    let start_rank = match color {
        Color::White => 1,
        Color::Black => 6,
    };
    let mut count = 0;

    if let Some(single) = square.offset(forward, 0) {
        if !board.is_occupied(single) {
            count += 1;
            if square.rank() == start_rank {
                if let Some(double) = single.offset(forward, 0) {
                    if !board.is_occupied(double) {
                        count += 1;
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(target) = square.offset(forward, file_delta) {
            if board.pieces(color.opposite()).is_occupied(target) {
                count += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;
    use crate::chess_position;

    #[test]
    fn test_starting_position_mobility() {
        let board = Board::starting_position();
        // every pawn can push one or two squares, knights have two jumps each
        assert_eq!(Some(2), board.mobility(E2));
        assert_eq!(Some(2), board.mobility(G1));
        assert_eq!(Some(0), board.mobility(A1));
        assert_eq!(Some(0), board.mobility(D1));
        assert_eq!(Some(0), board.mobility(E8));
        assert_eq!(Some(2), board.mobility(B8));
        assert_eq!(None, board.mobility(E4));
    }

    #[test]
    fn test_sliders_stop_at_blockers() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ...p....
            ........
            ........
            ...R.P..
            ....K...
        };
        // up the d-file to the capture on d5, down to d1, left to a2, right to e2 before f2
        assert_eq!(Some(3 + 1 + 3 + 1), board.mobility(D2));
    }

    #[test]
    fn test_pawn_captures_and_blocked_pushes() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ...n.b..
            ....P...
            ........
            ....K...
        };
        // the push is free, both diagonals hold enemy pieces
        assert_eq!(Some(3), board.mobility(E3));

        let blocked = chess_position! {
            ....k...
            ........
            ........
            ........
            ....p...
            ....P...
            ........
            ....K...
        };
        assert_eq!(Some(0), blocked.mobility(E3));
        assert_eq!(Some(0), blocked.mobility(E4));
    }

    #[test]
    fn test_queen_in_open_center() {
        let board = chess_position! {
            k.......
            ........
            ........
            ........
            ...Q....
            ........
            ........
            .......K
        };
        // 14 orthogonal + 13 diagonal squares from d4
        assert_eq!(Some(27), board.mobility(D4));
    }
}
