use crate::chess::board::Board;
use crate::chess::piece::{Piece, Side};
use crate::core::coord::Coord;
use crate::core::location::index_to_location;

use super::attacks::can_reach;
use super::checkmate::is_check;

/// A move, naming its piece by the square it starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// The move in input notation, e.g. `e2e3`.
    pub fn notation(&self) -> String {
        format!(
            "{}{}",
            index_to_location(self.from).unwrap_or_default(),
            index_to_location(self.to).unwrap_or_default()
        )
    }
}

/// True iff `piece` may legally move to `to`: it can reach the square, the square is empty or
/// holds an enemy, and afterwards its own king is not in check.
///
/// The move is tried on a copy; `board` is never touched.
pub fn can_move_to(board: &Board, piece: &Piece, to: Coord) -> bool {
    if !can_reach(board, piece, to) {
        return false;
    }
    if matches!(board.piece_at(to), Some(target) if target.side == piece.side) {
        return false;
    }
    let after = simulate_move(board, piece.at(), to);
    !is_check(&after, piece.side)
}

/// Moves the piece on `from` to `to`, removing any piece that stood on `to`.
///
/// Nothing is validated here; callers check [`can_move_to`] first.
pub fn move_to(board: &mut Board, from: Coord, to: Coord) {
    let moved = board.relocate(from, to);
    debug_assert!(moved, "no piece on {from:?}");
}

/// The board that results from playing `from -> to` on an independent copy of `board`.
///
/// Every what-if question in the engine goes through here.
pub fn simulate_move(board: &Board, from: Coord, to: Coord) -> Board {
    let mut next = board.clone();
    move_to(&mut next, from, to);
    next
}

/// Every legal move for `side`: pieces in collection order, then destinations column by column.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::new();
    for piece in board.pieces_of(side) {
        for to in board.squares() {
            if can_move_to(board, piece, to) {
                out.push(Move::new(piece.at(), to));
            }
        }
    }
    out
}

/// Does `side` have *any* legal move?
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .pieces_of(side)
        .any(|piece| board.squares().any(|to| can_move_to(board, piece, to)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_bishop_cannot_leave_the_diagonal() {
        // The black bishop on (4,4) pins the white bishop on (2,2) to the king on (1,1).
        let board = Board::new(
            5,
            vec![
                Piece::king(Side::White, 1, 1),
                Piece::bishop(Side::White, 2, 2),
                Piece::bishop(Side::Black, 4, 4),
                Piece::king(Side::Black, 5, 1),
            ],
        )
        .unwrap();
        let pinned = board.pieces()[1];

        assert!(can_move_to(&board, &pinned, Coord::new(3, 3)));
        assert!(can_move_to(&board, &pinned, Coord::new(4, 4)));
        assert!(!can_move_to(&board, &pinned, Coord::new(1, 3)));
        assert!(!can_move_to(&board, &pinned, Coord::new(3, 1)));
    }

    #[test]
    fn king_cannot_step_into_a_bishop_line() {
        let board = Board::new(
            5,
            vec![
                Piece::king(Side::White, 1, 1),
                Piece::bishop(Side::Black, 4, 3),
                Piece::king(Side::Black, 5, 5),
            ],
        )
        .unwrap();
        let king = board.pieces()[0];

        assert!(!can_move_to(&board, &king, Coord::new(2, 1)));
        assert!(can_move_to(&board, &king, Coord::new(1, 2)));
        assert!(can_move_to(&board, &king, Coord::new(2, 2)));
        assert_eq!(
            legal_moves(&board, Side::White),
            vec![
                Move::new(Coord::new(1, 1), Coord::new(1, 2)),
                Move::new(Coord::new(1, 1), Coord::new(2, 2)),
            ]
        );
    }

    #[test]
    fn trial_moves_leave_the_board_alone() {
        let board = Board::new(
            3,
            vec![
                Piece::king(Side::White, 1, 1),
                Piece::bishop(Side::White, 2, 2),
                Piece::king(Side::Black, 3, 3),
            ],
        )
        .unwrap();
        let before = board.clone();

        let after = simulate_move(&board, Coord::new(2, 2), Coord::new(3, 3));
        assert_eq!(board, before);
        assert_eq!(after.pieces().len(), 2);
        assert!(!legal_moves(&board, Side::White).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn notation_uses_locations() {
        assert_eq!(Move::new(Coord::new(5, 2), Coord::new(5, 3)).notation(), "e2e3");
        assert_eq!(Move::new(Coord::new(26, 26), Coord::new(25, 25)).notation(), "z26y25");
    }
}
