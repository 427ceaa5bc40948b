use crate::chess::board::Board;
use crate::chess::piece::Side;

use super::attacks::can_reach;
use super::movegen::has_legal_move;

/// How a position stands for the side about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Checkmate { loser: Side },
    /// A king was taken. Only reachable from a loaded position where the side
    /// not to move already stood in check.
    KingCaptured { loser: Side },
    Stalemate { side: Side },
}

impl GameOutcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameOutcome::Ongoing
    }
}

/// True iff some enemy piece can reach `side`'s king.
///
/// Only geometry counts: an attacker that is itself pinned still gives check. A board with no
/// king for `side` is never in check.
pub fn is_check(board: &Board, side: Side) -> bool {
    let Some(king) = board.king(side) else {
        return false;
    };
    let target = king.at();
    board
        .pieces_of(side.other())
        .any(|p| can_reach(board, p, target))
}

/// True if `side` is in check and has no legal move.
pub fn is_checkmate(board: &Board, side: Side) -> bool {
    is_check(board, side) && !has_legal_move(board, side)
}

/// True if `side` is not in check but has no legal move.
pub fn is_stalemate(board: &Board, side: Side) -> bool {
    !is_check(board, side) && !has_legal_move(board, side)
}

/// Classify `board` with `to_move` about to play.
///
/// A side without a king has lost. Otherwise checkmate of either side ends the game (Black is
/// looked at first); stalemate only counts for the side whose turn it is.
pub fn classify(board: &Board, to_move: Side) -> GameOutcome {
    for side in [Side::Black, Side::White] {
        if board.king(side).is_none() {
            return GameOutcome::KingCaptured { loser: side };
        }
    }
    for side in [Side::Black, Side::White] {
        if is_checkmate(board, side) {
            return GameOutcome::Checkmate { loser: side };
        }
    }
    if is_stalemate(board, to_move) {
        return GameOutcome::Stalemate { side: to_move };
    }
    GameOutcome::Ongoing
}
