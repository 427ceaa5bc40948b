//! Move choice for the computer-controlled side.
//!
//! The heuristic tries, in order:
//! 1. a legal capture (own pieces in collection order, then enemy pieces in collection order)
//! 2. a legal move that gives check (own pieces, then squares column by column)
//! 3. for each own piece, up to `size²` uniformly random destinations
//! 4. the first move of [`legal_moves`], so a move is found whenever one exists

use rand::Rng;

use crate::chess::board::Board;
use crate::chess::piece::Side;
use crate::core::coord::Coord;
use crate::rules::checkmate::is_check;
use crate::rules::movegen::{can_move_to, legal_moves, simulate_move, Move};

/// Picks a move for `side`, or `None` if `side` has no legal move.
pub fn find_automated_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Move> {
    if let Some(mv) = find_capture(board, side) {
        tracing::debug!(mv = %mv.notation(), "automated move: capture");
        return Some(mv);
    }
    if let Some(mv) = find_checking_move(board, side) {
        tracing::debug!(mv = %mv.notation(), "automated move: check");
        return Some(mv);
    }
    if let Some(mv) = find_random_move(board, side, rng) {
        tracing::debug!(mv = %mv.notation(), "automated move: random");
        return Some(mv);
    }
    let fallback = legal_moves(board, side).into_iter().next();
    match fallback {
        Some(mv) => tracing::debug!(mv = %mv.notation(), "automated move: exhaustive fallback"),
        None => tracing::debug!(%side, "automated move: no legal move"),
    }
    fallback
}

pub fn find_capture(board: &Board, side: Side) -> Option<Move> {
    for piece in board.pieces_of(side) {
        for enemy in board.pieces_of(side.other()) {
            if can_move_to(board, piece, enemy.at()) {
                return Some(Move::new(piece.at(), enemy.at()));
            }
        }
    }
    None
}

/// First legal move after which the opponent is in check. Checkmate counts, being a check.
pub fn find_checking_move(board: &Board, side: Side) -> Option<Move> {
    for piece in board.pieces_of(side) {
        for to in board.squares() {
            if !can_move_to(board, piece, to) {
                continue;
            }
            let after = simulate_move(board, piece.at(), to);
            if is_check(&after, side.other()) {
                return Some(Move::new(piece.at(), to));
            }
        }
    }
    None
}

/// Samples up to `size²` random destinations per piece; the first legal one wins.
pub fn find_random_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Move> {
    let size = board.size();
    let attempts = (size * size) as usize;
    for piece in board.pieces_of(side) {
        for _ in 0..attempts {
            let to = Coord::new(rng.gen_range(1..=size), rng.gen_range(1..=size));
            if can_move_to(board, piece, to) {
                return Some(Move::new(piece.at(), to));
            }
        }
        tracing::trace!(from = ?piece.at(), attempts, "random sampling found nothing");
    }
    None
}
