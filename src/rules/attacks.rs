use crate::chess::board::Board;
use crate::chess::piece::{Piece, PieceKind};
use crate::core::coord::{Coord, BISHOP_DIRS, KING_STEPS};

/// True iff `piece` could geometrically move to `target` on `board`.
///
/// Whose turn it is and whether the move exposes a king are not considered. A piece never
/// reaches its own square, and never a square held by its own side.
pub fn can_reach(board: &Board, piece: &Piece, target: Coord) -> bool {
    if !board.contains(target) {
        return false;
    }
    match piece.kind {
        PieceKind::King => king_reaches(board, piece, target),
        PieceKind::Bishop => bishop_reaches(board, piece, target),
    }
}

fn king_reaches(board: &Board, piece: &Piece, target: Coord) -> bool {
    if piece.at().chebyshev_distance(target) != 1 {
        return false;
    }
    !matches!(board.piece_at(target), Some(other) if other.side == piece.side)
}

fn bishop_reaches(board: &Board, piece: &Piece, target: Coord) -> bool {
    let from = piece.at();
    let v = target - from;
    if v.x == 0 || v.x.abs() != v.y.abs() {
        return false;
    }
    let dir = Coord::new(v.x.signum(), v.y.signum());
    debug_assert!(BISHOP_DIRS.contains(&dir));

    // Every square strictly between must be empty; the target itself may hold an enemy.
    let dist = v.x.abs();
    for step in 1..dist {
        if board.is_piece_at(from + dir * step) {
            return false;
        }
    }
    !matches!(board.piece_at(target), Some(other) if other.side == piece.side)
}

/// All squares `piece` can reach, in direction order.
///
/// Bishops slide along each diagonal until the edge or the first occupied square, which is
/// included only if it holds an enemy. Kings take one step in each of the eight directions.
pub fn reachable_squares(board: &Board, piece: &Piece) -> Vec<Coord> {
    let from = piece.at();
    let mut out = Vec::new();
    match piece.kind {
        PieceKind::King => {
            for step in KING_STEPS {
                let to = from + step;
                if can_reach(board, piece, to) {
                    out.push(to);
                }
            }
        }
        PieceKind::Bishop => {
            for dir in BISHOP_DIRS {
                let mut to = from + dir;
                while board.contains(to) {
                    match board.piece_at(to) {
                        None => out.push(to),
                        Some(other) => {
                            if other.side != piece.side {
                                out.push(to);
                            }
                            break;
                        }
                    }
                    to = to + dir;
                }
            }
        }
    }
    out
}
