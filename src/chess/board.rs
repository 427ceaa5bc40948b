use crate::chess::config::BoardError;
use crate::chess::piece::{Piece, PieceKind, Side};
use crate::core::coord::Coord;
use crate::core::location::MAX_COLUMNS;

/// A square board of side `size` and the pieces standing on it.
///
/// Pieces are kept in a plain list; their order is the "collection order" every
/// scan in the engine follows. Piece counts are tiny, so lookups are linear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: i32,
    pieces: Vec<Piece>,
}

impl Board {
    /// Build a board, checking the invariants every playable position needs:
    /// - `size` is within `1..=26`
    /// - every piece is on the board
    /// - no two pieces share a square
    /// - each side has exactly one king
    pub fn new(size: i32, pieces: Vec<Piece>) -> Result<Self, BoardError> {
        if !(1..=MAX_COLUMNS).contains(&size) {
            return Err(BoardError::SizeOutOfRange(size));
        }

        let board = Self { size, pieces };

        for p in &board.pieces {
            if !board.contains(p.at()) {
                return Err(BoardError::OutOfBounds { at: p.at(), size });
            }
        }

        for (i, p) in board.pieces.iter().enumerate() {
            if board.pieces[..i].iter().any(|q| q.at() == p.at()) {
                return Err(BoardError::DuplicateSquare(p.at()));
            }
        }

        for side in [Side::White, Side::Black] {
            let kings = board
                .pieces_of(side)
                .filter(|p| p.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(BoardError::KingCount { side, kings });
            }
        }

        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        (1..=self.size).contains(&at.x) && (1..=self.size).contains(&at.y)
    }

    pub fn is_piece_at(&self, at: Coord) -> bool {
        self.pieces.iter().any(|p| p.at() == at)
    }

    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.at() == at)
    }

    pub fn index_at(&self, at: Coord) -> Option<usize> {
        self.pieces.iter().position(|p| p.at() == at)
    }

    /// The king of `side`. Only `None` on hand-built boards that skipped [`Board::new`].
    pub fn king(&self, side: Side) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.side == side && p.is_king())
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.side == side)
    }

    /// Every square of the board, column by column (`x` ascending, then `y` ascending).
    pub fn squares(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (1..=size).flat_map(move |x| (1..=size).map(move |y| Coord::new(x, y)))
    }

    /// Put the piece standing on `from` onto `to`, dropping whatever stood on `to`.
    ///
    /// No rule is checked. Returns `false` (and leaves the board alone) if `from` is empty.
    pub(crate) fn relocate(&mut self, from: Coord, to: Coord) -> bool {
        if from == to {
            return self.is_piece_at(from);
        }
        let Some(idx) = self.index_at(from) else {
            return false;
        };
        self.pieces[idx].x = to.x;
        self.pieces[idx].y = to.y;
        if let Some(captured) = self
            .pieces
            .iter()
            .enumerate()
            .position(|(i, p)| i != idx && p.at() == to)
        {
            self.pieces.remove(captured);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings() -> Vec<Piece> {
        vec![Piece::king(Side::White, 1, 1), Piece::king(Side::Black, 3, 3)]
    }

    #[test]
    fn occupancy_queries() {
        let mut pieces = kings();
        pieces.push(Piece::bishop(Side::White, 2, 3));
        let board = Board::new(3, pieces).unwrap();

        assert!(board.is_piece_at(Coord::new(2, 3)));
        assert!(!board.is_piece_at(Coord::new(2, 2)));
        assert_eq!(board.piece_at(Coord::new(3, 3)), Some(&Piece::king(Side::Black, 3, 3)));
        assert_eq!(board.piece_at(Coord::new(3, 1)), None);
        assert_eq!(board.king(Side::White).map(|k| k.at()), Some(Coord::new(1, 1)));
        assert_eq!(board.pieces_of(Side::White).count(), 2);
    }

    #[test]
    fn squares_are_column_major() {
        let board = Board::new(3, kings()).unwrap();
        let squares: Vec<Coord> = board.squares().collect();
        assert_eq!(squares.len(), 9);
        assert_eq!(squares[0], Coord::new(1, 1));
        assert_eq!(squares[1], Coord::new(1, 2));
        assert_eq!(squares[3], Coord::new(2, 1));
        assert_eq!(squares[8], Coord::new(3, 3));
    }

    #[test]
    fn construction_rejects_broken_positions() {
        assert_eq!(Board::new(0, kings()), Err(BoardError::SizeOutOfRange(0)));
        assert_eq!(Board::new(27, kings()), Err(BoardError::SizeOutOfRange(27)));
        assert_eq!(
            Board::new(2, kings()),
            Err(BoardError::OutOfBounds {
                at: Coord::new(3, 3),
                size: 2
            })
        );

        let mut shared = kings();
        shared.push(Piece::bishop(Side::Black, 1, 1));
        assert_eq!(
            Board::new(3, shared),
            Err(BoardError::DuplicateSquare(Coord::new(1, 1)))
        );

        let mut two_kings = kings();
        two_kings.push(Piece::king(Side::White, 2, 1));
        assert_eq!(
            Board::new(3, two_kings),
            Err(BoardError::KingCount {
                side: Side::White,
                kings: 2
            })
        );

        assert_eq!(
            Board::new(3, vec![Piece::king(Side::White, 1, 1)]),
            Err(BoardError::KingCount {
                side: Side::Black,
                kings: 0
            })
        );
    }

    #[test]
    fn relocate_captures_the_occupant() {
        let mut pieces = kings();
        pieces.push(Piece::bishop(Side::White, 1, 3));
        let mut board = Board::new(3, pieces).unwrap();

        assert!(board.relocate(Coord::new(1, 3), Coord::new(3, 1)));
        assert_eq!(board.pieces().len(), 3);
        assert!(board.relocate(Coord::new(1, 1), Coord::new(3, 3)));
        assert_eq!(board.pieces().len(), 2);
        assert!(board.king(Side::Black).is_none());
        assert!(!board.relocate(Coord::new(2, 2), Coord::new(1, 1)));
    }
}
