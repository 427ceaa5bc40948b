use std::fmt;

use crate::core::coord::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King,
    Bishop,
}

impl PieceKind {
    /// Every kind, in the order pieces are written to a configuration file.
    pub const ALL: [PieceKind; 2] = [PieceKind::King, PieceKind::Bishop];

    /// Letter used in the plain configuration format.
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Bishop => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'K' => Some(PieceKind::King),
            'B' => Some(PieceKind::Bishop),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

/// A piece on a board.
///
/// Pieces carry no stable handle: on any given board a piece is identified by
/// its square and side, so a `Piece` read from one board says nothing about a
/// clone of that board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub x: i32,
    pub y: i32,
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side, x: i32, y: i32) -> Self {
        Self { x, y, side, kind }
    }

    pub const fn king(side: Side, x: i32, y: i32) -> Self {
        Self::new(PieceKind::King, side, x, y)
    }

    pub const fn bishop(side: Side, x: i32, y: i32) -> Self {
        Self::new(PieceKind::Bishop, side, x, y)
    }

    #[inline]
    pub fn at(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// Console glyph for this piece.
    pub fn symbol(&self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::King) => '♔',
            (Side::White, PieceKind::Bishop) => '♗',
            (Side::Black, PieceKind::King) => '♚',
            (Side::Black, PieceKind::Bishop) => '♝',
        }
    }
}
