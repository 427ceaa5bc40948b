//! Pieces, boards, and the plain-text board configuration format.

pub mod board;
pub mod config;
pub mod piece;
