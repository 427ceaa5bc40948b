//! Move rules: geometric reach, legality, and game-state detection.

pub mod attacks;
pub mod checkmate;
pub mod movegen;
