//! Move choice for the automated side.

pub mod mover;
