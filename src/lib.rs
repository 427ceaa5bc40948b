//! A rules engine for a chess variant played with Kings and Bishops only, on square boards
//! of size 1 to 26, plus an interactive game against a simple automated opponent.

pub mod core;
pub mod chess;
pub mod rules;
pub mod search;
pub mod render;
pub mod play;
