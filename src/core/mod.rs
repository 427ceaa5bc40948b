//! Squares and the text notation for them.
//!
//! - [`coord`]: 1-based board coordinates and the step sets pieces move by.
//! - [`location`]: the `a1`..`z26` text notation and move strings.

pub mod coord;
pub mod location;
