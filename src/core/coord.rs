use std::ops::{Add, Mul, Sub};

/// A board square in index form: `x` is the column (1 = `a`), `y` is the row.
///
/// Coordinates are 1-based to match the text notation; nothing here checks them
/// against a board size. That is [`Board::contains`](crate::chess::board::Board::contains)'s job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn chebyshev_distance(self, other: Coord) -> i32 {
        let d = other - self;
        d.x.abs().max(d.y.abs())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// The 8 king steps around a square.
pub const KING_STEPS: [Coord; 8] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: 1 },
    Coord { x: -1, y: -1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
];

/// Unit directions a bishop slides along.
pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_steps_are_the_unit_ring() {
        for step in KING_STEPS {
            assert_eq!(Coord::new(0, 0).chebyshev_distance(step), 1);
        }
        let mut sorted = KING_STEPS.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn scaling_a_direction_walks_the_diagonal() {
        let from = Coord::new(3, 3);
        assert_eq!(from + BISHOP_DIRS[0] * 2, Coord::new(5, 5));
        assert_eq!(from + BISHOP_DIRS[3] * 2, Coord::new(1, 1));
    }
}
