//! Geometry primitives: lattice [`Coord`]s and pixel [`Point`]s.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A lattice coordinate. Rows grow down, columns grow right.
///
/// A node's `Coord` is its identity and never changes once the grid is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Top-left cell (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit steps in neighbor probe order: down, up, right, left.
    ///
    /// The order only affects tie-breaking between equal-priority nodes.
    pub const PROBE_ORDER: [Coord; 4] = [
        Coord::new(1, 0),
        Coord::new(-1, 0),
        Coord::new(0, 1),
        Coord::new(0, -1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonal candidates in probe order (down, up, right, left).
    /// Candidates may lie outside any particular grid.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::PROBE_ORDER.map(|d| self + d)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A pixel position. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
    }

    #[test]
    fn neighbors_follow_probe_order() {
        let c = Coord::new(5, 5);
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(6, 5),
                Coord::new(4, 5),
                Coord::new(5, 6),
                Coord::new(5, 4),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(2, 7).to_string(), "(2, 7)");
        assert_eq!(Point::new(30, 40).to_string(), "(30, 40)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_json_shape() {
        let json = serde_json::to_string(&Coord::new(3, 4)).unwrap();
        assert_eq!(json, r#"{"row":3,"col":4}"#);
    }
}
