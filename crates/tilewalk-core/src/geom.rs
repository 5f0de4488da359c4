//! Tile-space geometry: [`Point`] and [`Range`].
//!
//! A [`Point`] addresses one tile. `x` is the column and grows right, `y` is
//! the row and grows down, so `Point::new(col, row)`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// An integer tile coordinate (`x` = column, `y` = row).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a point from `(row, column)` order.
    #[inline]
    pub const fn from_row_col(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Component-wise sign, each axis in `-1..=1`.
    #[inline]
    pub const fn signum(self) -> Self {
        Self {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }

    /// Component-wise absolute value.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Whether `self` and `other` differ by exactly one step on both axes.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        let d = (other - self).abs();
        d.x == 1 && d.y == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max) of tiles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a range from two corners, canonicalized so `min` ≤ `max`.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Size as a point (columns, rows).
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has no tiles.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major iterator over every point.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the points of a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let in_row = (self.range.max.x - self.cur.x) as usize;
        let rows_below = (self.range.max.y - self.cur.y - 1) as usize;
        let n = in_row + rows_below * self.range.width() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_arithmetic() {
        let tile = Point::from_row_col(4, 2);
        let step = Point::new(1, -1);
        assert_eq!(tile + step, Point::from_row_col(3, 3));
        assert_eq!(tile - step, Point::from_row_col(5, 1));
        assert_eq!(tile.shift(-2, 0), Point::from_row_col(4, 0));
    }

    #[test]
    fn row_col_order() {
        let p = Point::from_row_col(3, 7);
        assert_eq!(p, Point::new(7, 3));
    }

    #[test]
    fn signum_clamps_each_axis() {
        assert_eq!(Point::new(-5, 9).signum(), Point::new(-1, 1));
        assert_eq!(Point::new(0, -2).signum(), Point::new(0, -1));
        assert_eq!(Point::ZERO.signum(), Point::ZERO);
    }

    #[test]
    fn diagonal_neighbors() {
        let p = Point::new(2, 2);
        assert!(p.is_diagonal_to(Point::new(3, 1)));
        assert!(!p.is_diagonal_to(Point::new(3, 2)));
        assert!(!p.is_diagonal_to(Point::new(4, 4)));
    }

    #[test]
    fn map_bounds_are_half_open() {
        let bounds = Range::with_size(10, 4);
        assert_eq!(bounds.size(), Point::new(10, 4));
        assert_eq!(bounds.len(), 40);
        assert!(bounds.contains(Point::ZERO));
        assert!(bounds.contains(Point::from_row_col(3, 9)));
        assert!(!bounds.contains(Point::from_row_col(4, 9)));
        assert!(!bounds.contains(Point::from_row_col(3, 10)));
        assert!(!bounds.contains(Point::new(0, -1)));
        assert_eq!(bounds.to_string(), "[(0, 0)-(10, 4))");
    }

    #[test]
    fn swapped_corners() {
        let r = Range::new(5, 8, -1, 2);
        assert_eq!(r, Range { min: Point::new(-1, 2), max: Point::new(5, 8) });
        assert_eq!(r.width(), 6);
        assert!(Range::new(2, 2, 2, 9).is_empty());
    }

    #[test]
    fn range_iter_is_row_major() {
        let pts: Vec<Point> = Range::with_size(2, 2).iter().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
        assert_eq!(Range::with_size(4, 3).iter().len(), 12);
        assert_eq!(Range::with_size(0, 3).iter().count(), 0);
    }
}
