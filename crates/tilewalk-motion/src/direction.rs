//! Compass facing of an entity.

use std::fmt;

use tilewalk_core::Point;

/// One of the eight compass directions, or `None`.
///
/// Screen convention: north is up, i.e. towards decreasing rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    None,
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All nine values, in [`code`](Self::code) order.
    pub const ALL: [Direction; 9] = [
        Direction::None,
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Direction of a step, from the sign of each component.
    /// A zero delta gives [`Direction::None`].
    pub fn from_delta(delta: Point) -> Self {
        let s = delta.signum();
        match (s.x, s.y) {
            (0, -1) => Direction::N,
            (1, -1) => Direction::NE,
            (1, 0) => Direction::E,
            (1, 1) => Direction::SE,
            (0, 1) => Direction::S,
            (-1, 1) => Direction::SW,
            (-1, 0) => Direction::W,
            (-1, -1) => Direction::NW,
            _ => Direction::None,
        }
    }

    /// Unit step in this direction.
    pub const fn delta(self) -> Point {
        match self {
            Direction::None => Point::new(0, 0),
            Direction::N => Point::new(0, -1),
            Direction::NE => Point::new(1, -1),
            Direction::E => Point::new(1, 0),
            Direction::SE => Point::new(1, 1),
            Direction::S => Point::new(0, 1),
            Direction::SW => Point::new(-1, 1),
            Direction::W => Point::new(-1, 0),
            Direction::NW => Point::new(-1, -1),
        }
    }

    /// Numeric code, `0` for `None` then `1..=8` clockwise from north.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Short label such as `"N"` or `"SE"`.
    pub const fn label(self) -> &'static str {
        match self {
            Direction::None => "NONE",
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
