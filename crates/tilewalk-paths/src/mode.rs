//! Movement modes and the integer cost model.
//!
//! Costs are scaled by 10 so diagonal steps (≈10·√2) stay integral.

use tilewalk_core::Point;

use crate::distance;

/// Cost of one orthogonal step.
pub const ORTHOGONAL_COST: i32 = 10;
/// Cost of one diagonal step.
pub const DIAGONAL_COST: i32 = 14;

/// Which neighbors a search may step to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementMode {
    /// Orthogonal steps only.
    Cardinal,
    /// Orthogonal and diagonal steps.
    #[default]
    Octile,
}

const CARDINAL_OFFSETS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

const OCTILE_OFFSETS: [Point; 8] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// Step offsets examined for `mode`, orthogonal ones first.
pub fn offsets(mode: MovementMode) -> &'static [Point] {
    match mode {
        MovementMode::Cardinal => &CARDINAL_OFFSETS,
        MovementMode::Octile => &OCTILE_OFFSETS,
    }
}

/// Cost of a single step between adjacent tiles.
#[inline]
pub fn step_cost(from: Point, to: Point) -> i32 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Admissible, consistent estimate of the remaining cost under `mode`.
#[inline]
pub fn heuristic(mode: MovementMode, from: Point, to: Point) -> i32 {
    match mode {
        MovementMode::Cardinal => ORTHOGONAL_COST * distance::manhattan(from, to),
        MovementMode::Octile => distance::octile(from, to),
    }
}
