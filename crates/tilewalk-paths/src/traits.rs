use tilewalk_core::Point;

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append the tiles reachable in one step from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) steps.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` to the adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Estimated remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible), and should be
    /// consistent so that the first expansion of the goal is optimal.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
