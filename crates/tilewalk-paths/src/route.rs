//! Map-level route queries built on [`PathRange::astar_path`].

use tilewalk_core::{Point, TileMap, Walkable};

use crate::PathRange;
use crate::mode::{self, MovementMode};
use crate::neighbors::walkable_neighbors;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Adapts any [`Walkable`] grid to the A* traits for a [`MovementMode`].
pub struct MapPather<'a, W: Walkable + ?Sized> {
    pub map: &'a W,
    pub mode: MovementMode,
}

impl<'a, W: Walkable + ?Sized> MapPather<'a, W> {
    pub fn new(map: &'a W, mode: MovementMode) -> Self {
        Self { map, mode }
    }
}

impl<W: Walkable + ?Sized> Pather for MapPather<'_, W> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        walkable_neighbors(self.map, p, self.mode, buf);
    }
}

impl<W: Walkable + ?Sized> WeightedPather for MapPather<'_, W> {
    fn cost(&self, from: Point, to: Point) -> i32 {
        mode::step_cost(from, to)
    }
}

impl<W: Walkable + ?Sized> AstarPather for MapPather<'_, W> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        mode::heuristic(self.mode, from, to)
    }
}

impl PathRange {
    /// Route from `from` to `to` on `map`, excluding `from` itself.
    ///
    /// An empty route means "nowhere to go": the goal is unreachable,
    /// unwalkable or outside the map, or equal to the start. The workspace
    /// follows `map`'s bounds, so one `PathRange` can serve several levels.
    pub fn route<W: Walkable + ?Sized>(
        &mut self,
        map: &W,
        from: Point,
        to: Point,
        mode: MovementMode,
    ) -> Vec<Point> {
        if from == to {
            return Vec::new();
        }
        let bounds = map.bounds();
        if !bounds.contains(from) {
            log::debug!("route: start {from} outside map {bounds}");
            return Vec::new();
        }
        if !map.is_walkable(to) {
            log::debug!("route: goal {to} is not walkable");
            return Vec::new();
        }
        if self.range() != bounds {
            self.set_range(bounds);
        }

        let pather = MapPather::new(map, mode);
        match self.astar_path(&pather, from, to) {
            Some(mut path) => {
                path.remove(0);
                path
            }
            None => Vec::new(),
        }
    }
}

/// One-shot [`PathRange::route`] with a fresh workspace.
pub fn find_route<W: Walkable + ?Sized>(
    map: &W,
    from: Point,
    to: Point,
    mode: MovementMode,
) -> Vec<Point> {
    PathRange::new(map.bounds()).route(map, from, to, mode)
}

/// Total step cost of walking `start` followed by `route`.
pub fn route_cost(start: Point, route: &[Point]) -> i32 {
    let mut prev = start;
    let mut total = 0;
    for &p in route {
        total += mode::step_cost(prev, p);
        prev = p;
    }
    total
}

/// Draw `route` over `map`: `*` for route tiles, `.` for other walkable
/// tiles and `#` for everything else. One line per row.
pub fn render_route(map: &TileMap, route: &[Point]) -> String {
    let mut out = String::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let p = Point::new(x, y);
            let c = if route.contains(&p) {
                '*'
            } else if map.is_walkable(p) {
                '.'
            } else {
                '#'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
