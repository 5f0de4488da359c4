//! Route following at constant speed.
//!
//! A [`Walker`] owns an entity's continuous pixel position and the
//! waypoints still ahead of it. Each [`update`](Walker::update) moves the
//! position straight towards the active waypoint's anchor; a waypoint that
//! would be reached or passed this tick is snapped to exactly, and only then
//! does the next waypoint become active. The discrete tile therefore only
//! changes on arrival, and the position never leaves the segment between
//! two consecutive waypoints.
//!
//! Facing is updated on arrival from the step just completed, so it trails
//! the motion by one tile.

use std::collections::VecDeque;

use glam::DVec2;
use tilewalk_core::{Point, Range, TileMetrics, Walkable};
use tilewalk_paths::{MovementMode, PathRange};

use crate::direction::Direction;

/// Motion state of one tile-bound entity.
pub struct Walker {
    tile: Point,
    position: DVec2,
    /// Active waypoint; `Some` exactly while moving.
    target: Option<Point>,
    waypoints: VecDeque<Point>,
    direction: Direction,
    speed: f64,
    metrics: TileMetrics,
    paths: PathRange,
}

impl Walker {
    /// An idle walker standing on `tile`, facing south.
    ///
    /// `speed` is in pixels per second and must be positive.
    pub fn new(tile: Point, metrics: TileMetrics, speed: f64) -> Self {
        debug_assert!(speed > 0.0, "walker speed must be positive");
        Self {
            tile,
            position: metrics.anchor(tile),
            target: None,
            waypoints: VecDeque::new(),
            direction: Direction::S,
            speed,
            metrics,
            paths: PathRange::new(Range::default()),
        }
    }

    /// Tile the walker last stood on exactly.
    pub fn tile(&self) -> Point {
        self.tile
    }

    /// Continuous pixel position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Current facing.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether a waypoint is active.
    pub fn is_moving(&self) -> bool {
        self.target.is_some()
    }

    /// The waypoint being approached, if moving.
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// Waypoints after the active one.
    pub fn remaining(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.waypoints.iter().copied()
    }

    /// Final tile of the current route, if moving.
    pub fn destination(&self) -> Option<Point> {
        self.waypoints.back().copied().or(self.target)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn metrics(&self) -> TileMetrics {
        self.metrics
    }

    /// Restore facing, e.g. from a save.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != Direction::None {
            self.direction = direction;
        }
    }

    /// Put the walker on `tile`, idle, discarding any route.
    pub fn place(&mut self, tile: Point) {
        self.tile = tile;
        self.position = self.metrics.anchor(tile);
        self.target = None;
        self.waypoints.clear();
    }

    /// Tile a new route has to start from: the active waypoint while
    /// moving (the segment in progress is always completed), otherwise the
    /// current tile.
    pub fn planning_origin(&self) -> Point {
        self.target.unwrap_or(self.tile)
    }

    /// Plan a route to `dest` on `map` and start following it.
    ///
    /// Returns `false`, leaving the motion state untouched, when there is no
    /// route.
    pub fn go_to<W: Walkable + ?Sized>(&mut self, map: &W, dest: Point) -> bool {
        let origin = self.planning_origin();
        if self.target.is_some() && origin == dest {
            // Already heading there: just drop what lies beyond.
            self.waypoints.clear();
            return true;
        }
        let route = self.paths.route(map, origin, dest, MovementMode::Octile);
        self.follow(route)
    }

    /// Install a route computed elsewhere, starting after
    /// [`planning_origin`](Self::planning_origin). The whole route replaces
    /// the previous one; an empty route is ignored and returns `false`.
    pub fn follow(&mut self, route: Vec<Point>) -> bool {
        if route.is_empty() {
            return false;
        }
        let mut route = VecDeque::from(route);
        if self.target.is_none() {
            // `route` is non-empty, so there is a first waypoint.
            self.target = route.pop_front();
        }
        self.waypoints = route;
        log::debug!(
            "walker at {} heading to {:?}, {} waypoints queued",
            self.tile,
            self.destination(),
            self.waypoints.len()
        );
        true
    }

    /// Advance by `dt` seconds. Returns the tile reached this tick, if any.
    /// A non-positive `dt` is a no-op.
    pub fn update(&mut self, dt: f64) -> Option<Point> {
        if dt.is_nan() || dt <= 0.0 {
            return None;
        }
        let target = self.target?;

        let goal = self.metrics.anchor(target);
        let to_goal = goal - self.position;
        let dist = to_goal.length();
        let step = self.speed * dt;

        if dist < step {
            self.position = goal;
            let arrived = self.metrics.nearest_tile(self.position);
            let facing = Direction::from_delta(arrived - self.tile);
            if facing != Direction::None {
                self.direction = facing;
            }
            self.tile = arrived;
            log::trace!("walker reached {arrived} facing {}", self.direction);
            self.target = self.waypoints.pop_front();
            Some(arrived)
        } else {
            self.position += to_goal / dist * step;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilewalk_core::{TileKind, TileMap};

    const EPS: f64 = 1e-9;

    fn open_map() -> TileMap {
        TileMap::filled(8, 8, TileKind::Floor)
    }

    fn walker_at(tile: Point) -> Walker {
        Walker::new(tile, TileMetrics::new(64.0, 64.0), 128.0)
    }

    /// Tick until idle; returns the tick count. Panics if it never stops.
    fn run_to_rest(w: &mut Walker, dt: f64) -> usize {
        for tick in 1..=100_000 {
            w.update(dt);
            if !w.is_moving() {
                return tick;
            }
        }
        panic!("walker never stopped");
    }

    #[test]
    fn starts_idle_on_anchor() {
        let w = walker_at(Point::new(2, 3));
        assert!(!w.is_moving());
        assert_eq!(w.position(), DVec2::new(128.0, 192.0));
        assert_eq!(w.direction(), Direction::S);
    }

    #[test]
    fn idle_update_is_a_no_op() {
        let mut w = walker_at(Point::new(1, 1));
        assert_eq!(w.update(1.0), None);
        assert_eq!(w.position(), DVec2::new(64.0, 64.0));
    }

    #[test]
    fn unreachable_destination_leaves_state_alone() {
        let map = TileMap::from_ascii("..#\n.##\n##.").unwrap();
        let mut w = walker_at(Point::new(0, 0));
        assert!(!w.go_to(&map, Point::new(2, 2)));
        assert!(!w.go_to(&map, Point::new(0, 0)));
        assert!(!w.is_moving());
        assert_eq!(w.tile(), Point::new(0, 0));
    }

    #[test]
    fn moves_at_constant_speed() {
        let mut w = walker_at(Point::new(0, 0));
        assert!(w.go_to(&open_map(), Point::new(3, 0)));
        assert_eq!(w.target(), Some(Point::new(1, 0)));
        assert_eq!(w.remaining().collect::<Vec<_>>(), vec![Point::new(2, 0), Point::new(3, 0)]);

        assert_eq!(w.update(0.25), None);
        assert!((w.position() - DVec2::new(32.0, 0.0)).length() < EPS);
        assert_eq!(w.tile(), Point::new(0, 0));
    }

    #[test]
    fn snaps_on_arrival_instead_of_overshooting() {
        let mut w = walker_at(Point::new(0, 0));
        w.go_to(&open_map(), Point::new(2, 0));
        // 0.75 s at 128 px/s would carry it 96 px, past the first anchor.
        assert_eq!(w.update(0.75), Some(Point::new(1, 0)));
        assert_eq!(w.position(), DVec2::new(64.0, 0.0));
        assert_eq!(w.target(), Some(Point::new(2, 0)));
    }

    #[test]
    fn stays_on_segment_every_tick() {
        let mut w = walker_at(Point::new(0, 0));
        w.go_to(&open_map(), Point::new(5, 3));
        let mut from = w.metrics().anchor(w.tile());
        while let Some(t) = w.target() {
            let to = w.metrics().anchor(t);
            let arrived = w.update(0.1);
            let p = w.position();
            let seg = to - from;
            let along = (p - from).dot(seg) / seg.length_squared();
            let off = (p - (from + seg * along)).length();
            assert!(off < 1e-6, "left the segment by {off}");
            assert!((-EPS..=1.0 + EPS).contains(&along));
            if arrived.is_some() {
                assert_eq!(p, to);
                from = to;
            }
        }
    }

    #[test]
    fn terminates_exactly_on_last_waypoint() {
        for dt in [0.001, 0.016, 0.1, 0.5, 3.0] {
            let mut w = walker_at(Point::new(0, 0));
            let dest = Point::new(7, 4);
            assert!(w.go_to(&open_map(), dest));
            let ticks = run_to_rest(&mut w, dt);
            assert!(ticks > 0);
            assert_eq!(w.tile(), dest);
            assert_eq!(w.position(), w.metrics().anchor(dest));
            assert_eq!(w.remaining().len(), 0);
        }
    }

    #[test]
    fn facing_follows_the_step_just_taken() {
        let mut w = walker_at(Point::new(0, 0));
        w.go_to(&open_map(), Point::new(2, 0));
        // Unchanged until the first tile is reached.
        assert_eq!(w.direction(), Direction::S);
        w.update(0.1);
        assert_eq!(w.direction(), Direction::S);
        run_to_rest(&mut w, 0.1);
        assert_eq!(w.direction(), Direction::E);

        w.go_to(&open_map(), Point::new(0, 2));
        assert_eq!(w.direction(), Direction::E);
        run_to_rest(&mut w, 0.1);
        assert_eq!(w.direction(), Direction::SW);

        w.go_to(&open_map(), Point::new(0, 0));
        run_to_rest(&mut w, 0.1);
        assert_eq!(w.direction(), Direction::N);
    }

    #[test]
    fn facing_turns_on_arrival_at_a_corner() {
        let map = TileMap::from_ascii("...\n##.\n##.").unwrap();
        let mut w = walker_at(Point::new(0, 0));
        assert!(w.go_to(&map, Point::new(2, 2)));
        let mut log = Vec::new();
        while w.is_moving() {
            if let Some(tile) = w.update(0.05) {
                log.push((tile, w.direction()));
            }
        }
        assert_eq!(
            log,
            vec![
                (Point::new(1, 0), Direction::E),
                (Point::new(2, 0), Direction::E),
                (Point::new(2, 1), Direction::S),
                (Point::new(2, 2), Direction::S),
            ]
        );
    }

    #[test]
    fn non_positive_dt_does_not_move() {
        let mut w = walker_at(Point::new(1, 1));
        assert!(w.follow(vec![Point::new(1, 1), Point::new(2, 1)]));
        assert_eq!(w.update(0.0), None);
        assert_eq!(w.position(), DVec2::new(64.0, 64.0));

        let mut w = walker_at(Point::new(1, 1));
        assert!(w.follow(vec![Point::new(2, 1)]));
        assert_eq!(w.update(-0.25), None);
        assert_eq!(w.position(), DVec2::new(64.0, 64.0));
        assert_eq!(w.target(), Some(Point::new(2, 1)));
        w.update(0.25);
        assert_eq!(w.position(), DVec2::new(96.0, 64.0));
    }

    #[test]
    fn retarget_mid_segment_finishes_the_segment_first() {
        let map = open_map();
        let mut w = walker_at(Point::new(0, 0));
        w.go_to(&map, Point::new(4, 0));
        w.update(0.25);
        assert!(w.go_to(&map, Point::new(1, 3)));
        // Still heading to (1, 0); the new route continues from there.
        assert_eq!(w.target(), Some(Point::new(1, 0)));
        assert_eq!(w.destination(), Some(Point::new(1, 3)));
        run_to_rest(&mut w, 0.05);
        assert_eq!(w.tile(), Point::new(1, 3));
    }

    #[test]
    fn retarget_to_active_waypoint_stops_there() {
        let map = open_map();
        let mut w = walker_at(Point::new(0, 0));
        w.go_to(&map, Point::new(5, 0));
        w.update(0.1);
        assert!(w.go_to(&map, Point::new(1, 0)));
        assert_eq!(w.remaining().len(), 0);
        run_to_rest(&mut w, 0.1);
        assert_eq!(w.tile(), Point::new(1, 0));
    }

    #[test]
    fn place_cancels_motion() {
        let mut w = walker_at(Point::new(0, 0));
        w.go_to(&open_map(), Point::new(3, 3));
        w.update(0.2);
        w.place(Point::new(6, 1));
        assert!(!w.is_moving());
        assert_eq!(w.tile(), Point::new(6, 1));
        assert_eq!(w.position(), DVec2::new(384.0, 64.0));
    }

    #[test]
    fn follow_ignores_empty_routes() {
        let mut w = walker_at(Point::new(0, 0));
        assert!(!w.follow(Vec::new()));
        assert!(w.follow(vec![Point::new(0, 1), Point::new(0, 2)]));
        assert_eq!(w.target(), Some(Point::new(0, 1)));
    }
}
