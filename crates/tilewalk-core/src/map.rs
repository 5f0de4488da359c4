//! The walkable world grid: [`TileMap`] and the [`Walkable`] seam.
//!
//! A map is built once per level (from an ASCII layout, a saved flat string,
//! or the built-in fallback level) and never edited tile-by-tile afterwards.

use std::fmt;
use std::ops::Index;

use crate::geom::{Point, Range};
use crate::tile::TileKind;

/// Anything that can answer "may an entity stand here?" for a rectangular
/// area. Pathfinding only ever sees a map through this trait.
pub trait Walkable {
    /// The rectangle of valid tiles.
    fn bounds(&self) -> Range;

    /// Whether `p` is inside [`bounds`](Self::bounds) and walkable.
    fn is_walkable(&self, p: Point) -> bool;
}

/// A rectangular, fully populated grid of [`TileKind`]s plus a spawn tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: Vec<TileKind>,
    bounds: Range,
    spawn: Point,
}

/// Rows of the built-in level used when no layout is supplied.
const FALLBACK_LEVEL: [&str; 10] = [
    "##########",
    "#@.#.....#",
    "#..#.....#",
    "#..*.....#",
    "#..#.....#",
    "##.#.#####",
    "0#.#...#00",
    "0#.#...#00",
    "0#####.#00",
    "00000###00",
];

impl TileMap {
    /// A `width × height` map where every tile is `kind`, spawning at (0, 0).
    pub fn filled(width: i32, height: i32, kind: TileKind) -> Self {
        let bounds = Range::with_size(width.max(0), height.max(0));
        Self {
            tiles: vec![kind; bounds.len()],
            bounds,
            spawn: Point::ZERO,
        }
    }

    /// Parse a multi-line ASCII layout, one map row per line.
    ///
    /// Leading and trailing blank lines are ignored; every remaining line
    /// must have the same number of characters. The spawn is the last `@`
    /// in row-major order (it is stored as floor); without one the spawn is
    /// (0, 0).
    pub fn from_ascii(s: &str) -> Result<Self, MapError> {
        let body = s.trim_matches(|c| c == '\n' || c == '\r');
        if body.is_empty() {
            return Err(MapError::Empty);
        }
        let lines: Vec<&str> = body.lines().map(|l| l.trim_end_matches('\r')).collect();
        let width = lines[0].chars().count();
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            tiles.extend(line.chars().map(TileKind::from_char));
        }

        let bounds = Range::with_size(width as i32, lines.len() as i32);
        let mut map = Self {
            tiles,
            bounds,
            spawn: Point::ZERO,
        };
        map.take_spawn_marker();
        log::info!("loaded {}x{} map, spawn at {}", bounds.width(), bounds.height(), map.spawn);
        Ok(map)
    }

    /// Rebuild a map from its flat row-major ASCII form (see
    /// [`to_flat`](Self::to_flat)) with an explicit spawn tile.
    pub fn from_flat(s: &str, width: i32, height: i32, spawn: Point) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::Empty);
        }
        let bounds = Range::with_size(width, height);
        let found = s.chars().count();
        if found != bounds.len() {
            return Err(MapError::SizeMismatch {
                expected: bounds.len(),
                found,
            });
        }
        if !bounds.contains(spawn) {
            return Err(MapError::SpawnOutOfBounds(spawn));
        }
        let mut map = Self {
            tiles: s.chars().map(TileKind::from_char).collect(),
            bounds,
            spawn,
        };
        // A saved string may still carry the marker; it is floor either way.
        for t in map.tiles.iter_mut().filter(|t| **t == TileKind::Player) {
            *t = TileKind::Floor;
        }
        Ok(map)
    }

    /// The built-in 10×10 level.
    pub fn fallback() -> Self {
        // The layout is a compile-time constant and always well-formed.
        let mut map = Self::filled(10, 10, TileKind::Impassable);
        for (y, row) in FALLBACK_LEVEL.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let i = map.index_of(Point::new(x as i32, y as i32));
                map.tiles[i] = TileKind::from_char(c);
            }
        }
        map.take_spawn_marker();
        map
    }

    /// Flat row-major ASCII form, one symbol per tile, no separators.
    pub fn to_flat(&self) -> String {
        self.tiles.iter().map(|t| t.symbol()).collect()
    }

    /// Multi-line ASCII form accepted by [`from_ascii`](Self::from_ascii).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.tiles.len() + self.bounds.height() as usize);
        for row in self.tiles.chunks(self.bounds.width().max(1) as usize) {
            out.extend(row.iter().map(|t| t.symbol()));
            out.push('\n');
        }
        out
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is a tile of this map.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Spawn tile of the level.
    pub fn spawn(&self) -> Point {
        self.spawn
    }

    /// Tile at `p`, or `None` outside the map.
    pub fn get(&self, p: Point) -> Option<TileKind> {
        self.bounds.contains(p).then(|| self.tiles[self.index_of(p)])
    }

    /// Tile at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the map. Use [`get`](Self::get) when the
    /// coordinate is not known to be valid.
    pub fn tile(&self, p: Point) -> TileKind {
        match self.get(p) {
            Some(t) => t,
            None => panic!("tile {p} outside map bounds {}", self.bounds),
        }
    }

    /// Iterate over every `(point, kind)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, TileKind)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }

    fn index_of(&self, p: Point) -> usize {
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        y * self.bounds.width() as usize + x
    }

    fn take_spawn_marker(&mut self) {
        let width = self.bounds.width().max(1) as usize;
        for (i, t) in self.tiles.iter_mut().enumerate() {
            if *t == TileKind::Player {
                self.spawn = Point::new((i % width) as i32, (i / width) as i32);
                *t = TileKind::Floor;
            }
        }
    }
}

impl Index<Point> for TileMap {
    type Output = TileKind;

    fn index(&self, p: Point) -> &TileKind {
        assert!(
            self.bounds.contains(p),
            "tile {p} outside map bounds {}",
            self.bounds
        );
        &self.tiles[self.index_of(p)]
    }
}

impl Walkable for TileMap {
    fn bounds(&self) -> Range {
        self.bounds
    }

    fn is_walkable(&self, p: Point) -> bool {
        self.get(p).is_some_and(TileKind::is_walkable)
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

/// Errors that can occur when building a [`TileMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No rows, or rows without tiles.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat layout does not hold `width * height` symbols.
    SizeMismatch { expected: usize, found: usize },
    /// The declared spawn is not a tile of the map.
    SpawnOutOfBounds(Point),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: layout has no tiles"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: row {row} has {found} tiles, expected {expected}"
            ),
            Self::SizeMismatch { expected, found } => {
                write!(f, "map: flat layout has {found} tiles, expected {expected}")
            }
            Self::SpawnOutOfBounds(p) => write!(f, "map: spawn {p} is outside the map"),
        }
    }
}

impl std::error::Error for MapError {}
