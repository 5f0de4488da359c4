//! **tilewalk-core**: the tile-grid world model shared by the tilewalk
//! crates.
//!
//! This crate provides tile-space geometry ([`Point`], [`Range`]), the tile
//! classification ([`TileKind`]), the level grid ([`TileMap`]) together
//! with the [`Walkable`] trait that pathfinding consumes, and the pixel size
//! of a tile ([`TileMetrics`]).

pub mod geom;
pub mod map;
pub mod metrics;
pub mod tile;

pub use geom::{Point, Range};
pub use map::{MapError, TileMap, Walkable};
pub use metrics::TileMetrics;
pub use tile::TileKind;
