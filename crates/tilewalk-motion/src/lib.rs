//! Smooth route following for tile-bound entities.
//!
//! [`Walker`] plans a route with `tilewalk-paths`, then glides the entity's
//! pixel position from waypoint to waypoint at constant speed, keeping a
//! discrete tile and a compass [`Direction`] in sync.

mod direction;
mod walker;

pub use direction::Direction;
pub use walker::Walker;
