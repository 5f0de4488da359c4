//! A* route search over tile maps.
//!
//! Costs use an integer scale: an orthogonal step costs
//! [`ORTHOGONAL_COST`] (10) and a diagonal step [`DIAGONAL_COST`] (14).
//! The [`MovementMode`] selects the neighbor set and the matching heuristic
//! (Manhattan for [`MovementMode::Cardinal`], octile for
//! [`MovementMode::Octile`]). Diagonal steps never cut a blocked corner.
//!
//! Most callers want [`find_route`] or, to reuse buffers across searches,
//! [`PathRange::route`]. Both return the route *without* the start tile; an
//! empty route means there is nowhere to go and is not an error.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic, required by [`PathRange::astar_path`] |

mod astar;
mod distance;
mod mode;
mod neighbors;
mod pathrange;
mod route;
mod traits;

pub use distance::{manhattan, octile};
pub use mode::{DIAGONAL_COST, MovementMode, ORTHOGONAL_COST, heuristic, offsets, step_cost};
pub use neighbors::walkable_neighbors;
pub use pathrange::{PathRange, UNREACHABLE};
pub use route::{MapPather, find_route, render_route, route_cost};
pub use traits::{AstarPather, Pather, WeightedPather};
