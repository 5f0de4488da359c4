//! Screen side of tilewalk: where tiles are drawn and which tile the pointer
//! is over.
//!
//! - [`Projection`] maps tiles to screen pixels and back, orthogonally or
//!   isometrically.
//! - [`Camera`] holds the screen offset that keeps the followed entity
//!   centered.
//! - [`Picker`] turns [`PointerEvent`]s into [`Pick`]s through the camera.

mod camera;
mod picker;
mod projection;

pub use camera::Camera;
pub use picker::{Pick, Picker, PointerEvent, pick};
pub use projection::{ParseProjectionError, Projection};
