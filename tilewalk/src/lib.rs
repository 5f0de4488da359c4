//! tilewalk: walk a tile map by clicking on it.
//!
//! The library crates do the work ([`tilewalk_paths`] plans,
//! [`tilewalk_motion`] walks, [`tilewalk_view`] projects and picks); this
//! crate wires them into a [`Session`] driven by [`Input`]s, loads the
//! [`Config`] and reads and writes [`SaveState`]s.

pub mod config;
pub mod save;
pub mod session;

pub use config::{Config, ConfigError};
pub use save::{SaveError, SaveState};
pub use session::{Event, Input, Session};
