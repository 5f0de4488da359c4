//! Save snapshots as JSON.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tilewalk_core::{MapError, Point, TileMap};
use tilewalk_motion::Direction;

/// Everything needed to resume a session: the level layout and where the
/// player stood.
///
/// `position` is informative only. On restore the player is put back on
/// `tile`, idle; a walk in progress is not resumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub level: u32,
    /// Row-major tile symbols, `width * height` of them.
    pub ascii_map: String,
    pub width: i32,
    pub height: i32,
    pub tile: Point,
    pub position: DVec2,
    pub direction: Direction,
}

impl SaveState {
    /// Rebuild the level, spawning on the saved tile.
    pub fn map(&self) -> Result<TileMap, SaveError> {
        Ok(TileMap::from_flat(&self.ascii_map, self.width, self.height, self.tile)?)
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("saved level {} to {}", self.level, path.as_ref().display());
        Ok(())
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Errors reading, writing or applying a [`SaveState`].
#[derive(Debug)]
pub enum SaveError {
    Io(io::Error),
    Json(serde_json::Error),
    Map(MapError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "save: {e}"),
            Self::Json(e) => write!(f, "save: {e}"),
            Self::Map(e) => write!(f, "save: {e}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Map(e) => Some(e),
        }
    }
}

impl From<io::Error> for SaveError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<MapError> for SaveError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}
