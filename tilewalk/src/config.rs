//! Runtime settings, read from a TOML file.
//!
//! Every key is optional:
//!
//! ```toml
//! tile_width = 64
//! tile_height = 64
//! player_speed = 256      # pixels per second
//! projection = "isometric" # or "orthogonal" / "2d" / "3d"
//! viewport_width = 800
//! viewport_height = 600
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use glam::DVec2;
use serde::Deserialize;
use tilewalk_core::TileMetrics;
use tilewalk_view::Projection;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_tile_size")]
    pub tile_width: f64,
    #[serde(default = "default_tile_size")]
    pub tile_height: f64,
    #[serde(default = "default_player_speed")]
    pub player_speed: f64,
    #[serde(default)]
    pub projection: Projection,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
}

fn default_tile_size() -> f64 { 64.0 }
fn default_player_speed() -> f64 { 256.0 }
fn default_viewport_width() -> f64 { 800.0 }
fn default_viewport_height() -> f64 { 600.0 }

impl Default for Config {
    fn default() -> Self {
        Self {
            tile_width: default_tile_size(),
            tile_height: default_tile_size(),
            player_speed: default_player_speed(),
            projection: Projection::default(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}

impl Config {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file means defaults.
    /// A file that exists and is broken is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no {} found, using default configuration", path.as_ref().display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sizes and speed must be finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("player_speed", self.player_speed),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid { field: name, value });
            }
        }
        Ok(())
    }

    pub fn metrics(&self) -> TileMetrics {
        TileMetrics::new(self.tile_width, self.tile_height)
    }

    pub fn viewport(&self) -> DVec2 {
        DVec2::new(self.viewport_width, self.viewport_height)
    }
}

/// Errors from [`Config::load`] and [`Config::from_toml_str`].
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Invalid { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config: {e}"),
            Self::Parse(e) => write!(f, "config: {e}"),
            Self::Invalid { field, value } => {
                write!(f, "config: {field} must be a positive number, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let c = Config::from_toml_str("").unwrap();
        assert_eq!(c, Config::default());
        assert_eq!(c.metrics(), TileMetrics::new(64.0, 64.0));
        assert_eq!(c.viewport(), DVec2::new(800.0, 600.0));
        assert_eq!(c.projection, Projection::Orthogonal);
    }

    #[test]
    fn partial_file() {
        let c = Config::from_toml_str(
            r#"
            tile_height = 32
            player_speed = 100.5
            projection = "3d"
            "#,
        )
        .unwrap();
        assert_eq!(c.tile_width, 64.0);
        assert_eq!(c.tile_height, 32.0);
        assert_eq!(c.player_speed, 100.5);
        assert_eq!(c.projection, Projection::Isometric);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_toml_str("player_speed = 0"),
            Err(ConfigError::Invalid { field: "player_speed", .. })
        ));
        assert!(matches!(
            Config::from_toml_str("tile_width = -8"),
            Err(ConfigError::Invalid { field: "tile_width", .. })
        ));
        assert!(matches!(
            Config::from_toml_str("projection = \"hex\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("tile_size = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back() {
        let path = std::env::temp_dir().join("tilewalk-no-such-config.toml");
        assert!(matches!(Config::load(&path), Err(ConfigError::Io(_))));
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }
}
