//! Tile size in pixels and the tile ↔ pixel-anchor mapping.

use glam::DVec2;

use crate::geom::Point;

/// Pixel size of one tile.
///
/// A tile's *anchor* is its pixel position `(col * width, row * height)`.
/// Moving entities snap to anchors; projections map anchors to the
/// screen.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMetrics {
    pub width: f64,
    pub height: f64,
}

impl Default for TileMetrics {
    fn default() -> Self {
        Self::new(64.0, 64.0)
    }
}

impl TileMetrics {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width and height as a vector.
    #[inline]
    pub fn size(self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Pixel anchor of `tile`.
    #[inline]
    pub fn anchor(self, tile: Point) -> DVec2 {
        DVec2::new(tile.x as f64 * self.width, tile.y as f64 * self.height)
    }

    /// Continuous tile coordinates of a pixel position.
    #[inline]
    pub fn fractional(self, pixel: DVec2) -> DVec2 {
        pixel / self.size()
    }

    /// Tile whose anchor is nearest to `pixel`.
    #[inline]
    pub fn nearest_tile(self, pixel: DVec2) -> Point {
        let t = self.fractional(pixel).round();
        Point::new(t.x as i32, t.y as i32)
    }
}
