//! Follow camera.

use glam::DVec2;
use tilewalk_core::{Point, TileMetrics};

use crate::projection::Projection;

/// Keeps one entity at the middle of the viewport.
///
/// The camera is nothing more than a screen offset: every draw call and
/// every pointer pick goes through [`Projection`] with
/// [`offset`](Camera::offset), so the two always agree.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    viewport: DVec2,
    center: DVec2,
    offset: DVec2,
    projection: Projection,
    metrics: TileMetrics,
}

impl Camera {
    pub fn new(viewport: DVec2, projection: Projection, metrics: TileMetrics) -> Self {
        Self {
            viewport,
            center: viewport / 2.0,
            offset: DVec2::ZERO,
            projection,
            metrics,
        }
    }

    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn viewport(&self) -> DVec2 {
        self.viewport
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn metrics(&self) -> TileMetrics {
        self.metrics
    }

    /// New viewport size; recenters on the next update.
    pub fn resize(&mut self, viewport: DVec2) {
        log::debug!("viewport resized to {}x{}", viewport.x, viewport.y);
        self.viewport = viewport;
        self.center = viewport / 2.0;
    }

    /// Recompute the offset so that the entity at pixel position
    /// `entity` is drawn at the viewport center: its tile's center in the
    /// orthogonal view, its diamond's top vertex in the isometric one.
    pub fn update(&mut self, entity: DVec2) {
        let (w, h) = (self.metrics.width, self.metrics.height);
        self.offset = match self.projection {
            Projection::Orthogonal => self.center - (entity + DVec2::new(w / 2.0, h / 2.0)),
            Projection::Isometric => {
                let t = self.metrics.fractional(entity);
                self.center - DVec2::new((t.x - t.y) * w / 2.0, (t.x + t.y) * h / 4.0)
            }
        };
    }

    /// Screen anchor of a tile under the current offset.
    pub fn to_screen(&self, tile: Point) -> DVec2 {
        self.projection.to_screen(tile, self.metrics, self.offset)
    }

    /// Screen position of an entity at pixel position `entity`.
    pub fn entity_to_screen(&self, entity: DVec2) -> DVec2 {
        self.projection
            .project_fractional(self.metrics.fractional(entity), self.metrics, self.offset)
    }

    /// Tile under a screen position.
    pub fn to_tile(&self, screen: DVec2) -> Point {
        self.projection.to_tile(screen, self.metrics, self.offset)
    }
}
