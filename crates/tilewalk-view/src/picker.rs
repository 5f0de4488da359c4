//! Pointer to tile resolution.

use glam::DVec2;
use tilewalk_core::{Point, Walkable};

use crate::camera::Camera;

/// Raw pointer input, in screen pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Moved(DVec2),
    Clicked(DVec2),
}

/// A pointer event resolved to a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pick {
    Hover(Point),
    Click(Point),
}

impl Pick {
    pub fn tile(self) -> Point {
        match self {
            Pick::Hover(p) | Pick::Click(p) => p,
        }
    }
}

/// Tile under `pointer` as seen through `camera`.
#[inline]
pub fn pick(pointer: DVec2, camera: &Camera) -> Point {
    camera.to_tile(pointer)
}

/// Tracks the hovered tile.
///
/// Picks are not clipped to any map: a pointer over empty space still
/// resolves to a tile outside the map bounds. Use
/// [`hovered_in`](Picker::hovered_in) for a tile worth highlighting.
#[derive(Clone, Debug, Default)]
pub struct Picker {
    hovered: Option<Point>,
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: PointerEvent, camera: &Camera) -> Pick {
        match event {
            PointerEvent::Moved(at) => {
                let tile = pick(at, camera);
                self.hovered = Some(tile);
                Pick::Hover(tile)
            }
            PointerEvent::Clicked(at) => {
                let tile = pick(at, camera);
                self.hovered = Some(tile);
                log::debug!("clicked tile {tile} at {at}");
                Pick::Click(tile)
            }
        }
    }

    pub fn hovered(&self) -> Option<Point> {
        self.hovered
    }

    /// The hovered tile, if it lies inside `map`.
    pub fn hovered_in<W: Walkable + ?Sized>(&self, map: &W) -> Option<Point> {
        self.hovered.filter(|&p| map.bounds().contains(p))
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }
}
