//! One running level: map, player, camera and pointer.
//!
//! Per frame the host feeds [`Input`]s to [`Session::handle`]:
//!
//! 1. `Tick` advances the player along its route, then re-centers the
//!    camera on the new position.
//! 2. `Pointer` resolves the pointer through the camera; a click plans a
//!    route to the picked tile and starts walking it.
//! 3. `Resize` changes the viewport and re-centers.
//!
//! Drawing is left to the host, using [`Session::camera`] for tile and
//! entity screen positions.

use std::time::Duration;

use glam::DVec2;
use tilewalk_core::{Point, TileMap};
use tilewalk_motion::Walker;
use tilewalk_view::{Camera, Pick, Picker, PointerEvent};

use crate::config::Config;
use crate::save::{SaveError, SaveState};

/// Input for [`Session::handle`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Input {
    Tick(Duration),
    Pointer(PointerEvent),
    Resize(DVec2),
}

/// What [`Session::handle`] did, when there is something to report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The player reached this tile.
    Arrived(Point),
    /// The pointer is over this tile (possibly outside the map).
    Hovered(Point),
    /// A click started a walk towards this tile.
    Walking { to: Point },
    /// A click on a tile that cannot be walked to.
    NoRoute(Point),
}

pub struct Session {
    level: u32,
    map: TileMap,
    player: Walker,
    camera: Camera,
    picker: Picker,
}

impl Session {
    /// Start `level` with the player idle on the map's spawn tile.
    pub fn new(config: &Config, map: TileMap, level: u32) -> Self {
        let metrics = config.metrics();
        let player = Walker::new(map.spawn(), metrics, config.player_speed);
        let mut camera = Camera::new(config.viewport(), config.projection, metrics);
        camera.update(player.position());
        log::info!(
            "level {level}: {}x{} map, player at {}, {} view",
            map.width(),
            map.height(),
            map.spawn(),
            config.projection
        );
        Self {
            level,
            map,
            player,
            camera,
            picker: Picker::new(),
        }
    }

    /// Resume from a save: the saved layout, the player idle on the saved
    /// tile with the saved facing.
    pub fn restore(save: &SaveState, config: &Config) -> Result<Self, SaveError> {
        let map = save.map()?;
        let mut session = Self::new(config, map, save.level);
        session.player.set_direction(save.direction);
        Ok(session)
    }

    pub fn snapshot(&self) -> SaveState {
        SaveState {
            level: self.level,
            ascii_map: self.map.to_flat(),
            width: self.map.width(),
            height: self.map.height(),
            tile: self.player.tile(),
            position: self.player.position(),
            direction: self.player.direction(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn player(&self) -> &Walker {
        &self.player
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Hovered tile, if it is on the map.
    pub fn hovered(&self) -> Option<Point> {
        self.picker.hovered_in(&self.map)
    }

    pub fn handle(&mut self, input: Input) -> Option<Event> {
        match input {
            Input::Tick(dt) => {
                let arrived = self.player.update(dt.as_secs_f64());
                self.camera.update(self.player.position());
                arrived.map(Event::Arrived)
            }
            Input::Pointer(event) => match self.picker.handle(event, &self.camera) {
                Pick::Hover(tile) => Some(Event::Hovered(tile)),
                Pick::Click(tile) => Some(self.walk_to(tile)),
            },
            Input::Resize(viewport) => {
                self.camera.resize(viewport);
                self.camera.update(self.player.position());
                None
            }
        }
    }

    /// Plan and start a walk to `dest`, as a click on it would.
    pub fn walk_to(&mut self, dest: Point) -> Event {
        if self.player.go_to(&self.map, dest) {
            Event::Walking { to: dest }
        } else {
            log::debug!("no route from {} to {dest}", self.player.planning_origin());
            Event::NoRoute(dest)
        }
    }
}
