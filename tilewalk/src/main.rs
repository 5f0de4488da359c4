//! Headless runner: load a level, walk the player to a tile at 60 Hz and
//! print the route and the resulting save.
//!
//! ```text
//! tilewalk [--config FILE] [--map FILE | --load SAVE] [--save FILE] COL ROW
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tilewalk_core::{Point, TileMap};
use tilewalk_lib::{Config, Event, Input, SaveState, Session};
use tilewalk_paths::{MovementMode, find_route, render_route, route_cost};

const FRAME: Duration = Duration::from_nanos(16_666_667);
const MAX_FRAMES: usize = 60 * 60 * 10;

#[derive(Debug, Parser)]
#[command(name = "tilewalk")]
#[command(about = "Walk the player to a tile and print the route and the resulting save")]
struct Cli {
    /// TOML settings; defaults are used when the file is missing.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// Multi-line ASCII level; the built-in level when omitted.
    #[arg(long, conflicts_with = "load")]
    map: Option<PathBuf>,
    /// Resume from a JSON save instead of a level file.
    #[arg(long)]
    load: Option<PathBuf>,
    /// Write the final save here instead of printing it.
    #[arg(long)]
    save: Option<PathBuf>,
    #[arg(allow_negative_numbers = true)]
    col: i32,
    #[arg(allow_negative_numbers = true)]
    row: i32,
}

impl Cli {
    fn target(&self) -> Point {
        Point::from_row_col(self.row, self.col)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let target = cli.target();
    let config = Config::load_or_default(&cli.config)?;

    let mut session = match (&cli.load, &cli.map) {
        (Some(path), _) => Session::restore(&SaveState::read(path)?, &config)?,
        (None, Some(path)) => {
            let map = TileMap::from_ascii(&fs::read_to_string(path)?)?;
            Session::new(&config, map, 1)
        }
        (None, None) => Session::new(&config, TileMap::fallback(), 1),
    };

    let start = session.player().tile();
    let route = find_route(session.map(), start, target, MovementMode::Octile);
    if route.is_empty() {
        println!("no route from {start} to {target}");
    } else {
        println!(
            "route from {start} to {}: {} steps, cost {}",
            target,
            route.len(),
            route_cost(start, &route)
        );
        print!("{}", render_route(session.map(), &route));
    }

    if let Event::Walking { .. } = session.walk_to(target) {
        let mut frames = 0;
        while session.player().is_moving() && frames < MAX_FRAMES {
            if let Some(Event::Arrived(p)) = session.handle(Input::Tick(FRAME)) {
                log::debug!("frame {frames}: reached {p}");
            }
            frames += 1;
        }
        println!(
            "walked to {} in {frames} frames ({:.2} s)",
            session.player().tile(),
            frames as f64 * FRAME.as_secs_f64()
        );
    }

    let save = session.snapshot();
    match &cli.save {
        Some(path) => save.write(path)?,
        None => println!("{}", save.to_json()?),
    }
    Ok(())
}
