//! Tile ↔ screen mapping for orthogonal and isometric views.
//!
//! Both directions take the tile size ([`TileMetrics`]) and the camera
//! offset, so the renderer and the pointer picker always agree on which
//! tile sits under a pixel.
//!
//! | | forward | inverse |
//! |---|---|---|
//! | orthogonal | `(col·W, row·H) + o` | `floor((s − o) / (W, H))` |
//! | isometric | `((col − row)·W/2, (col + row)·H/4) + o` | `a = sx'/(W/2)`, `b = sy'/(H/4)`, `col = ⌊(a+b)/2⌋`, `row = ⌊(b−a)/2⌋` |

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use tilewalk_core::{Point, TileMetrics};

/// Inverse results this close to an integer are treated as that integer,
/// so a sample exactly on a tile's anchor stays in that tile despite
/// rounding noise from the offset.
const SNAP_EPS: f64 = 1e-9;

/// How tiles are laid out on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Projection {
    /// Top-down grid of `W × H` rectangles.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "2d", alias = "2D"))]
    Orthogonal,
    /// Diamonds `W` wide and `H/2` tall.
    #[cfg_attr(feature = "serde", serde(alias = "3d", alias = "3D"))]
    Isometric,
}

impl Projection {
    /// Screen position of `tile`'s anchor: the top-left corner of the
    /// rectangle, or the top vertex of the diamond.
    #[inline]
    pub fn to_screen(self, tile: Point, metrics: TileMetrics, offset: DVec2) -> DVec2 {
        self.project_fractional(DVec2::new(tile.x as f64, tile.y as f64), metrics, offset)
    }

    /// Forward mapping for continuous tile coordinates (`x` = column).
    pub fn project_fractional(self, tile: DVec2, metrics: TileMetrics, offset: DVec2) -> DVec2 {
        let (w, h) = (metrics.width, metrics.height);
        let local = match self {
            Projection::Orthogonal => DVec2::new(tile.x * w, tile.y * h),
            Projection::Isometric => {
                DVec2::new((tile.x - tile.y) * w / 2.0, (tile.x + tile.y) * h / 4.0)
            }
        };
        local + offset
    }

    /// Inverse of [`project_fractional`](Self::project_fractional):
    /// continuous tile coordinates of a screen position.
    pub fn unproject(self, screen: DVec2, metrics: TileMetrics, offset: DVec2) -> DVec2 {
        let local = screen - offset;
        match self {
            Projection::Orthogonal => local / metrics.size(),
            Projection::Isometric => {
                let a = local.x / (metrics.width / 2.0);
                let b = local.y / (metrics.height / 4.0);
                DVec2::new((a + b) / 2.0, (b - a) / 2.0)
            }
        }
    }

    /// Tile containing the screen position.
    pub fn to_tile(self, screen: DVec2, metrics: TileMetrics, offset: DVec2) -> Point {
        let t = self.unproject(screen, metrics, offset);
        Point::new(snapped_floor(t.x), snapped_floor(t.y))
    }

    /// Screen-space corners of `tile`, clockwise from the anchor. A
    /// renderer fills or strokes this polygon to draw or highlight the tile.
    pub fn outline(self, tile: Point, metrics: TileMetrics, offset: DVec2) -> [DVec2; 4] {
        let a = self.to_screen(tile, metrics, offset);
        let (w, h) = (metrics.width, metrics.height);
        match self {
            Projection::Orthogonal => [
                a,
                a + DVec2::new(w, 0.0),
                a + DVec2::new(w, h),
                a + DVec2::new(0.0, h),
            ],
            Projection::Isometric => [
                a,
                a + DVec2::new(w / 2.0, h / 4.0),
                a + DVec2::new(0.0, h / 2.0),
                a + DVec2::new(-w / 2.0, h / 4.0),
            ],
        }
    }
}

fn snapped_floor(v: f64) -> i32 {
    let r = v.round();
    if (v - r).abs() < SNAP_EPS {
        r as i32
    } else {
        v.floor() as i32
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Orthogonal => f.write_str("orthogonal"),
            Projection::Isometric => f.write_str("isometric"),
        }
    }
}

impl FromStr for Projection {
    type Err = ParseProjectionError;

    /// Accepts `orthogonal`/`2d` and `isometric`/`3d`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orthogonal" | "2d" => Ok(Projection::Orthogonal),
            "isometric" | "3d" => Ok(Projection::Isometric),
            _ => Err(ParseProjectionError(s.to_string())),
        }
    }
}

/// An unrecognized projection name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProjectionError(pub String);

impl fmt::Display for ParseProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown projection {:?} (expected orthogonal or isometric)",
            self.0
        )
    }
}

impl std::error::Error for ParseProjectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    const M: TileMetrics = TileMetrics::new(64.0, 64.0);

    const OFFSETS: [DVec2; 5] = [
        DVec2::new(0.0, 0.0),
        DVec2::new(176.0, 140.0),
        DVec2::new(-37.5, 912.25),
        DVec2::new(0.1, -33.3),
        DVec2::new(1234.567, 0.7),
    ];

    #[test]
    fn orthogonal_forward() {
        let s = Projection::Orthogonal.to_screen(Point::from_row_col(2, 3), M, DVec2::new(10.0, 20.0));
        assert_eq!(s, DVec2::new(3.0 * 64.0 + 10.0, 2.0 * 64.0 + 20.0));
    }

    #[test]
    fn isometric_forward() {
        let s = Projection::Isometric.to_screen(Point::from_row_col(2, 3), M, DVec2::new(10.0, 20.0));
        assert_eq!(s, DVec2::new(32.0 + 10.0, 5.0 * 16.0 + 20.0));
    }

    #[test]
    fn round_trip_at_anchor() {
        for projection in [Projection::Orthogonal, Projection::Isometric] {
            for offset in OFFSETS {
                for row in -3..25 {
                    for col in -3..25 {
                        let tile = Point::from_row_col(row, col);
                        let s = projection.to_screen(tile, M, offset);
                        assert_eq!(
                            projection.to_tile(s, M, offset),
                            tile,
                            "{projection} offset {offset}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn interior_samples_stay_in_tile() {
        let offset = DVec2::new(300.0, 40.0);
        let tile = Point::new(4, 7);
        let ortho = Projection::Orthogonal.to_screen(tile, M, offset) + DVec2::new(63.0, 1.0);
        assert_eq!(Projection::Orthogonal.to_tile(ortho, M, offset), tile);
        // Diamond center sits a quarter tile below the top vertex.
        let iso = Projection::Isometric.to_screen(tile, M, offset) + DVec2::new(0.0, 16.0);
        assert_eq!(Projection::Isometric.to_tile(iso, M, offset), tile);
    }

    #[test]
    fn neighbors_across_edges() {
        let o = DVec2::ZERO;
        assert_eq!(Projection::Orthogonal.to_tile(DVec2::new(-0.5, 10.0), M, o), Point::new(-1, 0));
        assert_eq!(Projection::Orthogonal.to_tile(DVec2::new(64.0, 63.9), M, o), Point::new(1, 0));
        // Just left of the top vertex of (0, 0) is the column to the west.
        assert_eq!(Projection::Isometric.to_tile(DVec2::new(-1.0, 0.0), M, o), Point::new(-1, 0));
        // Just right of it is the row to the north.
        assert_eq!(Projection::Isometric.to_tile(DVec2::new(1.0, 0.0), M, o), Point::new(0, -1));
    }

    #[test]
    fn unproject_inverts_project() {
        let t = DVec2::new(3.25, -1.5);
        for projection in [Projection::Orthogonal, Projection::Isometric] {
            let s = projection.project_fractional(t, M, DVec2::new(7.0, 9.0));
            let back = projection.unproject(s, M, DVec2::new(7.0, 9.0));
            assert!((back - t).length() < 1e-9);
        }
    }

    #[test]
    fn outlines() {
        let o = DVec2::ZERO;
        let r = Projection::Orthogonal.outline(Point::new(1, 1), M, o);
        assert_eq!(r[0], DVec2::new(64.0, 64.0));
        assert_eq!(r[2], DVec2::new(128.0, 128.0));
        let d = Projection::Isometric.outline(Point::ZERO, M, o);
        assert_eq!(d, [
            DVec2::new(0.0, 0.0),
            DVec2::new(32.0, 16.0),
            DVec2::new(0.0, 32.0),
            DVec2::new(-32.0, 16.0),
        ]);
    }

    #[test]
    fn parse_names() {
        assert_eq!("orthogonal".parse(), Ok(Projection::Orthogonal));
        assert_eq!("2D".parse(), Ok(Projection::Orthogonal));
        assert_eq!(" Isometric ".parse(), Ok(Projection::Isometric));
        assert_eq!("3d".parse(), Ok(Projection::Isometric));
        let err = "hex".parse::<Projection>().unwrap_err();
        assert_eq!(err.to_string(), "unknown projection \"hex\" (expected orthogonal or isometric)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn projection_names() {
        let json = serde_json::to_string(&Projection::Isometric).unwrap();
        assert_eq!(json, "\"isometric\"");
        let back: Projection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Projection::Isometric);
        let two_d: Projection = serde_json::from_str("\"2D\"").unwrap();
        assert_eq!(two_d, Projection::Orthogonal);
        let three_d: Projection = serde_json::from_str("\"3d\"").unwrap();
        assert_eq!(three_d, Projection::Isometric);
        assert!(serde_json::from_str::<Projection>("\"hex\"").is_err());
    }
}
