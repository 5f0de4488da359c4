//! Tile classification: every map cell is one [`TileKind`].

use std::fmt;

/// The kind of a single map tile.
///
/// Each kind has a fixed ASCII symbol (used in map layouts and save
/// snapshots) and a fixed walkability. Unknown symbols decode to
/// [`TileKind::Impassable`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Impassable,
    Floor,
    Wall,
    Grate,
    Door,
    DoorGrate,
    Arch,
    ArchGrate,
    CornerInnerTopLeft,
    CornerInnerTopRight,
    CornerInnerBottomLeft,
    CornerInnerBottomRight,
    CornerOuterTopLeft,
    CornerOuterTopRight,
    CornerOuterBottomLeft,
    CornerOuterBottomRight,
    Entrance,
    /// Spawn marker. Map loaders replace it with [`TileKind::Floor`].
    Player,
    Exit,
}

impl TileKind {
    /// All kinds, in symbol-table order.
    pub const ALL: [TileKind; 19] = [
        TileKind::Impassable,
        TileKind::Floor,
        TileKind::Wall,
        TileKind::Grate,
        TileKind::Door,
        TileKind::DoorGrate,
        TileKind::Arch,
        TileKind::ArchGrate,
        TileKind::CornerInnerTopLeft,
        TileKind::CornerInnerTopRight,
        TileKind::CornerInnerBottomLeft,
        TileKind::CornerInnerBottomRight,
        TileKind::CornerOuterTopLeft,
        TileKind::CornerOuterTopRight,
        TileKind::CornerOuterBottomLeft,
        TileKind::CornerOuterBottomRight,
        TileKind::Entrance,
        TileKind::Player,
        TileKind::Exit,
    ];

    /// ASCII symbol of this kind.
    pub const fn symbol(self) -> char {
        match self {
            TileKind::Impassable => '0',
            TileKind::Floor => '.',
            TileKind::Wall => '#',
            TileKind::Grate => '"',
            TileKind::Door => '*',
            TileKind::DoorGrate => '~',
            TileKind::Arch => '-',
            TileKind::ArchGrate => '+',
            TileKind::CornerInnerTopLeft => 'A',
            TileKind::CornerInnerTopRight => 'B',
            TileKind::CornerInnerBottomLeft => 'C',
            TileKind::CornerInnerBottomRight => 'D',
            TileKind::CornerOuterTopLeft => 'E',
            TileKind::CornerOuterTopRight => 'F',
            TileKind::CornerOuterBottomLeft => 'G',
            TileKind::CornerOuterBottomRight => 'H',
            TileKind::Entrance => 'S',
            TileKind::Player => '@',
            TileKind::Exit => 'X',
        }
    }

    /// Whether an entity may stand on this tile.
    pub const fn is_walkable(self) -> bool {
        matches!(
            self,
            TileKind::Floor
                | TileKind::Door
                | TileKind::DoorGrate
                | TileKind::Arch
                | TileKind::Entrance
                | TileKind::Player
                | TileKind::Exit
        )
    }

    /// Decode an ASCII symbol, falling back to [`TileKind::Impassable`].
    pub fn from_char(c: char) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.symbol() == c)
            .unwrap_or(TileKind::Impassable)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
