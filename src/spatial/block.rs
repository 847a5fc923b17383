//! Closed set of cell tags and their semantic groupings

use serde::{Deserialize, Serialize};

/// Tag held by every map cell
///
/// The default tag is `Hookable`: a fresh map is solid rock that the walker
/// carves into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    /// Solid wall that can be hooked
    #[default]
    Hookable,
    /// Solid wall that cannot be hooked
    Unhookable,
    /// Hazard bordering traversable space
    Freeze,
    /// Hazard stamped only over previously solid cells around the walker
    MarginFreeze,
    /// Traversable space
    Empty,
    /// Solid obstacle
    Obstacle,
    /// Solid ledge placed along the walked path
    Platform,
    /// Start line
    Start,
    /// Player spawn marker
    Spawn,
    /// Finish line
    Finish,
    /// Marker used while debugging generation
    Debug,
}

impl BlockType {
    /// Cells that seed the distance transform and block platform clearance
    pub const fn is_solid(self) -> bool {
        matches!(
            self,
            Self::Hookable | Self::Unhookable | Self::Obstacle | Self::Platform
        )
    }

    /// Anything but empty space
    pub const fn is_any(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Hazard or empty space
    pub const fn is_freeze_or_empty(self) -> bool {
        matches!(self, Self::Freeze | Self::MarginFreeze | Self::Empty)
    }

    /// Either freeze tag
    pub const fn is_freeze(self) -> bool {
        matches!(self, Self::Freeze | Self::MarginFreeze)
    }

    /// Game-layer tile id used by the map exporter, `None` for air
    pub const fn tile_id(self) -> Option<u8> {
        match self {
            Self::Hookable | Self::Obstacle | Self::Platform => Some(1),
            Self::Unhookable => Some(3),
            Self::Freeze | Self::MarginFreeze => Some(9),
            Self::Start => Some(33),
            Self::Finish => Some(34),
            Self::Spawn => Some(192),
            Self::Empty | Self::Debug => None,
        }
    }

    /// RGBA colour used when rendering snapshots
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Hookable => [92, 84, 74, 255],
            Self::Unhookable => [60, 60, 72, 255],
            Self::Freeze => [28, 28, 36, 255],
            Self::MarginFreeze => [52, 40, 64, 255],
            Self::Empty => [214, 224, 232, 255],
            Self::Obstacle => [140, 110, 80, 255],
            Self::Platform => [196, 128, 48, 255],
            Self::Start => [64, 176, 96, 255],
            Self::Spawn => [240, 220, 64, 255],
            Self::Finish => [200, 64, 64, 255],
            Self::Debug => [255, 0, 255, 255],
        }
    }
}
