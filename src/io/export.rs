//! Tile-layer "MapDir" export
//!
//! Writes the directory layout understood by map conversion tools:
//!
//! ```text
//! <dir>/<name>/version.json
//! <dir>/<name>/info.json
//! <dir>/<name>/groups/0_Game/group.json
//! <dir>/<name>/groups/0_Game/layers/0_Game.json
//! ```
//!
//! Only the game layer is written. Cells without a tile id are left out.

use crate::io::error::{GenerationError, Result, file_system_error};
use crate::spatial::MapSnapshot;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct VersionDocument {
    #[serde(rename = "type")]
    kind: &'static str,
    created_by: &'static str,
}

#[derive(Serialize)]
struct InfoDocument {
    author: &'static str,
    version: &'static str,
    credits: &'static str,
    license: &'static str,
    settings: Vec<String>,
}

#[derive(Serialize)]
struct StringPoint {
    x: &'static str,
    y: &'static str,
}

#[derive(Serialize)]
struct IntPoint {
    x: i32,
    y: i32,
}

#[derive(Serialize)]
struct GroupDocument {
    name: &'static str,
    offset: StringPoint,
    parallax: IntPoint,
    clipping: bool,
    clip: StringPoint,
    clip_size: StringPoint,
}

/// One placed tile of the game layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LayerTile {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
    /// External tile id
    pub id: u8,
    /// Always `false`; generated tiles are never mirrored
    pub mirrored: bool,
    /// Always `0`; generated tiles are never rotated
    pub rotation: u8,
}

#[derive(Serialize)]
struct LayerDocument {
    #[serde(rename = "type")]
    kind: &'static str,
    width: usize,
    height: usize,
    tiles: Vec<LayerTile>,
}

const ORIGIN: StringPoint = StringPoint { x: "0", y: "0" };

/// Tiles of the game layer, column by column with rows from the bottom up
pub fn game_layer_tiles(snapshot: &MapSnapshot) -> Vec<LayerTile> {
    let mut tiles = Vec::new();
    for x in 0..snapshot.width() {
        for y in (0..snapshot.height()).rev() {
            let id = snapshot.cell_at(x, y).and_then(|block| block.tile_id());
            if let Some(id) = id {
                tiles.push(LayerTile {
                    x,
                    y,
                    id,
                    mirrored: false,
                    rotation: 0,
                });
            }
        }
    }
    tiles
}

/// Write `snapshot` as a MapDir named `name` inside `dir`
///
/// Returns the root directory of the written map.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be written or a document
/// fails to serialize
pub fn export_map_dir(snapshot: &MapSnapshot, name: &str, dir: &Path) -> Result<PathBuf> {
    let root = dir.join(name);
    let group_dir = root.join("groups").join("0_Game");
    let layer_dir = group_dir.join("layers");
    std::fs::create_dir_all(&layer_dir).map_err(file_system_error(&layer_dir, "create directory"))?;

    write_json(
        &root.join("version.json"),
        &VersionDocument {
            kind: "ddnet06",
            created_by: "",
        },
    )?;
    write_json(
        &root.join("info.json"),
        &InfoDocument {
            author: "",
            version: "",
            credits: "",
            license: "",
            settings: Vec::new(),
        },
    )?;
    write_json(
        &group_dir.join("group.json"),
        &GroupDocument {
            name: "Game",
            offset: ORIGIN,
            parallax: IntPoint { x: 100, y: 100 },
            clipping: false,
            clip: ORIGIN,
            clip_size: ORIGIN,
        },
    )?;

    let tiles = game_layer_tiles(snapshot);
    let tile_count = tiles.len();
    write_json(
        &layer_dir.join("0_Game.json"),
        &LayerDocument {
            kind: "game",
            width: snapshot.width(),
            height: snapshot.height(),
            tiles,
        },
    )?;

    info!("exported map '{name}' with {tile_count} tiles to {}", root.display());
    Ok(root)
}

fn write_json(path: &Path, document: &impl Serialize) -> Result<()> {
    let text =
        serde_json::to_string_pretty(document).map_err(|source| GenerationError::Serialization {
            operation: "map document",
            source,
        })?;
    std::fs::write(path, text).map_err(file_system_error(path, "write file"))
}
