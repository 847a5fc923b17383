//! Tests for the tile-layer map directory exporter

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use std::path::Path;
    use walkgen::io::export::{LayerTile, export_map_dir, game_layer_tiles};
    use walkgen::spatial::{BlockType, Map};

    fn read_json(path: &Path) -> Value {
        let text = std::fs::read_to_string(path).expect("Failed to read exported document");
        serde_json::from_str(&text).expect("exported document is not valid JSON")
    }

    // Tests tiles run column by column from the bottom row up
    // Verified by iterating rows top-down
    #[test]
    fn test_tile_order() {
        let mut map = Map::new(2, 3);
        map.set(1, 1, BlockType::Empty);
        let tiles = game_layer_tiles(&map.snapshot());

        assert_eq!(tiles.len(), 5);
        assert_eq!(
            tiles.first(),
            Some(&LayerTile {
                x: 0,
                y: 2,
                id: 1,
                mirrored: false,
                rotation: 0,
            })
        );
        let coords: Vec<(usize, usize)> = tiles.iter().map(|t| (t.x, t.y)).collect();
        assert_eq!(coords, vec![(0, 2), (0, 1), (0, 0), (1, 2), (1, 0)]);
    }

    // Tests tags map to their game-layer ids
    #[test]
    fn test_tile_ids() {
        let mut map = Map::new(4, 1);
        map.set(0, 0, BlockType::Freeze);
        map.set(1, 0, BlockType::Unhookable);
        map.set(2, 0, BlockType::Debug);
        map.set(3, 0, BlockType::Spawn);

        let ids: Vec<u8> = game_layer_tiles(&map.snapshot())
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![9, 3, 192]);
    }

    // Tests the four documents are written with the layer dimensions
    #[test]
    fn test_export_map_dir() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut map = Map::new(5, 4);
        map.set(2, 2, BlockType::Empty);

        let root = export_map_dir(&map.snapshot(), "sample", dir.path()).expect("export failed");
        assert_eq!(root, dir.path().join("sample"));

        let version = read_json(&root.join("version.json"));
        assert_eq!(version["type"], "ddnet06");

        assert!(root.join("info.json").exists());

        let group = read_json(&root.join("groups/0_Game/group.json"));
        assert_eq!(group["name"], "Game");
        assert_eq!(group["parallax"]["x"], 100);

        let layer = read_json(&root.join("groups/0_Game/layers/0_Game.json"));
        assert_eq!(layer["type"], "game");
        assert_eq!(layer["width"], 5);
        assert_eq!(layer["height"], 4);
        let tiles = layer["tiles"].as_array().expect("tiles is not an array");
        assert_eq!(tiles.len(), 19);
        assert_eq!(tiles.first().map(|t| t["y"].clone()), Some(Value::from(3)));
    }
}
