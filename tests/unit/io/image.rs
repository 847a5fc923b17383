//! Tests for snapshot rendering and PNG export

#[cfg(test)]
mod tests {
    use walkgen::io::image::{export_map_as_png, render_snapshot};
    use walkgen::spatial::{BlockType, Map};

    // Tests every cell becomes a scaled square of its tag colour
    // Verified by swapping x and y in the cell lookup
    #[test]
    fn test_render_scales_cells() {
        let mut map = Map::new(3, 2);
        map.set(2, 0, BlockType::Empty);
        map.set(0, 1, BlockType::Platform);

        let img = render_snapshot(&map.snapshot(), 4);
        assert_eq!(img.dimensions(), (12, 8));
        assert_eq!(img.get_pixel(9, 1).0, BlockType::Empty.color());
        assert_eq!(img.get_pixel(11, 3).0, BlockType::Empty.color());
        assert_eq!(img.get_pixel(2, 6).0, BlockType::Platform.color());
        assert_eq!(img.get_pixel(5, 5).0, BlockType::Hookable.color());
    }

    // Tests a zero scale still renders one pixel per cell
    #[test]
    fn test_render_minimum_scale() {
        let map = Map::new(5, 4);
        assert_eq!(render_snapshot(&map.snapshot(), 0).dimensions(), (5, 4));
    }

    // Tests PNG export creates missing directories
    #[test]
    fn test_export_png() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("map.png");
        let map = Map::new(6, 3);

        assert!(export_map_as_png(&map.snapshot(), &path, 2).is_ok());
        let loaded = image::open(&path).expect("exported PNG unreadable");
        assert_eq!((loaded.width(), loaded.height()), (12, 6));
    }

    // Tests an empty map is rejected
    #[test]
    fn test_export_empty_map() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let map = Map::new(0, 0);
        assert!(export_map_as_png(&map.snapshot(), &dir.path().join("empty.png"), 1).is_err());
    }
}
