//! Tests for snapshot capture and GIF export

#[cfg(test)]
mod tests {
    use walkgen::io::visualization::VisualizationCapture;
    use walkgen::spatial::{BlockType, Map};

    // Tests snapshots are kept only on capture iterations
    // Verified by recording on every step
    #[test]
    fn test_capture_interval() {
        let map = Map::new(4, 4);
        let mut capture = VisualizationCapture::new(3);
        for iteration in 1..=10 {
            capture.record_step(iteration, &map);
        }
        assert_eq!(capture.frame_count(), 3);

        capture.record_final(&map);
        assert_eq!(capture.frame_count(), 4);
    }

    // Tests a zero interval captures every step
    #[test]
    fn test_zero_interval() {
        let map = Map::new(2, 2);
        let mut capture = VisualizationCapture::new(0);
        for iteration in 1..=4 {
            capture.record_step(iteration, &map);
        }
        assert_eq!(capture.frame_count(), 4);
    }

    // Tests frames are copies taken at capture time
    #[test]
    fn test_frames_are_snapshots() {
        let mut map = Map::new(3, 3);
        let mut capture = VisualizationCapture::new(1);
        capture.record_step(1, &map);
        map.set(1, 1, BlockType::Empty);
        capture.record_final(&map);

        assert_eq!(capture.frame_count(), 2);
        let before = capture.frames().first().expect("missing first frame");
        let after = capture.frames().last().expect("missing last frame");
        assert_eq!(before.cell_at(1, 1), Some(BlockType::Hookable));
        assert_eq!(after.cell_at(1, 1), Some(BlockType::Empty));
    }

    // Tests GIF export writes a file
    #[test]
    fn test_export_gif() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("walk.gif");
        let mut map = Map::new(8, 8);
        let mut capture = VisualizationCapture::new(1);
        for iteration in 1..=12 {
            map.set((iteration % 8) as i32, 3, BlockType::Empty);
            capture.record_step(iteration, &map);
        }

        assert!(capture.export_gif(&path, 5, 2).is_ok());
        assert!(path.exists());
    }

    // Tests exporting without frames fails
    #[test]
    fn test_export_without_frames() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let capture = VisualizationCapture::new(1);
        assert!(
            capture
                .export_gif(&dir.path().join("empty.gif"), 5, 1)
                .is_err()
        );
    }
}
