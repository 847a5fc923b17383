//! Tests for grid coordinates and unit moves

#[cfg(test)]
mod tests {
    use walkgen::spatial::{Direction, Position};

    // Tests both distance metrics on a 3-4-5 triangle
    #[test]
    fn test_distances() {
        let a = Position::new(1, 2);
        let b = Position::new(4, 6);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
        assert!((a.euclidean_distance(b) - 5.0).abs() < 1e-12);
    }

    // Tests moves follow x-right, y-down
    // Verified by swapping the Up and Down deltas
    #[test]
    fn test_direction_deltas() {
        let origin = Position::new(0, 0);
        assert_eq!(origin + Direction::Up, Position::new(0, -1));
        assert_eq!(origin + Direction::Right, Position::new(1, 0));
        assert_eq!(origin + Direction::Down, Position::new(0, 1));
        assert_eq!(origin + Direction::Left, Position::new(-1, 0));
    }

    // Tests the four moves are axis-aligned unit steps that cancel out
    #[test]
    fn test_all_moves_unit_axis_aligned() {
        let (sx, sy) = Direction::ALL
            .iter()
            .map(|d| d.delta())
            .fold((0, 0), |(ax, ay), (dx, dy)| (ax + dx, ay + dy));
        assert_eq!((sx, sy), (0, 0));
        assert!(
            Direction::ALL
                .iter()
                .all(|d| d.delta().0.abs() + d.delta().1.abs() == 1)
        );
    }

    // Tests raw offsets
    #[test]
    fn test_offset() {
        assert_eq!(Position::new(3, 3).offset(-2, 5), Position::new(1, 8));
    }
}
