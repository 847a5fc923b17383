//! Tests for the distance-biased move distribution

#[cfg(test)]
mod tests {
    use walkgen::algorithm::moves::{best_move, distance_probabilities};
    use walkgen::algorithm::random::RandomSource;
    use walkgen::spatial::{Direction, Position};

    // Tests the distribution always covers four distinct moves and sums to one
    // Verified by skipping normalisation
    #[test]
    fn test_distribution_sums_to_one() {
        let targets = [
            Position::new(10, 0),
            Position::new(-4, 7),
            Position::new(3, 3),
            Position::new(0, 0),
        ];
        for target in targets {
            for p in [0.1, 0.5, 0.9] {
                let moves = distance_probabilities(Position::new(0, 0), target, p);
                assert!((moves.sum() - 1.0).abs() < 1e-5);
                assert!(moves.probabilities().iter().all(|&q| q > 0.0));

                let mut distinct = moves.moves().to_vec();
                distinct.dedup();
                assert_eq!(distinct.len(), 4);
                for direction in Direction::ALL {
                    assert!(moves.moves().contains(&direction));
                }
            }
        }
    }

    // Tests closer moves receive geometrically more mass
    #[test]
    fn test_geometric_ranking() {
        let moves = distance_probabilities(Position::new(0, 0), Position::new(10, 0), 0.5);

        assert_eq!(moves.moves().first(), Some(&Direction::Right));
        assert_eq!(moves.moves().last(), Some(&Direction::Left));

        let expected = [0.5, 0.25, 0.125, 0.0625].map(|w| w / 0.9375);
        for (actual, expected) in moves.probabilities().iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-9);
        }
        assert!(moves.probability_of(Direction::Right) > moves.probability_of(Direction::Up));
    }

    // Tests equal distances keep the fixed direction order
    #[test]
    fn test_ties_keep_direction_order() {
        let moves = distance_probabilities(Position::new(2, 2), Position::new(2, 2), 0.5);
        assert_eq!(moves.moves(), &Direction::ALL);
    }

    // Tests a best-move probability of one always picks the closest move
    #[test]
    fn test_pick_deterministic_at_one() {
        let mut rng = RandomSource::new(3);
        let moves = distance_probabilities(Position::new(0, 0), Position::new(0, 9), 1.0);
        for _ in 0..100 {
            assert_eq!(moves.pick(&mut rng).ok(), Some(Direction::Down));
        }
    }

    // Tests the greedy move minimises distance and breaks ties in direction order
    // Verified by using max_by instead of min_by
    #[test]
    fn test_best_move() {
        let origin = Position::new(0, 0);
        assert_eq!(best_move(origin, Position::new(0, -5)), Direction::Up);
        assert_eq!(best_move(origin, Position::new(-3, 0)), Direction::Left);
        assert_eq!(best_move(origin, Position::new(0, 4)), Direction::Down);
        assert_eq!(
            best_move(Position::new(5, 5), Position::new(6, 6)),
            Direction::Right
        );
    }
}
