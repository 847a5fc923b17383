//! Tests for the generation run: stepping, finishing and visualization

#[cfg(test)]
mod tests {
    use walkgen::GenerationError;
    use walkgen::algorithm::executor::MapGenerator;
    use walkgen::io::configuration::GenerationConfig;
    use walkgen::spatial::{BlockType, Position};

    fn small_config() -> GenerationConfig {
        GenerationConfig {
            name: "small".to_string(),
            seed: 42,
            map_width: 30,
            map_height: 30,
            max_iterations: 20_000,
            init_position: Position::new(4, 4),
            waypoints: vec![Position::new(25, 25)],
            waypoint_reached_distance: 1,
            kernel_size_change_probability: 0.0,
            kernel_circularity_change_probability: 0.0,
            enable_tunnel_mode: false,
            ..GenerationConfig::default()
        }
    }

    // Tests an invalid configuration is rejected before any step
    #[test]
    fn test_new_validates_config() {
        let config = GenerationConfig {
            waypoints: Vec::new(),
            ..small_config()
        };
        assert!(matches!(
            MapGenerator::new(config),
            Err(GenerationError::InvalidParameter { .. })
        ));
    }

    // Tests a fresh run starts from solid rock
    #[test]
    fn test_new_map_is_rock() {
        let generator = MapGenerator::new(small_config()).expect("valid config rejected");
        assert_eq!(generator.map().count(BlockType::Hookable), 900);
        assert_eq!(generator.iteration(), 0);
        assert!(!generator.is_finished());
    }

    // Tests a step carves empty space around the walker
    // Verified by stamping the inner kernel before the outer one
    #[test]
    fn test_step_carves() {
        let mut generator = MapGenerator::new(small_config()).expect("valid config rejected");

        assert!(matches!(generator.step(), Ok(true)));
        let position = generator.walker().position();
        assert_eq!(generator.map().get_at(position), Some(BlockType::Empty));
        assert_eq!(generator.map().count(BlockType::Empty), 9);
        assert_eq!(generator.iteration(), 1);
    }

    // Tests a run reaches its waypoint and finishes exactly once
    // Verified by allowing finish to run twice
    #[test]
    fn test_run_finishes_once() {
        let mut generator = MapGenerator::new(small_config()).expect("valid config rejected");

        let outcome = generator.run().expect("run failed");
        assert!(outcome.reached);
        assert!(generator.is_finished());
        assert!(generator.walker().is_finished());
        assert_eq!(outcome.iterations, generator.walker().path().len() - 1);

        let start = generator.walker().path().first().copied();
        assert_eq!(
            start.and_then(|p| generator.map().get_at(p)),
            Some(BlockType::Spawn)
        );

        assert!(matches!(
            generator.finish(),
            Err(GenerationError::AlreadyFinished { .. })
        ));
        assert!(matches!(
            generator.run(),
            Err(GenerationError::AlreadyFinished { .. })
        ));
        assert!(matches!(
            generator.step(),
            Err(GenerationError::AlreadyFinished { .. })
        ));
    }

    // Tests the iteration cap stops the walk and still finishes the map
    #[test]
    fn test_run_iteration_cap() {
        let config = GenerationConfig {
            max_iterations: 5,
            ..small_config()
        };
        let mut generator = MapGenerator::new(config).expect("valid config rejected");

        let mut calls = 0;
        let outcome = generator.run_with(|_| calls += 1).expect("run failed");
        assert!(!outcome.reached);
        assert_eq!(outcome.iterations, 5);
        assert_eq!(calls, 5);
        assert!(generator.is_finished());
    }

    // Tests a map finished at the iteration cap cannot be stepped again
    // Verified by removing the finished check in step
    #[test]
    fn test_step_after_capped_finish_fails() {
        let config = GenerationConfig {
            max_iterations: 5,
            ..small_config()
        };
        let mut generator = MapGenerator::new(config).expect("valid config rejected");
        let outcome = generator.run().expect("run failed");
        assert!(!outcome.reached);
        assert!(!generator.walker().is_finished());

        let finished = generator.snapshot();
        assert!(matches!(
            generator.step(),
            Err(GenerationError::AlreadyFinished { iteration: 5 })
        ));
        assert_eq!(generator.snapshot(), finished);
        assert_eq!(generator.iteration(), 5);
    }

    // Tests equal seeds give identical maps and different seeds differ
    #[test]
    fn test_run_deterministic() {
        let run = |seed: u64| {
            let config = GenerationConfig {
                seed,
                ..small_config()
            };
            let mut generator = MapGenerator::new(config).expect("valid config rejected");
            assert!(generator.run().is_ok());
            generator.snapshot()
        };

        assert_eq!(run(7), run(7));
        assert_ne!(run(7), run(8));
    }

    // Tests GIF export requires visualization to be enabled
    #[test]
    fn test_visualization_export() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("run.gif");

        let mut generator = MapGenerator::new(small_config()).expect("valid config rejected");
        assert!(generator.export_visualization(&path, 1).is_err());

        generator.enable_visualization(10);
        assert!(generator.run().is_ok());
        assert!(generator.export_visualization(&path, 1).is_ok());
        assert!(path.exists());
    }
}
