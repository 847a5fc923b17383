//! Tests for cell tag groupings and external tile ids

#[cfg(test)]
mod tests {
    use walkgen::spatial::BlockType;

    const ALL: [BlockType; 11] = [
        BlockType::Hookable,
        BlockType::Unhookable,
        BlockType::Freeze,
        BlockType::MarginFreeze,
        BlockType::Empty,
        BlockType::Obstacle,
        BlockType::Platform,
        BlockType::Start,
        BlockType::Spawn,
        BlockType::Finish,
        BlockType::Debug,
    ];

    // Tests a fresh cell is solid rock
    #[test]
    fn test_default_is_hookable() {
        assert_eq!(BlockType::default(), BlockType::Hookable);
    }

    // Tests exactly the four wall tags are solid
    // Verified by adding Freeze to the solid group
    #[test]
    fn test_is_solid() {
        let solid: Vec<BlockType> = ALL.into_iter().filter(|b| b.is_solid()).collect();
        assert_eq!(
            solid,
            vec![
                BlockType::Hookable,
                BlockType::Unhookable,
                BlockType::Obstacle,
                BlockType::Platform
            ]
        );
    }

    // Tests only empty space is excluded from the any group
    #[test]
    fn test_is_any() {
        for block in ALL {
            assert_eq!(block.is_any(), block != BlockType::Empty);
        }
    }

    // Tests freeze-or-empty covers both hazards and open space
    #[test]
    fn test_is_freeze_or_empty() {
        let group: Vec<BlockType> = ALL.into_iter().filter(|b| b.is_freeze_or_empty()).collect();
        assert_eq!(
            group,
            vec![BlockType::Freeze, BlockType::MarginFreeze, BlockType::Empty]
        );
        assert!(BlockType::MarginFreeze.is_freeze());
        assert!(!BlockType::Empty.is_freeze());
    }

    // Tests the exported tile ids
    #[test]
    fn test_tile_ids() {
        assert_eq!(BlockType::Hookable.tile_id(), Some(1));
        assert_eq!(BlockType::Platform.tile_id(), Some(1));
        assert_eq!(BlockType::Unhookable.tile_id(), Some(3));
        assert_eq!(BlockType::Freeze.tile_id(), Some(9));
        assert_eq!(BlockType::MarginFreeze.tile_id(), Some(9));
        assert_eq!(BlockType::Start.tile_id(), Some(33));
        assert_eq!(BlockType::Finish.tile_id(), Some(34));
        assert_eq!(BlockType::Spawn.tile_id(), Some(192));
        assert_eq!(BlockType::Empty.tile_id(), None);
    }

    // Tests every tag renders opaque and the main tags are distinguishable
    #[test]
    fn test_colors() {
        assert!(ALL.iter().all(|b| b.color()[3] == 255));
        assert_ne!(BlockType::Empty.color(), BlockType::Hookable.color());
        assert_ne!(BlockType::Freeze.color(), BlockType::MarginFreeze.color());
    }
}
