//! Tests for progress bar layout across batch sizes

#[cfg(test)]
mod tests {
    use walkgen::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use walkgen::io::progress::ProgressManager;

    // Tests small batches get one bar per map and no batch bar
    // Verified by always creating a batch bar
    #[test]
    fn test_small_batch() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);
        assert_eq!(manager.visible_bars(), 3);
        assert!(!manager.is_batched());
        manager.finish();
    }

    // Tests large batches cap individual bars and add a batch bar
    #[test]
    fn test_large_batch() {
        let mut manager = ProgressManager::new();
        manager.initialize(10);
        assert_eq!(manager.visible_bars(), MAX_INDIVIDUAL_PROGRESS_BARS);
        assert!(manager.is_batched());
        manager.finish();
    }

    // Tests updates for unknown or out-of-order maps are tolerated
    #[test]
    fn test_updates_out_of_order() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);
        manager.update_iteration(7, 10);
        manager.start_map(1, "second", 100);
        manager.update_iteration(1, 50);
        manager.complete_map(1);
        manager.complete_map(4);
        manager.finish();
        assert_eq!(manager.visible_bars(), 2);
    }
}
