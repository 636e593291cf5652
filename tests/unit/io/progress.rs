//! Tests for fixed-cell progress tracking

#[cfg(test)]
mod tests {
    use pipetile::io::progress::ProgressManager;

    // Tests the bar length equals the cell count
    // Verified by sizing the bar by grid width
    #[test]
    fn test_progress_manager_length() {
        let pm = ProgressManager::hidden(200);
        assert_eq!(pm.length(), Some(200));
        assert_eq!(pm.position(), 0);
    }

    // Tests updates set the absolute fixed count
    // Verified by incrementing instead of setting the position
    #[test]
    fn test_progress_manager_update() {
        let pm = ProgressManager::hidden(12);

        pm.update(5);
        assert_eq!(pm.position(), 5);

        pm.update(7);
        assert_eq!(pm.position(), 7);

        pm.update(12);
        pm.finish();
        assert_eq!(pm.position(), 12);
    }

    // Tests a visible bar can be created and finished
    // Verified by panicking on template parse
    #[test]
    fn test_progress_manager_new() {
        let pm = ProgressManager::new(4);
        pm.update(4);
        pm.finish();
    }
}
