mod common;

#[cfg(test)]
pub mod reveal_tests {
    use batavia::state::*;

    #[test]
    fn test_reveal_latch_observe_success() {
        let mut latch = RevealLatch::new();

        assert!(!latch.observe(0.1, 0.3));
        assert!(!latch.has_entered());

        assert!(latch.observe(0.3, 0.3));
        assert!(latch.has_entered());
    }

    #[test]
    fn test_reveal_latch_observe_rounded_ratio_success() {
        let mut latch = RevealLatch::new();
        assert!(latch.observe(0.2999, 0.3));
        assert!(latch.has_entered());
    }

    #[test]
    fn test_reveal_latch_observe_fails_on_ratio_outside_tolerance() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(0.3 - 2.0 * RATIO_TOLERANCE, 0.3));
        assert!(!latch.has_entered());
    }

    #[test]
    fn test_reveal_latch_tall_container_success() {
        // 2400px container in a 667px viewport can show at most ~27.8%.
        let threshold = reachable_threshold(0.3, 2400.0, 667.0);
        assert!(threshold < 0.3);

        let mut latch = RevealLatch::new();
        assert!(latch.observe(667.0 / 2400.0, threshold));
        assert!(latch.has_entered());
    }

    #[test]
    fn test_reachable_threshold_keeps_short_container_success() {
        assert_eq!(reachable_threshold(0.3, 400.0, 800.0), 0.3);
    }

    #[test]
    fn test_reachable_threshold_fails_on_unmeasured_sizes() {
        assert_eq!(reachable_threshold(0.2, 0.0, 800.0), 0.2);
        assert_eq!(reachable_threshold(0.2, 500.0, 0.0), 0.2);
    }

    #[test]
    fn test_reveal_latch_never_reverts_success() {
        let mut latch = RevealLatch::new();
        latch.observe(1.0, 0.2);

        for ratio in [0.0, 0.05, 1.0, 0.0] {
            assert!(!latch.observe(ratio, 0.2));
            assert!(latch.has_entered());
        }
    }

    #[test]
    fn test_reveal_latch_observe_fails_on_zero_ratio() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(0.0, 0.0));
        assert!(!latch.has_entered());
    }
}
