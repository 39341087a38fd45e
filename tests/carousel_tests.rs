mod common;

#[cfg(test)]
pub mod carousel_tests {
    use std::time::Duration;

    use super::common::*;

    use batavia::common::*;
    use batavia::motion::MotionPreference;
    use batavia::state::*;

    #[test]
    fn test_carousel_new_fails_on_empty_items() {
        let result = Carousel::<usize>::new(Vec::new());
        assert_eq!(result.unwrap_err(), CarouselError::Empty);
    }

    #[test]
    fn test_carousel_starts_at_first_item_success() {
        let carousel = get_seed_carousel(3);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(*carousel.current(), 0);
        assert!(!carousel.is_paused());
    }

    #[test]
    fn test_carousel_advance_full_cycle_success() {
        for len in 2..=6 {
            let mut carousel = get_seed_carousel(len);
            carousel.select_index(1);

            for _ in 0..len {
                carousel.advance();
            }

            assert_eq!(carousel.current_index(), 1);
        }
    }

    #[test]
    fn test_carousel_retreat_undoes_advance_success() {
        let mut carousel = get_seed_carousel(4);

        for start in 0..4 {
            carousel.select_index(start);
            carousel.advance();
            carousel.retreat();
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[test]
    fn test_carousel_retreat_wraps_to_last_success() {
        let mut carousel = get_seed_carousel(3);
        carousel.retreat();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_carousel_select_index_success() {
        let mut carousel = get_seed_carousel(3);
        assert!(carousel.select_index(2));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_carousel_select_index_fails_on_out_of_range() {
        let mut carousel = get_seed_carousel(3);
        carousel.select_index(1);

        assert!(!carousel.select_index(3));
        assert!(!carousel.select_index(usize::MAX));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_carousel_tick_success() {
        let mut carousel = get_seed_carousel(3);
        assert!(carousel.tick());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_carousel_tick_fails_on_paused() {
        let mut carousel = get_seed_carousel(3);
        carousel.pause();

        assert!(!carousel.tick());
        assert_eq!(carousel.current_index(), 0);

        carousel.resume();
        assert!(carousel.tick());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_carousel_manual_controls_ignore_pause_success() {
        let mut carousel = get_seed_carousel(3);
        carousel.pause();
        carousel.advance();
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_single_item_carousel_stays_put_success() {
        let mut carousel = get_seed_carousel(1);
        carousel.advance();
        carousel.retreat();
        carousel.tick();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_autoplay_interval_for_success() {
        let autoplay = AutoplayConfig::new(Duration::from_secs(6), Some(Duration::from_secs(9)));

        assert_eq!(autoplay.interval_for(MotionPreference::Full), Some(Duration::from_secs(6)));
        assert_eq!(autoplay.interval_for(MotionPreference::Reduced), Some(Duration::from_secs(9)));
    }

    #[test]
    fn test_autoplay_interval_for_fails_on_reduced_without_fallback() {
        let autoplay = AutoplayConfig::new(Duration::from_millis(4500), None);
        assert_eq!(autoplay.interval_for(MotionPreference::Reduced), None);
    }
}
