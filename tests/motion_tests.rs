mod common;

#[cfg(test)]
pub mod motion_tests {
    use std::time::Duration;

    use batavia::motion::*;

    #[test]
    fn test_motion_preference_from_reduced_success() {
        assert_eq!(MotionPreference::from_reduced(true), MotionPreference::Reduced);
        assert_eq!(MotionPreference::from_reduced(false), MotionPreference::Full);
        assert_eq!(MotionPreference::default(), MotionPreference::Full);
    }

    #[test]
    fn test_reveal_child_style_success() {
        let cfg = RevealConfig::default()
            .with_delay(Duration::from_millis(100))
            .with_stagger(Duration::from_millis(80))
            .with_duration(Duration::from_millis(600))
            .with_easing(Easing::EaseOut);

        let style = cfg.child_style(2, true, MotionPreference::Full);
        assert!(style.starts_with("opacity:1;"));
        assert!(style.contains("opacity 600ms ease-out 260ms"));
    }

    #[test]
    fn test_reveal_child_style_reduced_success() {
        let cfg = RevealConfig::default().with_distance(40.0).with_scale_from(0.9);

        let hidden = cfg.child_style(4, false, MotionPreference::Reduced);
        assert!(hidden.contains("translateY(0px) scale(1)"));

        let shown = cfg.child_style(4, true, MotionPreference::Reduced);
        assert!(shown.contains("0ms"));
        assert!(!shown.contains("720ms"));
    }

    #[test]
    fn test_reveal_with_threshold_clamps_success() {
        assert_eq!(RevealConfig::default().with_threshold(1.5).threshold, 1.0);
        assert_eq!(RevealConfig::default().with_threshold(-0.2).threshold, 0.0);
    }

    #[test]
    fn test_fade_in_style_success() {
        let fade = FadeInConfig::scaled(Duration::from_millis(900), 1.06);

        let pending = fade.style(false, MotionPreference::Full);
        assert!(pending.contains("opacity:0;"));
        assert!(pending.contains("scale(1.06)"));

        let ready = fade.style(true, MotionPreference::Full);
        assert!(ready.contains("opacity:1;"));
        assert!(ready.contains("900ms"));
    }

    #[test]
    fn test_fade_in_style_reduced_success() {
        let fade = FadeInConfig::scaled(Duration::from_millis(900), 1.06);
        let pending = fade.style(false, MotionPreference::Reduced);
        assert!(pending.contains("scale(1)"));
        assert!(pending.contains("0ms"));
    }

    #[test]
    fn test_cross_fade_success() {
        let cfg = CrossFadeConfig::default();

        assert_eq!(cfg.exit_duration(MotionPreference::Full), Duration::from_millis(400));
        assert!(cfg.enter_style(MotionPreference::Full).contains("carousel-enter 600ms"));
        assert!(cfg.exit_style(MotionPreference::Full).contains("--carousel-distance:24px"));
    }

    #[test]
    fn test_cross_fade_reduced_success() {
        let cfg = CrossFadeConfig::default();
        assert_eq!(cfg.exit_duration(MotionPreference::Reduced), Duration::ZERO);
        assert!(cfg.enter_style(MotionPreference::Reduced).contains("carousel-enter 0ms"));
    }

    #[test]
    fn test_testimonial_heading_stagger_success() {
        use batavia::frontend::sections::testimonial_heading;

        let cfg = testimonial_heading();
        assert_eq!(cfg.threshold, 0.3);
        assert_eq!(cfg.delay_for(0), Duration::ZERO);
        assert_eq!(cfg.delay_for(2), Duration::from_millis(300));

        let title = cfg.child_style(1, true, MotionPreference::Full);
        assert!(title.contains("opacity 700ms cubic-bezier(0.22, 1, 0.36, 1) 150ms"));

        let hidden = cfg.child_style(1, false, MotionPreference::Full);
        assert!(hidden.contains("translateY(26px)"));
    }

    #[test]
    fn test_testimonial_skeleton_timer_success() {
        use batavia::frontend::sections::TESTIMONIAL_SKELETON_MS;
        use batavia::state::ReadyTrigger;

        let trigger = ReadyTrigger::timer_ms(TESTIMONIAL_SKELETON_MS);
        assert_eq!(trigger.delay(), Some(Duration::from_millis(1200)));
    }
}
