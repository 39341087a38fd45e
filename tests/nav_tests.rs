mod common;

#[cfg(test)]
pub mod nav_tests {
    use batavia::state::*;

    #[test]
    fn test_nav_starts_closed_success() {
        let nav = NavState::new();
        assert!(!nav.is_scrolled());
        assert!(!nav.is_mobile_open());
        assert_eq!(nav.open_dropdown(), None);
    }

    #[test]
    fn test_nav_on_scroll_success() {
        let mut nav = NavState::new();

        nav.on_scroll(SCROLL_THRESHOLD + 1.0);
        assert!(nav.is_scrolled());

        nav.on_scroll(0.0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_nav_on_scroll_fails_on_exact_threshold() {
        let mut nav = NavState::new();
        nav.on_scroll(SCROLL_THRESHOLD);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_nav_toggle_dropdown_success() {
        let mut nav = NavState::new();

        nav.toggle_dropdown(1);
        assert!(nav.is_dropdown_open(1));

        nav.toggle_dropdown(1);
        assert_eq!(nav.open_dropdown(), None);
    }

    #[test]
    fn test_nav_opening_second_dropdown_closes_first_success() {
        let mut nav = NavState::new();

        nav.toggle_dropdown(1);
        nav.toggle_dropdown(2);

        assert!(!nav.is_dropdown_open(1));
        assert!(nav.is_dropdown_open(2));
        assert_eq!(nav.open_dropdown(), Some(2));
    }

    #[test]
    fn test_nav_hover_dropdown_success() {
        let mut nav = NavState::new();

        nav.hover_dropdown(2);
        nav.hover_dropdown(2);
        assert!(nav.is_dropdown_open(2));

        nav.hover_dropdown(1);
        assert_eq!(nav.open_dropdown(), Some(1));
    }

    #[test]
    fn test_nav_close_dropdown_on_outside_click_success() {
        let mut nav = NavState::new();
        nav.toggle_dropdown(1);
        nav.close_dropdown();
        assert_eq!(nav.open_dropdown(), None);
    }

    #[test]
    fn test_nav_mobile_link_closes_drawer_success() {
        let mut nav = NavState::new();

        nav.toggle_mobile();
        assert!(nav.is_mobile_open());

        nav.toggle_dropdown(1);
        nav.activate_link();

        assert!(!nav.is_mobile_open());
        assert_eq!(nav.open_dropdown(), None);
    }

    #[test]
    fn test_nav_toggle_mobile_twice_closes_success() {
        let mut nav = NavState::new();
        nav.toggle_mobile();
        nav.toggle_mobile();
        assert!(!nav.is_mobile_open());
    }

    #[test]
    fn test_nav_activate_link_keeps_scroll_state_success() {
        let mut nav = NavState::new();
        nav.on_scroll(400.0);
        nav.activate_link();
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_viewport_from_width_success() {
        assert_eq!(Viewport::from_width(DESKTOP_BREAKPOINT), Viewport::Desktop);
        assert_eq!(Viewport::from_width(1280.0), Viewport::Desktop);
        assert_eq!(Viewport::from_width(DESKTOP_BREAKPOINT - 1.0), Viewport::Mobile);
    }

    #[test]
    fn test_nav_on_resize_closes_drawer_success() {
        let mut nav = NavState::new();
        nav.toggle_mobile();

        assert!(nav.on_resize(Viewport::Desktop));
        assert!(!nav.is_mobile_open());
    }

    #[test]
    fn test_nav_on_resize_fails_on_mobile_width() {
        let mut nav = NavState::new();
        nav.toggle_mobile();

        assert!(!nav.on_resize(Viewport::Mobile));
        assert!(nav.is_mobile_open());
    }
}
