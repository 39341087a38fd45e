mod common;

#[cfg(test)]
pub mod loading_tests {
    use std::time::Duration;

    use batavia::state::*;

    #[test]
    fn test_loading_state_mark_ready_success() {
        let mut state = LoadingState::new();
        assert!(state.shows_placeholder());

        assert!(state.mark_ready());
        assert!(state.is_ready());
        assert!(!state.shows_placeholder());
    }

    #[test]
    fn test_loading_state_mark_ready_fails_on_second_call() {
        let mut state = LoadingState::new();
        state.mark_ready();

        assert!(!state.mark_ready());
        assert!(state.is_ready());
    }

    #[test]
    fn test_ready_trigger_delay_success() {
        assert_eq!(ReadyTrigger::timer_ms(900).delay(), Some(Duration::from_millis(900)));
        assert_eq!(ReadyTrigger::ResourceLoad.delay(), None);
    }
}
