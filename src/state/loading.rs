use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What flips a placeholder to its real content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyTrigger {
    /// Fixed artificial delay after mount.
    Timer(Duration),
    /// The wrapped resource's own load event (image decoded, video data).
    ResourceLoad,
}

impl ReadyTrigger {
    pub fn timer_ms(ms: u64) -> Self {
        Self::Timer(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Option<Duration> {
        match self {
            Self::Timer(d) => Some(*d),
            Self::ResourceLoad => None,
        }
    }
}

/// Readiness of a skeleton placeholder. Starts not ready and flips at most once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingState {
    is_ready: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn shows_placeholder(&self) -> bool {
        !self.is_ready
    }

    /// Returns `true` if this call performed the transition.
    pub fn mark_ready(&mut self) -> bool {
        if self.is_ready {
            return false;
        }
        self.is_ready = true;
        true
    }
}
