use serde::{Deserialize, Serialize};

/// Slack for the sub-pixel rounding browsers apply to reported intersection
/// ratios.
pub const RATIO_TOLERANCE: f64 = 0.01;

/// The visibility fraction `target_height` can actually reach inside a
/// viewport of `viewport_height`. A container taller than the viewport never
/// shows its full `threshold`, so the threshold is capped at what fits.
pub fn reachable_threshold(threshold: f64, target_height: f64, viewport_height: f64) -> f64 {
    if target_height <= 0.0 || viewport_height <= 0.0 {
        return threshold;
    }
    threshold.min(viewport_height / target_height)
}

/// One-way latch recording that an element has entered the viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealLatch {
    has_entered: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_entered(&self) -> bool {
        self.has_entered
    }

    /// Feed one intersection observation.
    ///
    /// A ratio within [`RATIO_TOLERANCE`] of `threshold` counts as reaching
    /// it. Returns `true` only on the observation that flips the latch, which
    /// is when the caller should stop observing.
    pub fn observe(&mut self, visible_ratio: f64, threshold: f64) -> bool {
        if self.has_entered {
            return false;
        }

        if visible_ratio > 0.0 && visible_ratio + RATIO_TOLERANCE >= threshold {
            self.has_entered = true;
            return true;
        }

        false
    }
}
