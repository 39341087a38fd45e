//! Animation configuration shared by every page.
//!
//! Each config is a plain value type rendered to inline CSS by the components
//! in [`crate::frontend`]. Under [`MotionPreference::Reduced`] every duration,
//! delay and offset collapses to zero, so content appears immediately.

use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced { Self::Reduced } else { Self::Full }
    }

    pub fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduced)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// `[0.22, 1, 0.36, 1]`, the soft overshoot-free curve used by the home sections.
    pub const SMOOTH: Self = Self::CubicBezier(0.22, 1.0, 0.36, 1.0);
    /// `[0.16, 1, 0.3, 1]`, used by the informational pages.
    pub const EXPO_OUT: Self = Self::CubicBezier(0.16, 1.0, 0.3, 1.0);

    pub fn css(&self) -> String {
        match self {
            Self::EaseOut => "ease-out".to_string(),
            Self::EaseInOut => "ease-in-out".to_string(),
            Self::CubicBezier(a, b, c, d) => format!("cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

fn ms(d: Duration) -> u128 {
    d.as_millis()
}

/// Staggered reveal of sibling elements once their container is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the container that must be visible, in `[0, 1]`.
    pub threshold: f64,
    pub delay: Duration,
    pub stagger: Duration,
    pub duration: Duration,
    /// Vertical offset in px the children travel from.
    pub distance: f32,
    /// Starting scale; `1.0` disables the scale component.
    pub scale_from: f32,
    pub easing: Easing,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            delay: Duration::ZERO,
            stagger: Duration::from_millis(180),
            duration: Duration::from_millis(800),
            distance: 28.0,
            scale_from: 1.0,
            easing: Easing::SMOOTH,
        }
    }
}

impl RevealConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_scale_from(mut self, scale_from: f32) -> Self {
        self.scale_from = scale_from;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The same config with all motion removed when the user asked for it.
    pub fn effective(&self, preference: MotionPreference) -> Self {
        if preference.is_reduced() {
            Self {
                delay: Duration::ZERO,
                stagger: Duration::ZERO,
                duration: Duration::ZERO,
                distance: 0.0,
                scale_from: 1.0,
                ..*self
            }
        } else {
            *self
        }
    }

    /// Delay before the child at `index` starts moving.
    pub fn delay_for(&self, index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay + self.stagger.saturating_mul(steps)
    }

    /// Inline style for the child at `index`.
    pub fn child_style(&self, index: usize, revealed: bool, preference: MotionPreference) -> String {
        let cfg = self.effective(preference);

        if !revealed {
            return format!(
                "opacity:0;transform:translateY({}px) scale({});",
                cfg.distance, cfg.scale_from
            );
        }

        format!(
            "opacity:1;transform:none;transition:opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            d = ms(cfg.duration),
            e = cfg.easing.css(),
            delay = ms(cfg.delay_for(index)),
        )
    }
}

/// Fade (and optional scale) applied to real content once it is ready.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeInConfig {
    pub duration: Duration,
    pub scale_from: f32,
    pub easing: Easing,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(600),
            scale_from: 1.0,
            easing: Easing::EaseOut,
        }
    }
}

impl FadeInConfig {
    pub fn scaled(duration: Duration, scale_from: f32) -> Self {
        Self {
            duration,
            scale_from,
            ..Self::default()
        }
    }

    pub fn style(&self, ready: bool, preference: MotionPreference) -> String {
        let (duration, scale_from) = if preference.is_reduced() {
            (Duration::ZERO, 1.0)
        } else {
            (self.duration, self.scale_from)
        };

        let (opacity, scale) = if ready { (1, 1.0) } else { (0, scale_from) };

        format!(
            "opacity:{opacity};transform:scale({scale});transition:opacity {d}ms {e}, transform {d}ms {e};",
            d = ms(duration),
            e = self.easing.css(),
        )
    }
}

/// The moving gradient band of a skeleton placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShimmerConfig {
    pub period: Duration,
    pub repeat_delay: Duration,
    pub easing: Easing,
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(1200),
            repeat_delay: Duration::ZERO,
            easing: Easing::EaseInOut,
        }
    }
}

impl ShimmerConfig {
    pub fn with_repeat_delay(mut self, repeat_delay: Duration) -> Self {
        self.repeat_delay = repeat_delay;
        self
    }

    /// Total length of one sweep including the pause, which is what the
    /// `shimmer` keyframes in the stylesheet are timed against.
    pub fn cycle(&self) -> Duration {
        self.period + self.repeat_delay
    }

    /// `None` under reduced motion: the band is not rendered at all.
    pub fn style(&self, preference: MotionPreference) -> Option<String> {
        if preference.is_reduced() {
            return None;
        }

        Some(format!(
            "animation:shimmer {}ms {} infinite;",
            ms(self.cycle()),
            self.easing.css()
        ))
    }
}

/// Exit-then-enter transition between carousel items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossFadeConfig {
    pub enter: Duration,
    pub exit: Duration,
    pub distance: f32,
    pub scale_from: f32,
    pub easing: Easing,
}

impl Default for CrossFadeConfig {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(600),
            exit: Duration::from_millis(400),
            distance: 24.0,
            scale_from: 0.98,
            easing: Easing::SMOOTH,
        }
    }
}

impl CrossFadeConfig {
    pub fn enter_style(&self, preference: MotionPreference) -> String {
        let d = if preference.is_reduced() { Duration::ZERO } else { self.enter };
        format!(
            "animation:carousel-enter {}ms {} both;--carousel-distance:{}px;--carousel-scale:{};",
            ms(d),
            self.easing.css(),
            self.distance,
            self.scale_from
        )
    }

    pub fn exit_style(&self, preference: MotionPreference) -> String {
        let d = if preference.is_reduced() { Duration::ZERO } else { self.exit };
        format!(
            "animation:carousel-exit {}ms {} both;--carousel-distance:{}px;--carousel-scale:{};",
            ms(d),
            self.easing.css(),
            self.distance,
            self.scale_from
        )
    }

    /// How long the outgoing item stays mounted before the next one enters.
    pub fn exit_duration(&self, preference: MotionPreference) -> Duration {
        if preference.is_reduced() { Duration::ZERO } else { self.exit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_collapses_reveal() {
        let cfg = RevealConfig::default()
            .with_delay(Duration::from_millis(100))
            .with_distance(40.0);

        let reduced = cfg.effective(MotionPreference::Reduced);
        assert_eq!(reduced.duration, Duration::ZERO);
        assert_eq!(reduced.delay_for(5), Duration::ZERO);
        assert_eq!(reduced.distance, 0.0);
        assert_eq!(reduced.threshold, cfg.threshold);
    }

    #[test]
    fn stagger_grows_per_child() {
        let cfg = RevealConfig::default()
            .with_delay(Duration::from_millis(100))
            .with_stagger(Duration::from_millis(80));

        assert_eq!(cfg.delay_for(0), Duration::from_millis(100));
        assert_eq!(cfg.delay_for(3), Duration::from_millis(340));
    }

    #[test]
    fn hidden_child_is_transparent_and_offset() {
        let style = RevealConfig::default()
            .with_distance(16.0)
            .child_style(0, false, MotionPreference::Full);
        assert!(style.starts_with("opacity:0;"));
        assert!(style.contains("translateY(16px)"));
    }

    #[test]
    fn shimmer_disabled_under_reduced_motion() {
        let cfg = ShimmerConfig::default().with_repeat_delay(Duration::from_millis(800));
        assert_eq!(cfg.cycle(), Duration::from_millis(2000));
        assert!(cfg.style(MotionPreference::Reduced).is_none());
        assert!(cfg.style(MotionPreference::Full).is_some());
    }

    #[test]
    fn easing_css() {
        assert_eq!(Easing::EaseOut.css(), "ease-out");
        assert_eq!(Easing::SMOOTH.css(), "cubic-bezier(0.22, 1, 0.36, 1)");
    }
}
