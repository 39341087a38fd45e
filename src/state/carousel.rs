use std::time::Duration;

use crate::common::CarouselError;
use crate::motion::MotionPreference;

/// Ordered, non-empty rotation of items with a circular current index.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
    paused: bool,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }

        Ok(Self {
            items,
            current: 0,
            paused: false,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a carousel built through [`Carousel::new`].
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.items.len();
    }

    pub fn retreat(&mut self) {
        let len = self.items.len();
        self.current = (self.current + len - 1) % len;
    }

    /// Jump to `index`. Out-of-range indices are ignored and return `false`.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Autoplay step: advances unless paused. Returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.advance();
        true
    }
}

/// Autoplay timing for a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub interval: Duration,
    /// Interval under reduced motion; `None` turns autoplay off entirely.
    pub reduced_interval: Option<Duration>,
}

impl AutoplayConfig {
    pub const fn new(interval: Duration, reduced_interval: Option<Duration>) -> Self {
        Self {
            interval,
            reduced_interval,
        }
    }

    pub fn interval_for(&self, preference: MotionPreference) -> Option<Duration> {
        match preference {
            MotionPreference::Full => Some(self.interval),
            MotionPreference::Reduced => self.reduced_interval,
        }
    }
}
