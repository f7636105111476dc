//! Rotating showcase state.
//!
//! The carousel is a single piece of mutable state: an active index plus a
//! "paused until" deadline. Transitions take the current instant as an
//! argument so they are deterministic under test.

use std::time::Duration;

use tokio::time::Instant;

/// Timing configuration for the rotating showcase.
///
/// Both values are presentation tuning, supplied by site configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Auto-advance period
    pub interval: Duration,

    /// How long a manual selection suspends auto-advance
    pub cooldown: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(3000),
            cooldown: Duration::from_millis(5000),
        }
    }
}

/// Active-index state of a rotating display over a fixed item list.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    active: usize,
    paused_until: Option<Instant>,
    config: CarouselConfig,
}

impl Carousel {
    /// Create a carousel over `len` items, starting at index 0.
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        Self {
            len,
            active: 0,
            paused_until: None,
            config,
        }
    }

    /// Currently active index.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the carousel has no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Auto-advance period.
    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    /// Whether a manual-selection cooldown is in effect at `now`.
    pub fn is_paused(&self, now: Instant) -> bool {
        self.paused_until.is_some_and(|deadline| now < deadline)
    }

    /// Timer tick: advance to the next index modulo the item count.
    ///
    /// A tick during the cooldown is a no-op. The first tick at or after
    /// the deadline clears the pause and advances from the selected index.
    pub fn tick(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }

        if let Some(deadline) = self.paused_until {
            if now < deadline {
                return;
            }
            self.paused_until = None;
        }

        self.active = (self.active + 1) % self.len;
    }

    /// Manual selection: activate `index` and suspend auto-advance for the
    /// configured cooldown. Out-of-range selections are ignored.
    pub fn select(&mut self, index: usize, now: Instant) {
        if index >= self.len {
            return;
        }

        self.active = index;
        self.paused_until = Some(now + self.config.cooldown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(interval_ms: u64, cooldown_ms: u64) -> CarouselConfig {
        CarouselConfig {
            interval: Duration::from_millis(interval_ms),
            cooldown: Duration::from_millis(cooldown_ms),
        }
    }

    #[test]
    fn ticks_advance_modulo_len() {
        let mut carousel = Carousel::new(3, config(3000, 5000));
        let now = Instant::now();

        carousel.tick(now);
        assert_eq!(carousel.active(), 1);

        carousel.tick(now);
        carousel.tick(now);
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn selection_pauses_then_resumes_after_cooldown() {
        let mut carousel = Carousel::new(3, config(3000, 5000));
        let start = Instant::now();

        carousel.select(2, start);
        assert_eq!(carousel.active(), 2);

        // tick immediately after selection is suppressed
        carousel.tick(start + Duration::from_millis(3000));
        assert_eq!(carousel.active(), 2);
        assert!(carousel.is_paused(start + Duration::from_millis(3000)));

        // first tick past the deadline resumes from the selected index
        carousel.tick(start + Duration::from_millis(6000));
        assert_eq!(carousel.active(), 0);
        assert!(!carousel.is_paused(start + Duration::from_millis(6000)));
    }

    #[test]
    fn tick_exactly_at_deadline_resumes() {
        let mut carousel = Carousel::new(4, config(1000, 2000));
        let start = Instant::now();

        carousel.select(1, start);
        carousel.tick(start + Duration::from_millis(2000));

        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut carousel = Carousel::new(2, CarouselConfig::default());
        let now = Instant::now();

        carousel.select(5, now);

        assert_eq!(carousel.active(), 0);
        assert!(!carousel.is_paused(now));
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0, CarouselConfig::default());
        let now = Instant::now();

        carousel.tick(now);

        assert_eq!(carousel.active(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn reselection_rearms_the_cooldown() {
        let mut carousel = Carousel::new(3, config(1000, 2000));
        let start = Instant::now();

        carousel.select(1, start);
        carousel.select(2, start + Duration::from_millis(1500));

        // old deadline (2000) has passed, new one (3500) has not
        carousel.tick(start + Duration::from_millis(2500));
        assert_eq!(carousel.active(), 2);
    }
}
