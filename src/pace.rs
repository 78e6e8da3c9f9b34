use std::time::Duration;

use crate::config::{MAX_RUNTIME_TICK_RATE, SPEED_UP_SCALE};

/// Ticks per second driving the presentation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRate {
    per_second: f64,
}

impl TickRate {
    /// Wraps an already validated, positive rate.
    #[must_use]
    pub fn new(per_second: f64) -> Self {
        debug_assert!(per_second > 0.0);
        Self { per_second }
    }

    #[must_use]
    pub fn per_second(self) -> f64 {
        self.per_second
    }

    /// Time between two ticks.
    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_secs_f64(1.0 / self.per_second)
    }

    /// Adds one tick per second unless that would pass the runtime maximum.
    pub fn speed_up(&mut self) {
        if self.per_second + 1.0 <= MAX_RUNTIME_TICK_RATE {
            self.per_second += 1.0;
        }
    }

    /// Removes one tick per second unless that would stop the game.
    pub fn slow_down(&mut self) {
        if self.per_second - 1.0 > 0.0 {
            self.per_second -= 1.0;
        }
    }

    /// Applies the small per-food acceleration.
    pub fn scale_after_food(&mut self) {
        self.per_second *= SPEED_UP_SCALE;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::TickRate;

    #[test]
    fn interval_is_reciprocal_of_rate() {
        assert_eq!(TickRate::new(4.0).interval(), Duration::from_millis(250));
    }

    #[test]
    fn speed_up_stops_at_runtime_maximum() {
        let mut rate = TickRate::new(31.5);

        rate.speed_up();
        assert_eq!(rate.per_second(), 31.5);

        let mut rate = TickRate::new(30.0);
        rate.speed_up();
        assert_eq!(rate.per_second(), 31.0);
    }

    #[test]
    fn slow_down_never_reaches_zero() {
        let mut rate = TickRate::new(1.5);

        rate.slow_down();
        assert_eq!(rate.per_second(), 0.5);

        rate.slow_down();
        assert_eq!(rate.per_second(), 0.5);
    }

    #[test]
    fn scale_after_food_accelerates_slightly() {
        let mut rate = TickRate::new(10.0);

        rate.scale_after_food();

        assert!((rate.per_second() - 10.065).abs() < 1e-9);
    }
}
