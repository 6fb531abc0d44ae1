//! Explicit time for the sample drivers.
//!
//! Wall-clock never reaches the mapping functions. Drivers advance a
//! [`SampleClock`] themselves (from measured elapsed time in live mode, from
//! recorded timestamps in replay) and ask the [`UpdatePacer`] whether an
//! acceleration-derived update may run yet.

use crate::PacingConfig;

/// Monotonic driver-owned time in seconds.
#[derive(Debug, Default, Clone)]
pub struct SampleClock {
    pub time_seconds: f32,
}

impl SampleClock {
    pub fn reset(&mut self) {
        self.time_seconds = 0.0;
    }

    pub fn advance(&mut self, delta: f32) {
        self.time_seconds = (self.time_seconds + delta).max(0.0);
    }
}

/// Minimum-interval throttle for acceleration-derived color updates.
///
/// Light and proximity readings are never paced; only the acceleration fold
/// is limited, to at most one update per interval.
#[derive(Debug, Clone)]
pub struct UpdatePacer {
    min_interval_seconds: f32,
    last_admitted: Option<f32>,
}

impl UpdatePacer {
    pub fn new(min_interval_seconds: f32) -> Self {
        Self {
            min_interval_seconds: min_interval_seconds.max(0.0),
            last_admitted: None,
        }
    }

    pub fn from_config(config: &PacingConfig) -> Self {
        Self::new(config.min_interval_seconds)
    }

    /// Admits the update when no update has run yet or the interval has
    /// elapsed since the last admitted one. Rejected updates do not push the
    /// window forward.
    pub fn admit(&mut self, now_seconds: f32) -> bool {
        match self.last_admitted {
            Some(last) if now_seconds - last < self.min_interval_seconds => false,
            _ => {
                self.last_admitted = Some(now_seconds);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_admitted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_is_always_admitted() {
        let mut pacer = UpdatePacer::new(0.015);
        assert!(pacer.admit(0.0));
    }

    #[test]
    fn updates_inside_the_interval_are_rejected() {
        let mut pacer = UpdatePacer::new(0.015);
        assert!(pacer.admit(0.0));
        assert!(!pacer.admit(0.005));
        assert!(!pacer.admit(0.0149));
        assert!(pacer.admit(0.015));
    }

    #[test]
    fn rejected_updates_do_not_move_the_window() {
        let mut pacer = UpdatePacer::new(1.0);
        assert!(pacer.admit(0.0));
        assert!(!pacer.admit(0.9));
        // Still measured from 0.0, not from the rejected 0.9.
        assert!(pacer.admit(1.0));
    }

    #[test]
    fn interval_is_configurable() {
        let mut fast = UpdatePacer::from_config(&PacingConfig {
            min_interval_seconds: 0.001,
        });
        assert!(fast.admit(0.0));
        assert!(fast.admit(0.002));
    }

    #[test]
    fn reset_reopens_the_window() {
        let mut pacer = UpdatePacer::new(10.0);
        assert!(pacer.admit(0.0));
        pacer.reset();
        assert!(pacer.admit(0.1));
    }

    #[test]
    fn clock_advances_monotonically_and_clamps_at_zero() {
        let mut clock = SampleClock::default();
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.time_seconds - 0.75).abs() < f32::EPSILON);

        clock.advance(-5.0);
        assert_eq!(clock.time_seconds, 0.0);

        clock.advance(1.0);
        clock.reset();
        assert_eq!(clock.time_seconds, 0.0);
    }
}
