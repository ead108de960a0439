// SPDX-License-Identifier: MPL-2.0
//! Simulated generation progress.
//!
//! The backend has no progress channel, so the studio animates an estimate
//! while a request is outstanding. The estimate decelerates as it grows and
//! stops at [`CEILING`]; only a real success response moves it to
//! [`COMPLETE`].

use std::time::Duration;

/// Interval between two progress ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Highest value the simulation can reach on its own.
pub const CEILING: f32 = 95.0;

/// Value shown once the backend reports success.
pub const COMPLETE: f32 = 100.0;

/// Increment applied by one tick at the given value.
#[must_use]
pub fn step_for(value: f32) -> f32 {
    if value < 50.0 {
        3.0
    } else if value < 80.0 {
        1.5
    } else {
        0.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    value: f32,
    completed: bool,
}

impl Progress {
    /// Advances the estimate by one tick. No-op once completed.
    pub fn tick(&mut self) {
        if self.completed {
            return;
        }
        self.value = (self.value + step_for(self.value)).min(CEILING);
    }

    /// Marks the real completion signal.
    pub fn complete(&mut self) {
        self.value = COMPLETE;
        self.completed = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current value in `[0, 100]`.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whether [`Progress::complete`] has been called since the last reset.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Value rounded for display.
    #[must_use]
    pub fn percent(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // value is clamped to [0, 100]
        {
            self.value.round().clamp(0.0, COMPLETE) as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_decelerates() {
        assert_eq!(step_for(0.0), 3.0);
        assert_eq!(step_for(49.0), 3.0);
        assert_eq!(step_for(50.0), 1.5);
        assert_eq!(step_for(79.5), 1.5);
        assert_eq!(step_for(80.0), 0.5);
        assert_eq!(step_for(94.5), 0.5);
    }

    #[test]
    fn ticks_never_reach_completion() {
        let mut progress = Progress::default();
        let mut previous = progress.value();
        for _ in 0..1_000 {
            progress.tick();
            assert!(progress.value() >= previous);
            assert!(progress.value() < COMPLETE);
            previous = progress.value();
        }
        assert_eq!(progress.value(), CEILING);
    }

    #[test]
    fn first_ticks_follow_fast_phase() {
        let mut progress = Progress::default();
        progress.tick();
        progress.tick();
        assert_eq!(progress.value(), 6.0);
    }

    #[test]
    fn complete_is_sticky_until_reset() {
        let mut progress = Progress::default();
        progress.tick();
        progress.complete();
        progress.tick();
        assert_eq!(progress.value(), COMPLETE);
        assert!(progress.is_complete());
        assert_eq!(progress.percent(), 100);

        progress.reset();
        assert_eq!(progress.value(), 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn percent_rounds() {
        let mut progress = Progress::default();
        for _ in 0..17 {
            progress.tick();
        }
        // 16 fast ticks reach 48, the 17th reaches 51
        assert_eq!(progress.value(), 51.0);
        progress.tick();
        assert_eq!(progress.percent(), 53); // 52.5 rounds away from zero
    }
}
