//! Loading-screen progress sequencer.
//!
//! Drives a bounded 0..=100 progress value, one step per fixed tick. The
//! rendering shell converts wall-clock time into ticks and drops the
//! sequencer together with the loading screen, so no tick can ever land on a
//! torn-down owner.

use std::time::Duration;

/// Wall-clock interval between progress steps.
pub const TICK_INTERVAL: Duration = Duration::from_millis(40);

/// Number of steps from empty to full.
pub const STEPS: u32 = 100;

/// Monotonically increasing 0..=100 progress counter.
///
/// `tick()` at the terminal value is a no-op, so a stray extra tick can
/// neither overflow nor regress the value.
#[derive(Debug, Clone)]
pub struct ProgressSequencer {
    value: u32,
}

impl ProgressSequencer {
    pub fn new() -> Self {
        Self { value: 0 }
    }

    /// Advance one step. Returns `true` while the sequence is still running,
    /// `false` once the terminal value has been reached (including the tick
    /// that reaches it).
    pub fn tick(&mut self) -> bool {
        if self.value >= STEPS {
            return false;
        }
        self.value += 1;
        self.value < STEPS
    }

    /// Current progress in 0..=100.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Progress as a 0.0..=1.0 fraction, for `egui::ProgressBar`.
    pub fn fraction(&self) -> f32 {
        self.value as f32 / STEPS as f32
    }

    pub fn is_complete(&self) -> bool {
        self.value >= STEPS
    }

    /// Deterministic wall time from start to completion: one tick per step.
    pub fn total_duration() -> Duration {
        TICK_INTERVAL * STEPS
    }
}

impl Default for ProgressSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_terminal_exactly_once() {
        let mut seq = ProgressSequencer::new();
        let mut prev = seq.value();
        let mut running_ticks = 0;
        for _ in 0..STEPS * 2 {
            seq.tick();
            assert!(seq.value() >= prev, "progress must never decrease");
            assert!(seq.value() <= STEPS, "progress must never exceed {STEPS}");
            prev = seq.value();
            if !seq.is_complete() {
                running_ticks += 1;
            }
        }
        assert_eq!(seq.value(), STEPS);
        assert!(seq.is_complete());
        assert_eq!(running_ticks, (STEPS - 1) as usize);
    }

    #[test]
    fn tick_is_noop_after_completion() {
        let mut seq = ProgressSequencer::new();
        while seq.tick() {}
        assert_eq!(seq.value(), STEPS);
        assert!(!seq.tick());
        assert!(!seq.tick());
        assert_eq!(seq.value(), STEPS);
    }

    #[test]
    fn tick_return_signals_running_state() {
        let mut seq = ProgressSequencer::new();
        assert!(seq.tick()); // 1, still running
        for _ in 1..STEPS - 1 {
            seq.tick();
        }
        assert_eq!(seq.value(), STEPS - 1);
        assert!(!seq.tick()); // the tick that reaches 100 reports done
    }

    #[test]
    fn total_duration_is_interval_times_steps() {
        assert_eq!(
            ProgressSequencer::total_duration(),
            Duration::from_millis(4000)
        );
    }

    #[test]
    fn fraction_tracks_value() {
        let mut seq = ProgressSequencer::new();
        assert_eq!(seq.fraction(), 0.0);
        for _ in 0..50 {
            seq.tick();
        }
        assert!((seq.fraction() - 0.5).abs() < f32::EPSILON);
    }
}
