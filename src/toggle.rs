//! Hold-to-toggle debouncing.
//!
//! A [`DebouncedToggle`] turns a boolean gesture signal into a one-shot flip:
//! the signal must stay true for the hold duration `D`, and the flip is only
//! honored when the signal is observed inside the firing window
//! `[D, D + ε)`. A poll that skips past the window entirely misses the fire;
//! callers polling at camera rate (well under ε) never hit that case.

use std::time::{Duration, Instant};

use tracing::debug;

/// Where a toggle is in its hold cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldState {
    /// Signal false; no timer running.
    Idle,
    /// Signal continuously true since `since`. `fired` is set once the flip
    /// for this hold has happened.
    Holding { since: Instant, fired: bool },
}

#[derive(Debug, Clone)]
pub struct DebouncedToggle {
    name: &'static str,
    hold: Duration,
    window: Duration,
    state: HoldState,
    value: bool,
}

impl DebouncedToggle {
    pub fn new(name: &'static str, initial: bool, hold: Duration, window: Duration) -> Self {
        Self { name, hold, window, state: HoldState::Idle, value: initial }
    }

    /// Current toggle output.
    pub fn value(&self) -> bool {
        self.value
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == HoldState::Idle
    }

    /// Feed this frame's signal. Returns true exactly when the output flipped.
    pub fn update(&mut self, active: bool, now: Instant) -> bool {
        if !active {
            self.reset();
            return false;
        }

        match self.state {
            HoldState::Idle => {
                debug!(toggle = self.name, "hold started");
                self.state = HoldState::Holding { since: now, fired: false };
                false
            }
            HoldState::Holding { since, fired } => {
                let elapsed = now.saturating_duration_since(since);
                let in_window = elapsed >= self.hold && elapsed < self.hold + self.window;
                if in_window && !fired {
                    self.value = !self.value;
                    self.state = HoldState::Holding { since, fired: true };
                    debug!(toggle = self.name, value = self.value, ?elapsed, "fired");
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Drop any hold in progress.
    pub fn reset(&mut self) {
        if !self.is_idle() {
            debug!(toggle = self.name, "hold cancelled");
        }
        self.state = HoldState::Idle;
    }

    /// Hold progress toward the flip, clamped to 0..=1. Zero when idle.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.state {
            HoldState::Idle => 0.0,
            HoldState::Holding { since, .. } => {
                if self.hold.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(since);
                (elapsed.as_secs_f32() / self.hold.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: Duration = Duration::from_millis(500);
    const EPS: Duration = Duration::from_millis(100);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn toggle() -> DebouncedToggle {
        DebouncedToggle::new("test", false, D, EPS)
    }

    #[test]
    fn test_first_true_starts_hold_without_firing() {
        let mut t = toggle();
        let t0 = Instant::now();
        assert!(!t.update(true, t0));
        assert_eq!(t.state(), HoldState::Holding { since: t0, fired: false });
        assert!(!t.value());
    }

    #[test]
    fn test_fires_once_anywhere_in_window() {
        for poll in [500, 530, 599] {
            let mut t = toggle();
            let t0 = Instant::now();
            t.update(true, t0);
            assert!(!t.update(true, t0 + ms(250)));
            assert!(t.update(true, t0 + ms(poll)), "poll at {poll}ms");
            assert!(t.value());
        }
    }

    #[test]
    fn test_no_second_fire_in_same_hold() {
        let mut t = toggle();
        let t0 = Instant::now();
        t.update(true, t0);
        assert!(t.update(true, t0 + ms(510)));
        assert!(!t.update(true, t0 + ms(511)));
        assert!(!t.update(true, t0 + ms(590)));
        assert!(!t.update(true, t0 + ms(2000)));
        assert!(t.value());
    }

    #[test]
    fn test_release_before_hold_cancels() {
        let mut t = toggle();
        let t0 = Instant::now();
        t.update(true, t0);
        t.update(true, t0 + ms(400));
        assert!(!t.update(false, t0 + ms(450)));
        assert!(t.is_idle());
        // Resumed hold restarts the timer; 520ms after t0 is only 50ms into it.
        assert!(!t.update(true, t0 + ms(470)));
        assert!(!t.update(true, t0 + ms(520)));
        assert!(!t.value());
    }

    #[test]
    fn test_poll_past_window_misses_fire() {
        let mut t = toggle();
        let t0 = Instant::now();
        t.update(true, t0);
        assert!(!t.update(true, t0 + ms(600)));
        assert!(!t.update(true, t0 + ms(700)));
        assert!(!t.value());
    }

    #[test]
    fn test_rehold_fires_again() {
        let mut t = toggle();
        let t0 = Instant::now();
        t.update(true, t0);
        assert!(t.update(true, t0 + ms(550)));
        t.update(false, t0 + ms(700));
        t.update(true, t0 + ms(800));
        assert!(t.update(true, t0 + ms(1350)));
        assert!(!t.value());
    }

    #[test]
    fn test_progress_clamped() {
        let mut t = toggle();
        let t0 = Instant::now();
        assert_eq!(t.progress(t0), 0.0);
        t.update(true, t0);
        assert!((t.progress(t0 + ms(250)) - 0.5).abs() < 1e-3);
        assert_eq!(t.progress(t0 + ms(5000)), 1.0);
        t.reset();
        assert_eq!(t.progress(t0 + ms(5000)), 0.0);
    }
}
