//! Countdown state machine for a single practice timer instance

use serde::Serialize;

/// Phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    /// Not started yet, remaining equals the configured duration
    Idle,
    /// Counting down, one decrement per second
    Running,
    /// Started then halted without resetting the remaining time
    Paused,
    /// Reached zero; stays here until stop or skip
    Expired,
}

/// Outcome of advancing the countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Remaining time went down by one second
    Decremented,
    /// Remaining time reached zero on this tick; the alert must fire once
    Expired,
    /// The timer was not running; nothing changed
    Halted,
}

/// Countdown state for one exercise's practice timer
///
/// Every operation is total: calls that make no sense in the current phase
/// are no-ops. Scheduling lives in the task that owns this state; the
/// machine itself only answers "what happens on the next second".
#[derive(Debug, Clone, Serialize)]
pub struct TimerState {
    configured_seconds: u64,
    remaining_seconds: u64,
    phase: TimerPhase,
    alert_visible: bool,
}

impl TimerState {
    /// Create a fresh timer for the given duration in seconds
    pub fn new(configured_seconds: u64) -> Self {
        Self {
            configured_seconds,
            remaining_seconds: configured_seconds,
            phase: TimerPhase::Idle,
            alert_visible: false,
        }
    }

    /// Begin counting down; only valid from `Idle`
    ///
    /// Returns true when the transition happened and the caller should arm
    /// the one-second ticker.
    pub fn start(&mut self) -> bool {
        if self.phase == TimerPhase::Idle {
            self.phase = TimerPhase::Running;
            true
        } else {
            false
        }
    }

    /// Play/pause toggle: starts from `Idle`, otherwise flips Running/Paused
    pub fn toggle_pause(&mut self) {
        match self.phase {
            TimerPhase::Idle => {
                self.phase = TimerPhase::Running;
            }
            TimerPhase::Running => {
                self.phase = TimerPhase::Paused;
            }
            TimerPhase::Paused => {
                self.phase = TimerPhase::Running;
            }
            TimerPhase::Expired => {}
        }
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != TimerPhase::Running {
            return TickOutcome::Halted;
        }

        if self.remaining_seconds > 1 {
            self.remaining_seconds -= 1;
            TickOutcome::Decremented
        } else {
            self.remaining_seconds = 0;
            self.phase = TimerPhase::Expired;
            self.alert_visible = true;
            TickOutcome::Expired
        }
    }

    /// Reset to `Idle` with the full configured duration
    pub fn stop(&mut self) {
        self.phase = TimerPhase::Idle;
        self.remaining_seconds = self.configured_seconds;
        self.alert_visible = false;
    }

    /// Halt and clear any alert without resetting the remaining time
    ///
    /// The caller is expected to replace this instance with a new duration
    /// afterwards, so the leftover remaining time is never shown again.
    pub fn skip(&mut self) {
        self.phase = TimerPhase::Idle;
        self.alert_visible = false;
    }

    /// Hide the expiry alert; phase and remaining time stay as they are
    pub fn dismiss_alert(&mut self) {
        self.alert_visible = false;
    }

    /// Current phase
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Seconds left on the countdown
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Duration this instance was created with
    pub fn configured_seconds(&self) -> u64 {
        self.configured_seconds
    }

    /// Whether the expiry alert is currently shown
    pub fn alert_visible(&self) -> bool {
        self.alert_visible
    }

    /// True while the one-second ticker should be armed
    pub fn is_ticking(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Fraction of the configured duration already elapsed, 0.0..=1.0
    pub fn elapsed_fraction(&self) -> f64 {
        if self.configured_seconds == 0 {
            return 1.0;
        }
        (self.configured_seconds - self.remaining_seconds) as f64 / self.configured_seconds as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_countdown_expires_after_configured_ticks() {
        let mut timer = TimerState::new(5);
        assert!(timer.start());

        for expected in [4, 3, 2, 1] {
            assert_eq!(timer.tick(), TickOutcome::Decremented);
            assert_eq!(timer.remaining_seconds(), expected);
            assert_eq!(timer.phase(), TimerPhase::Running);
        }

        assert_eq!(timer.tick(), TickOutcome::Expired);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.phase(), TimerPhase::Expired);
        assert!(timer.alert_visible());
    }

    #[test]
    fn ticks_outside_running_change_nothing() {
        let mut timer = TimerState::new(10);
        assert_eq!(timer.tick(), TickOutcome::Halted);
        assert_eq!(timer.remaining_seconds(), 10);

        timer.start();
        timer.tick();
        timer.toggle_pause();
        assert_eq!(timer.phase(), TimerPhase::Paused);
        for _ in 0..5 {
            assert_eq!(timer.tick(), TickOutcome::Halted);
        }
        assert_eq!(timer.remaining_seconds(), 9);

        // expired timers never resume ticking on their own
        let mut expired = TimerState::new(1);
        expired.start();
        expired.tick();
        assert_eq!(expired.tick(), TickOutcome::Halted);
        assert_eq!(expired.remaining_seconds(), 0);
    }

    #[test]
    fn start_is_only_valid_from_idle() {
        let mut timer = TimerState::new(8);
        assert!(timer.start());
        assert!(!timer.start());

        timer.toggle_pause();
        assert!(!timer.start());
        assert_eq!(timer.phase(), TimerPhase::Paused);

        let mut expired = TimerState::new(1);
        expired.start();
        expired.tick();
        assert!(!expired.start());
        assert_eq!(expired.phase(), TimerPhase::Expired);
    }

    #[test]
    fn toggle_pause_starts_an_idle_timer() {
        let mut timer = TimerState::new(3);
        timer.toggle_pause();
        assert_eq!(timer.phase(), TimerPhase::Running);

        timer.toggle_pause();
        assert_eq!(timer.phase(), TimerPhase::Paused);
        timer.toggle_pause();
        assert_eq!(timer.phase(), TimerPhase::Running);
    }

    #[test]
    fn stop_resets_from_any_phase() {
        let mut timer = TimerState::new(6);
        timer.stop();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining_seconds(), 6);

        timer.start();
        timer.tick();
        timer.tick();
        timer.stop();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining_seconds(), 6);

        let mut expired = TimerState::new(1);
        expired.start();
        expired.tick();
        assert!(expired.alert_visible());
        expired.stop();
        assert_eq!(expired.phase(), TimerPhase::Idle);
        assert_eq!(expired.remaining_seconds(), 1);
        assert!(!expired.alert_visible());
    }

    #[test]
    fn skip_clears_alert_but_keeps_remaining() {
        let mut timer = TimerState::new(30);
        timer.start();
        timer.tick();
        timer.tick();
        timer.skip();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining_seconds(), 28);

        let mut expired = TimerState::new(2);
        expired.start();
        expired.tick();
        expired.tick();
        expired.skip();
        assert!(!expired.alert_visible());
        assert_eq!(expired.remaining_seconds(), 0);
    }

    #[test]
    fn dismiss_hides_alert_without_touching_the_countdown() {
        let mut timer = TimerState::new(1);
        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Expired);
        timer.dismiss_alert();
        assert!(!timer.alert_visible());
        assert_eq!(timer.phase(), TimerPhase::Expired);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn elapsed_fraction_tracks_progress() {
        let mut timer = TimerState::new(4);
        assert_eq!(timer.elapsed_fraction(), 0.0);
        timer.start();
        timer.tick();
        assert_eq!(timer.elapsed_fraction(), 0.25);
        timer.tick();
        timer.tick();
        timer.tick();
        assert_eq!(timer.elapsed_fraction(), 1.0);
    }
}
