// ⏱️ Rotation Scheduler + Pause Controller
//
// The rotation ticks on a fixed interval after an initial delay, exactly one
// tick per interval. The pause gate suspends ticking while the pointer hovers
// the grid or the tab is hidden; a paused interval is simply skipped, it is
// never replayed later (no burst of catch-up rotations on resume).

use crate::rotation::{INITIAL_DELAY_MS, ROTATION_INTERVAL_MS};
use std::time::{Duration, Instant};

// ============================================================================
// PAUSE GATE
// ============================================================================

/// Boolean gate checked by the scheduler before each tick.
///
/// Not a concurrency primitive: all updates and reads happen on the single
/// event thread.
#[derive(Debug, Clone, Default)]
pub struct PauseGate {
    hovered: bool,
    page_hidden: bool,
}

impl PauseGate {
    pub fn new() -> Self {
        PauseGate::default()
    }

    /// Pointer entered the grid region
    pub fn pointer_entered(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the grid region
    pub fn pointer_left(&mut self) {
        self.hovered = false;
    }

    /// Page visibility changed (tab switched away / back)
    pub fn visibility_changed(&mut self, hidden: bool) {
        self.page_hidden = hidden;
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.page_hidden
    }
}

// ============================================================================
// ROTATION SCHEDULER
// ============================================================================

/// Fires at most once per interval against a monotonic clock.
#[derive(Debug, Clone)]
pub struct RotationScheduler {
    interval: Duration,
    next_due: Instant,
}

impl RotationScheduler {
    /// Production timing: first tick fires one interval after the initial
    /// delay has elapsed.
    pub fn new(start: Instant) -> Self {
        Self::with_timing(
            start,
            Duration::from_millis(INITIAL_DELAY_MS),
            Duration::from_millis(ROTATION_INTERVAL_MS),
        )
    }

    pub fn with_timing(start: Instant, initial_delay: Duration, interval: Duration) -> Self {
        RotationScheduler {
            interval,
            next_due: start + initial_delay + interval,
        }
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Check whether a tick should run now.
    ///
    /// When a due time has passed the schedule advances past `now` in whole
    /// intervals (so a long pause or background tab produces one tick at
    /// most, not a backlog), and the tick runs only if the gate is open.
    pub fn poll(&mut self, now: Instant, gate: &PauseGate) -> bool {
        if now < self.next_due {
            return false;
        }

        while self.next_due <= now {
            self.next_due += self.interval;
        }

        !gate.is_paused()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler(start: Instant) -> RotationScheduler {
        RotationScheduler::with_timing(
            start,
            Duration::from_millis(100),
            Duration::from_millis(1000),
        )
    }

    #[test]
    fn test_no_tick_before_initial_delay_plus_interval() {
        let start = Instant::now();
        let mut sched = scheduler(start);
        let gate = PauseGate::new();

        assert!(!sched.poll(start, &gate));
        assert!(!sched.poll(start + Duration::from_millis(500), &gate));
        assert!(!sched.poll(start + Duration::from_millis(1099), &gate));
    }

    #[test]
    fn test_one_tick_per_interval() {
        let start = Instant::now();
        let mut sched = scheduler(start);
        let gate = PauseGate::new();

        assert!(sched.poll(start + Duration::from_millis(1100), &gate));
        // Same moment again: already consumed
        assert!(!sched.poll(start + Duration::from_millis(1100), &gate));
        // Next interval
        assert!(sched.poll(start + Duration::from_millis(2100), &gate));
    }

    #[test]
    fn test_paused_interval_is_skipped_not_replayed() {
        let start = Instant::now();
        let mut sched = scheduler(start);
        let mut gate = PauseGate::new();

        gate.pointer_entered();
        assert!(!sched.poll(start + Duration::from_millis(1100), &gate));

        // Unpause just after: the skipped interval is gone, the next due
        // time is a full interval later
        gate.pointer_left();
        assert!(!sched.poll(start + Duration::from_millis(1200), &gate));
        assert!(sched.poll(start + Duration::from_millis(2100), &gate));
    }

    #[test]
    fn test_long_background_stretch_yields_single_tick() {
        let start = Instant::now();
        let mut sched = scheduler(start);
        let gate = PauseGate::new();

        // 10 intervals elapse without polling (tab in background)
        assert!(sched.poll(start + Duration::from_millis(10_500), &gate));
        // No backlog burst
        assert!(!sched.poll(start + Duration::from_millis(10_501), &gate));
    }

    #[test]
    fn test_gate_pauses_on_hover_and_hidden_page() {
        let mut gate = PauseGate::new();
        assert!(!gate.is_paused());

        gate.pointer_entered();
        assert!(gate.is_paused());
        gate.pointer_left();
        assert!(!gate.is_paused());

        gate.visibility_changed(true);
        assert!(gate.is_paused());

        // Hover + hidden at once: still paused after only one clears
        gate.pointer_entered();
        gate.visibility_changed(false);
        assert!(gate.is_paused());
        gate.pointer_left();
        assert!(!gate.is_paused());
    }
}
