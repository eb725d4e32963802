use std::time::{Duration, Instant};

/// How long the overlay stays up without input before it fades out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleDurations {
    /// Quiet period at session start.
    pub initial: Duration,
    /// Quiet period after pointer movement or a handled command.
    pub activity: Duration,
    /// Quiet period after the host reports a fullscreen change.
    pub state_change: Duration,
}

impl Default for IdleDurations {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(500),
            activity: Duration::from_millis(1500),
            state_change: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsState {
    Visible,
    Hidden,
}

/// A single cancelable deadline. Scheduling replaces whatever was pending.
#[derive(Debug, Clone, Default)]
struct IdleTimer {
    deadline: Option<Instant>,
}

impl IdleTimer {
    fn schedule(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Consume the deadline if it has passed.
    fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Tracks whether the control overlay is shown and hides it after a quiet period.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    state: ControlsState,
    timer: IdleTimer,
    durations: IdleDurations,
}

impl VisibilityController {
    pub fn new(durations: IdleDurations, now: Instant) -> Self {
        let mut timer = IdleTimer::default();
        timer.schedule(now + durations.initial);
        Self {
            state: ControlsState::Visible,
            timer,
            durations,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state == ControlsState::Visible
    }

    /// A qualifying event: show the controls and restart the idle period.
    pub fn activity(&mut self, now: Instant) {
        self.reveal(now + self.durations.activity);
    }

    /// The host changed presentation state (e.g. fullscreen); show the controls
    /// for the longer state-change period.
    pub fn state_changed(&mut self, now: Instant) {
        self.reveal(now + self.durations.state_change);
    }

    /// Hide the controls if the idle deadline has passed. Returns true when
    /// this call hid them.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.fire_if_due(now) && self.state == ControlsState::Visible {
            self.state = ControlsState::Hidden;
            tracing::trace!("controls hidden after idle period");
            return true;
        }
        false
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline
    }

    /// Drop any pending deadline without touching visibility.
    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    fn reveal(&mut self, deadline: Instant) {
        if self.state == ControlsState::Hidden {
            tracing::trace!("controls shown");
        }
        self.state = ControlsState::Visible;
        self.timer.schedule(deadline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_starts_visible_and_hides_after_initial_period() {
        let t0 = Instant::now();
        let mut vis = VisibilityController::new(IdleDurations::default(), t0);
        assert!(vis.is_visible());
        assert!(!vis.tick(t0 + ms(499)));
        assert!(vis.is_visible());
        assert!(vis.tick(t0 + ms(500)));
        assert!(!vis.is_visible());
        assert_eq!(vis.next_deadline(), None);
    }

    #[test]
    fn test_activity_hides_after_activity_period() {
        let t0 = Instant::now();
        let mut vis = VisibilityController::new(IdleDurations::default(), t0);
        vis.activity(t0 + ms(100));
        assert!(!vis.tick(t0 + ms(600)));
        assert!(vis.is_visible());
        assert!(vis.tick(t0 + ms(1600)));
        assert!(!vis.is_visible());
    }

    #[test]
    fn test_repeated_activity_keeps_controls_visible() {
        let t0 = Instant::now();
        let mut vis = VisibilityController::new(IdleDurations::default(), t0);
        // Events every second never leave a 1.5s gap, and each replaces the
        // pending deadline instead of adding a second one.
        for step in 0..10 {
            let now = t0 + ms(step * 1000);
            vis.activity(now);
            vis.tick(now);
            assert!(vis.is_visible());
            assert_eq!(vis.next_deadline(), Some(now + ms(1500)));
        }
        let last = t0 + ms(9000);
        assert!(!vis.tick(last + ms(1499)));
        assert!(vis.tick(last + ms(1500)));
    }

    #[test]
    fn test_activity_restores_hidden_controls_immediately() {
        let t0 = Instant::now();
        let mut vis = VisibilityController::new(IdleDurations::default(), t0);
        vis.tick(t0 + ms(600));
        assert!(!vis.is_visible());
        vis.activity(t0 + ms(700));
        assert!(vis.is_visible());
    }

    #[test]
    fn test_state_change_uses_longer_period() {
        let t0 = Instant::now();
        let mut vis = VisibilityController::new(IdleDurations::default(), t0);
        vis.tick(t0 + ms(600));
        vis.state_changed(t0 + ms(1000));
        assert!(vis.is_visible());
        assert!(!vis.tick(t0 + ms(3999)));
        assert!(vis.tick(t0 + ms(4000)));
    }

    #[test]
    fn test_cancel_leaves_state_alone() {
        let t0 = Instant::now();
        let mut vis = VisibilityController::new(IdleDurations::default(), t0);
        vis.cancel();
        assert!(!vis.tick(t0 + ms(10_000)));
        assert!(vis.is_visible());
        assert_eq!(vis.next_deadline(), None);
    }

    #[test]
    fn test_custom_durations() {
        let t0 = Instant::now();
        let durations = IdleDurations {
            initial: ms(50),
            activity: ms(100),
            state_change: ms(200),
        };
        let mut vis = VisibilityController::new(durations, t0);
        assert!(vis.tick(t0 + ms(50)));
        vis.activity(t0 + ms(60));
        assert!(vis.tick(t0 + ms(160)));
    }
}
