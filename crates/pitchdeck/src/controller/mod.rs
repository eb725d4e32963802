pub mod fullscreen;
pub mod input;
pub mod navigation;
pub mod visibility;

use std::time::Instant;

use fullscreen::FullscreenController;
use navigation::Navigator;
use visibility::{IdleDurations, VisibilityController};

/// The three presentation controllers of one viewing session.
#[derive(Debug, Clone)]
pub struct Session {
    pub navigation: Navigator,
    pub visibility: VisibilityController,
    pub fullscreen: FullscreenController,
}

impl Session {
    pub fn new(
        total: usize,
        start: usize,
        idle: IdleDurations,
        fullscreen_active: bool,
        now: Instant,
    ) -> Self {
        Self {
            navigation: Navigator::starting_at(total, start),
            visibility: VisibilityController::new(idle, now),
            fullscreen: FullscreenController::new(fullscreen_active),
        }
    }

    /// The host reported a fullscreen change, whoever caused it.
    pub fn on_host_fullscreen_change(&mut self, active: bool, now: Instant) {
        self.fullscreen.on_host_change(active);
        self.visibility.state_changed(now);
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.visibility.tick(now)
    }

    pub fn teardown(&mut self) {
        self.visibility.cancel();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::fullscreen::DisplaySurface;
    use crate::error::SurfaceError;

    /// In-memory display surface that records requests.
    #[derive(Debug, Default)]
    pub struct FakeSurface {
        pub active: bool,
        pub refuse: bool,
        pub requests: usize,
        pub exits: usize,
    }

    impl DisplaySurface for FakeSurface {
        fn request_fullscreen(&mut self) -> Result<(), SurfaceError> {
            self.requests += 1;
            if self.refuse {
                return Err(SurfaceError::Refused("no user gesture".to_string()));
            }
            self.active = true;
            Ok(())
        }

        fn exit_fullscreen(&mut self) -> Result<(), SurfaceError> {
            self.exits += 1;
            if self.refuse {
                return Err(SurfaceError::Refused("no user gesture".to_string()));
            }
            self.active = false;
            Ok(())
        }

        fn is_fullscreen_active(&self) -> bool {
            self.active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_host_change_resyncs_and_reveals_controls() {
        let t0 = Instant::now();
        let mut session = Session::new(3, 0, IdleDurations::default(), true, t0);
        assert!(session.fullscreen.is_fullscreen());
        session.tick(t0 + Duration::from_secs(1));
        assert!(!session.visibility.is_visible());

        session.on_host_fullscreen_change(false, t0 + Duration::from_secs(2));
        assert!(!session.fullscreen.is_fullscreen());
        assert!(session.visibility.is_visible());
        assert_eq!(
            session.visibility.next_deadline(),
            Some(t0 + Duration::from_secs(5))
        );
    }

    #[test]
    fn test_teardown_cancels_idle_timer() {
        let t0 = Instant::now();
        let mut session = Session::new(3, 0, IdleDurations::default(), false, t0);
        session.teardown();
        assert_eq!(session.visibility.next_deadline(), None);
        assert!(!session.tick(t0 + Duration::from_secs(60)));
    }
}
