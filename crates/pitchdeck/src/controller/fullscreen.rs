use crate::error::SurfaceError;

/// The host capability that can enter and leave fullscreen presentation.
pub trait DisplaySurface {
    fn request_fullscreen(&mut self) -> Result<(), SurfaceError>;
    fn exit_fullscreen(&mut self) -> Result<(), SurfaceError>;
    fn is_fullscreen_active(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenState {
    Windowed,
    Fullscreen,
}

impl FullscreenState {
    fn from_active(active: bool) -> Self {
        if active { Self::Fullscreen } else { Self::Windowed }
    }
}

/// Mirrors the host's fullscreen state.
///
/// Requests are fire-and-forget: a refused request is logged and the state is
/// put right by the next host change notification.
#[derive(Debug, Clone)]
pub struct FullscreenController {
    state: FullscreenState,
}

impl Default for FullscreenController {
    fn default() -> Self {
        Self {
            state: FullscreenState::Windowed,
        }
    }
}

impl FullscreenController {
    pub fn new(initially_active: bool) -> Self {
        Self {
            state: FullscreenState::from_active(initially_active),
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.state == FullscreenState::Fullscreen
    }

    pub fn toggle(&mut self, surface: &mut dyn DisplaySurface) -> FullscreenState {
        if self.state == FullscreenState::Windowed && !surface.is_fullscreen_active() {
            if let Err(e) = surface.request_fullscreen() {
                tracing::warn!("could not enter fullscreen: {e}");
            }
            self.state = FullscreenState::Fullscreen;
        } else {
            if let Err(e) = surface.exit_fullscreen() {
                tracing::warn!("could not leave fullscreen: {e}");
            }
            self.state = FullscreenState::Windowed;
        }
        tracing::debug!(state = ?self.state, "fullscreen toggled");
        self.state
    }

    pub fn exit_if_active(&mut self, surface: &mut dyn DisplaySurface) {
        if self.state != FullscreenState::Fullscreen {
            return;
        }
        if let Err(e) = surface.exit_fullscreen() {
            tracing::warn!("could not leave fullscreen: {e}");
        }
        self.state = FullscreenState::Windowed;
    }

    /// Adopt the host's reported state. Returns true if ours was different.
    pub fn on_host_change(&mut self, active: bool) -> bool {
        let reported = FullscreenState::from_active(active);
        let changed = reported != self.state;
        if changed {
            tracing::debug!(state = ?reported, "fullscreen resynchronized from host");
        }
        self.state = reported;
        changed
    }
}

/// Turns a per-frame fullscreen reading into change notifications.
///
/// egui reports the viewport's fullscreen flag on every frame rather than
/// raising an event, so the shell feeds each reading through here.
#[derive(Debug, Clone, Default)]
pub struct HostFullscreenWatch {
    last: Option<bool>,
}

impl HostFullscreenWatch {
    /// Returns `Some(active)` when the reading differs from the previous known
    /// one. The first known reading only seeds the watch.
    pub fn observe(&mut self, reported: Option<bool>) -> Option<bool> {
        let reported = reported?;
        match self.last.replace(reported) {
            Some(previous) if previous != reported => Some(reported),
            _ => None,
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.last.is_some()
    }
}
