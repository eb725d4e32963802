use std::time::Instant;

use eframe::egui;

use super::Session;
use super::fullscreen::DisplaySurface;
use super::navigation::SlideChange;

/// A discrete user command, already detached from the host event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(egui::Key),
    PointerMoved,
    /// Click on a slide indicator.
    SelectSlide(usize),
    PreviousButton,
    NextButton,
    FullscreenButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The command was acted on; the host must not apply its own default.
    Handled,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routed {
    pub disposition: Disposition,
    pub change: Option<SlideChange>,
}

impl Routed {
    fn handled(change: Option<SlideChange>) -> Self {
        Self {
            disposition: Disposition::Handled,
            change,
        }
    }

    fn ignored() -> Self {
        Self {
            disposition: Disposition::Ignored,
            change: None,
        }
    }

    pub fn is_handled(&self) -> bool {
        self.disposition == Disposition::Handled
    }
}

/// Every key the router may act on.
pub const BOUND_KEYS: [egui::Key; 8] = [
    egui::Key::ArrowRight,
    egui::Key::Space,
    egui::Key::ArrowLeft,
    egui::Key::Home,
    egui::Key::End,
    egui::Key::F,
    egui::Key::F11,
    egui::Key::Escape,
];

/// Apply one input to the session.
pub fn route(
    session: &mut Session,
    input: Input,
    surface: &mut dyn DisplaySurface,
    now: Instant,
) -> Routed {
    let routed = match input {
        Input::PointerMoved => {
            session.visibility.activity(now);
            return Routed::handled(None);
        }
        Input::Key(key) => route_key(session, key, surface),
        Input::SelectSlide(index) => Routed::handled(session.navigation.go_to(index)),
        Input::PreviousButton => Routed::handled(session.navigation.previous()),
        Input::NextButton => Routed::handled(session.navigation.next()),
        Input::FullscreenButton => {
            session.fullscreen.toggle(surface);
            Routed::handled(None)
        }
    };

    if routed.is_handled() {
        session.visibility.activity(now);
    }
    routed
}

fn route_key(session: &mut Session, key: egui::Key, surface: &mut dyn DisplaySurface) -> Routed {
    let nav = &mut session.navigation;
    match key {
        egui::Key::ArrowRight | egui::Key::Space => Routed::handled(nav.next()),
        egui::Key::ArrowLeft => Routed::handled(nav.previous()),
        egui::Key::Home => Routed::handled(nav.go_to_first()),
        egui::Key::End => Routed::handled(nav.go_to_last()),
        egui::Key::F | egui::Key::F11 => {
            session.fullscreen.toggle(surface);
            Routed::handled(None)
        }
        egui::Key::Escape if session.fullscreen.is_fullscreen() => {
            session.fullscreen.exit_if_active(surface);
            Routed::handled(None)
        }
        _ => Routed::ignored(),
    }
}
