use std::time::{Duration, Instant};

use crate::controller::navigation::SlideChange;

pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// Cubic ease-in-out over `t` in `0..=1`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Cross-fade between the slides of one change.
#[derive(Debug, Clone, Copy)]
pub struct Crossfade {
    pub change: SlideChange,
    started: Instant,
    duration: Duration,
}

impl Crossfade {
    pub fn new(change: SlideChange, now: Instant) -> Self {
        Self {
            change,
            started: now,
            duration: FADE_DURATION,
        }
    }

    /// Eased progress, 0 at the start and 1 once finished.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        ease_in_out(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Opacity of the slide at `index` this frame.
pub fn slide_opacity(index: usize, current: usize, fade: Option<&Crossfade>, now: Instant) -> f32 {
    match fade {
        Some(fade) => {
            let p = fade.progress(now);
            if index == fade.change.to {
                p
            } else if index == fade.change.from {
                1.0 - p
            } else {
                0.0
            }
        }
        None if index == current => 1.0,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(3.0), 1.0);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_crossfade_opacities() {
        let t0 = Instant::now();
        let fade = Crossfade::new(SlideChange { from: 0, to: 1 }, t0);

        assert_eq!(slide_opacity(0, 1, Some(&fade), t0), 1.0);
        assert_eq!(slide_opacity(1, 1, Some(&fade), t0), 0.0);

        let mid = t0 + FADE_DURATION / 2;
        let from = slide_opacity(0, 1, Some(&fade), mid);
        let to = slide_opacity(1, 1, Some(&fade), mid);
        assert!((from + to - 1.0).abs() < 1e-6);
        assert_eq!(slide_opacity(2, 1, Some(&fade), mid), 0.0);

        let end = t0 + FADE_DURATION;
        assert!(fade.is_done(end));
        assert!(!fade.is_done(mid));
        assert_eq!(slide_opacity(1, 1, Some(&fade), end), 1.0);
    }

    #[test]
    fn test_without_fade_only_current_is_opaque() {
        let now = Instant::now();
        assert_eq!(slide_opacity(2, 2, None, now), 1.0);
        assert_eq!(slide_opacity(1, 2, None, now), 0.0);
    }
}
