use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A completed move between two slide positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

impl SlideChange {
    pub fn direction(&self) -> Direction {
        if self.to >= self.from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Owns the current slide position of a deck with a fixed slide count.
///
/// Every transition clamps at the ends of the deck; nothing wraps around.
/// Operations return `Some(SlideChange)` only when the position actually moved.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: usize,
    total: usize,
}

impl Navigator {
    /// Start at `start`, clamped into the deck.
    pub fn starting_at(total: usize, start: usize) -> Self {
        Self {
            current: start.min(total.saturating_sub(1)),
            total,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total
    }

    pub fn next(&mut self) -> Option<SlideChange> {
        if self.current + 1 < self.total {
            self.move_to(self.current + 1)
        } else {
            None
        }
    }

    pub fn previous(&mut self) -> Option<SlideChange> {
        if self.current > 0 && self.total > 0 {
            self.move_to(self.current - 1)
        } else {
            None
        }
    }

    /// Jump to `index`. Out-of-range requests are rejected and leave the
    /// position unchanged.
    pub fn go_to(&mut self, index: usize) -> Option<SlideChange> {
        match self.try_go_to(index) {
            Ok(change) => change,
            Err(e) => {
                tracing::debug!("ignoring navigation request: {e}");
                None
            }
        }
    }

    pub fn try_go_to(&mut self, index: usize) -> Result<Option<SlideChange>, NavigationError> {
        if index >= self.total {
            return Err(NavigationError::InvalidIndex {
                index,
                total: self.total,
            });
        }
        Ok(self.move_to(index))
    }

    pub fn go_to_first(&mut self) -> Option<SlideChange> {
        if self.total == 0 {
            return None;
        }
        self.move_to(0)
    }

    pub fn go_to_last(&mut self) -> Option<SlideChange> {
        if self.total == 0 {
            return None;
        }
        self.move_to(self.total - 1)
    }

    fn move_to(&mut self, to: usize) -> Option<SlideChange> {
        let from = self.current;
        if from == to {
            return None;
        }
        self.current = to;
        tracing::trace!(from, to, "slide changed");
        Some(SlideChange { from, to })
    }
}
