use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("slide index {index} is out of range (deck has {total} slides)")]
    InvalidIndex { index: usize, total: usize },
}

/// Errors reported by a display surface when it refuses a fullscreen request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("fullscreen request refused: {0}")]
    Refused(String),
}

/// A slide position whose content could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("slide {} not found at {}", .index + 1, .path.display())]
    NotFound { index: usize, path: PathBuf },

    #[error("slide {} at {} is malformed: {reason}", .index + 1, .path.display())]
    Malformed {
        index: usize,
        path: PathBuf,
        reason: String,
    },
}

impl LoadFailure {
    pub fn index(&self) -> usize {
        match self {
            Self::NotFound { index, .. } | Self::Malformed { index, .. } => *index,
        }
    }
}
