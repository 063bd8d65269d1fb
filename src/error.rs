//! Error types for container extraction.

use std::path::PathBuf;

use crate::result::FailureKind;

/// Errors that can occur while extracting one container.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// No structurally valid frame anywhere in the buffer. Candidates whose declared
    /// size overran the buffer are counted but otherwise treated as absent.
    #[error("no matching signature found")]
    NotFound { truncated_candidates: usize },

    /// Container could not be read or the payload could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory listing failed while enumerating containers.
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Output already exists and the collision policy forbids replacing it.
    #[error("output file already exists: {}", .0.display())]
    Collision(PathBuf),

    /// Container path has no final component to derive an output name from.
    #[error("container path has no file name: {}", .0.display())]
    NoFileName(PathBuf),
}

impl ExtractError {
    /// Coarse classification used in per-file results.
    pub fn kind(&self) -> FailureKind {
        match self {
            ExtractError::NotFound { .. } => FailureKind::NotFound,
            ExtractError::Collision(_) => FailureKind::Collision,
            ExtractError::Io(_) | ExtractError::Walk(_) | ExtractError::NoFileName(_) => {
                FailureKind::Io
            }
        }
    }
}
