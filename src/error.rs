//! Error types for nonofetch library.

use std::io;
use thiserror::Error;

use crate::model::{Dimensions, PuzzleId};

/// Result type alias for nonofetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while acquiring and normalizing a puzzle.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing the normalized document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The size keyword is not one of the recognized size classes.
    #[error("Invalid size class: {0} (expected any, small, medium, large or huge)")]
    InvalidSize(String),

    /// The repository could not be reached or answered with an error.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The puzzle uses a feature the MK format cannot express.
    #[error("Puzzle ID {id} is not supported: the MK format cannot handle blotted clues")]
    UnsupportedPuzzle { id: PuzzleId },

    /// The export does not match the layout its header announces.
    #[error("Malformed export{}: {reason}", context(.id, .dimensions))]
    MalformedExport {
        id: Option<PuzzleId>,
        dimensions: Option<Dimensions>,
        reason: String,
    },

    /// A required metadata element is absent.
    #[error("Puzzle ID {id} metadata has no <{field}> element")]
    MetadataFieldMissing { id: PuzzleId, field: &'static str },

    /// The metadata document could not be decoded.
    #[error("Metadata parsing error: {0}")]
    MetadataParse(String),

    /// The optional attempt ceiling was reached in randomized mode.
    #[error("No supported puzzle found after {attempts} attempts")]
    RetryLimitExceeded { attempts: u32 },
}

impl Error {
    /// Build a `MalformedExport` without puzzle context.
    pub(crate) fn malformed(dimensions: Option<Dimensions>, reason: impl Into<String>) -> Self {
        Error::MalformedExport {
            id: None,
            dimensions,
            reason: reason.into(),
        }
    }

    /// Attach the puzzle identifier to errors raised by the normalizer.
    pub fn with_puzzle(self, puzzle: PuzzleId) -> Self {
        match self {
            Error::MalformedExport {
                id: None,
                dimensions,
                reason,
            } => Error::MalformedExport {
                id: Some(puzzle),
                dimensions,
                reason,
            },
            other => other,
        }
    }
}

fn context(id: &Option<PuzzleId>, dimensions: &Option<Dimensions>) -> String {
    match (id, dimensions) {
        (Some(id), Some(dims)) => format!(
            " (puzzle {}, {} rows x {} columns)",
            id, dims.rows, dims.columns
        ),
        (Some(id), None) => format!(" (puzzle {})", id),
        (None, Some(dims)) => format!(" ({} rows x {} columns)", dims.rows, dims.columns),
        (None, None) => String::new(),
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MetadataParse(err.to_string())
    }
}
