//! Puzzle identifier selection.

use std::fmt;

use log::debug;

use crate::client::RepositoryClient;
use crate::error::Result;
use crate::model::PuzzleId;
use crate::size::SizeClass;

/// How the puzzle identifier is chosen for an acquisition.
///
/// The mode is fixed for the whole acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Use this identifier on every attempt
    Explicit(PuzzleId),
    /// Ask the repository for a fresh random identifier on every attempt
    Random(SizeClass),
}

impl Selection {
    /// Whether the identifier was supplied by the caller.
    pub fn is_explicit(&self) -> bool {
        matches!(self, Selection::Explicit(_))
    }

    /// Identifier to use for the next attempt.
    ///
    /// In random mode this costs one round trip to the repository.
    pub fn select<C: RepositoryClient + ?Sized>(&self, client: &C) -> Result<PuzzleId> {
        match *self {
            Selection::Explicit(id) => Ok(id),
            Selection::Random(size) => {
                let id = client.random_id(size)?;
                debug!("Repository picked puzzle {} ({} size)", id, size);
                Ok(id)
            }
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Random(SizeClass::default())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Explicit(id) => write!(f, "nonogram {}", id),
            Selection::Random(size) => write!(f, "nonogram in {} size", size),
        }
    }
}
