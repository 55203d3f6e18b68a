//! Repository client abstraction.
//!
//! Provides a trait-based interface to the remote puzzle repository,
//! isolating the HTTP transport from the acquisition logic so the retry
//! controller can be driven by scripted responses.

mod config;
#[cfg(feature = "http")]
mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
#[cfg(feature = "http")]
pub use http::WebpbnClient;

use crate::error::Result;
use crate::model::PuzzleId;
use crate::size::SizeClass;

/// Abstract interface to the puzzle repository.
///
/// All requests block until the repository answers. Failures are reported
/// as [`Error::Transport`](crate::Error::Transport) and are never retried by
/// the caller.
pub trait RepositoryClient {
    /// Ask the repository to pick a random puzzle of the given size class.
    fn random_id(&self, size: SizeClass) -> Result<PuzzleId>;

    /// Fetch the MK export of a puzzle as raw text.
    fn fetch_export(&self, id: PuzzleId) -> Result<String>;

    /// Fetch the XML metadata document of a puzzle.
    fn fetch_metadata(&self, id: PuzzleId) -> Result<String>;
}

impl<C: RepositoryClient + ?Sized> RepositoryClient for &C {
    fn random_id(&self, size: SizeClass) -> Result<PuzzleId> {
        (**self).random_id(size)
    }

    fn fetch_export(&self, id: PuzzleId) -> Result<String> {
        (**self).fetch_export(id)
    }

    fn fetch_metadata(&self, id: PuzzleId) -> Result<String> {
        (**self).fetch_metadata(id)
    }
}
