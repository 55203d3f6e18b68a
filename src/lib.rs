//! # nonofetch
//!
//! Fetch nonogram puzzles from the webpbn.com repository and rewrite them
//! into the line-based layout read by a local grid renderer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nonofetch::{Nonofetch, SizeClass, WebpbnClient};
//!
//! fn main() -> nonofetch::Result<()> {
//!     let client = WebpbnClient::new()?;
//!
//!     // Pick a random medium puzzle, skipping ones the MK format can't express
//!     let report = Nonofetch::new()
//!         .with_size(SizeClass::Medium)
//!         .fetch_to(&client, "puzzle.non")?;
//!
//!     println!("{} by {}", report.metadata.title, report.metadata.author);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Selection**: an explicit puzzle ID, or a fresh random ID per attempt
//! - **Validation**: exports with blotted clues are rejected (and retried in
//!   random mode)
//! - **Normalization**: the MK export is re-laid out for the renderer
//! - **Output**: the normalized document is written to disk
//! - **Metadata**: title, author and description are fetched for display

pub mod acquire;
pub mod client;
pub mod error;
pub mod metadata;
pub mod model;
pub mod normalize;
pub mod output;
pub mod size;
pub mod validate;

// Re-export commonly used types
pub use acquire::{acquire, acquire_with, AcquireEvent, Acquisition, FetchOptions, Selection};
#[cfg(feature = "http")]
pub use client::WebpbnClient;
pub use client::{ClientConfig, RepositoryClient};
pub use error::{Error, Result};
pub use metadata::{fetch_metadata, parse_metadata};
pub use model::{Dimensions, NormalizedDocument, PuzzleId, PuzzleMetadata};
pub use normalize::normalize;
pub use output::write_document;
pub use size::SizeClass;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Normalize an MK export saved on disk.
///
/// # Example
///
/// ```no_run
/// use nonofetch::normalize_file;
///
/// let doc = normalize_file("webpbn001792.mk").unwrap();
/// println!("{}", doc.as_str());
/// ```
pub fn normalize_file<P: AsRef<Path>>(path: P) -> Result<NormalizedDocument> {
    let raw = fs::read_to_string(path)?;
    normalize(&raw)
}

/// Fetch a random puzzle of the given size class into `path`.
///
/// # Example
///
/// ```no_run
/// use nonofetch::{fetch_random, SizeClass};
///
/// let report = fetch_random(SizeClass::Small, "puzzle.non").unwrap();
/// println!("ID: {}", report.metadata.id);
/// ```
#[cfg(feature = "http")]
pub fn fetch_random<P: AsRef<Path>>(size: SizeClass, path: P) -> Result<FetchReport> {
    let client = WebpbnClient::new()?;
    Nonofetch::new().with_size(size).fetch_to(&client, path)
}

/// Fetch a specific puzzle into `path`.
#[cfg(feature = "http")]
pub fn fetch_puzzle<P: AsRef<Path>>(id: PuzzleId, path: P) -> Result<FetchReport> {
    let client = WebpbnClient::new()?;
    Nonofetch::new().with_id(id).fetch_to(&client, path)
}

/// Builder for acquiring, normalizing and saving a puzzle.
///
/// # Example
///
/// ```no_run
/// use nonofetch::{Nonofetch, PuzzleId, WebpbnClient};
///
/// let client = WebpbnClient::new()?;
/// let report = Nonofetch::new()
///     .with_id(PuzzleId::new(1792))
///     .fetch_to(&client, "puzzle.non")?;
/// println!("Size: {}", report.dimensions);
/// # Ok::<(), nonofetch::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Nonofetch {
    options: FetchOptions,
}

impl Nonofetch {
    /// Create a new builder (random puzzle of any size, unlimited retries).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from existing options.
    pub fn with_options(options: FetchOptions) -> Self {
        Self { options }
    }

    /// Fetch this puzzle only.
    pub fn with_id(mut self, id: PuzzleId) -> Self {
        self.options = self.options.with_id(id);
        self
    }

    /// Fetch a random puzzle of this size class.
    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.options = self.options.with_size(size);
        self
    }

    /// Stop retrying after this many attempts (0 = unlimited).
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.options = self.options.with_max_attempts(attempts);
        self
    }

    /// Get the fetch options.
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Acquire a puzzle, write it to `path` and fetch its metadata.
    pub fn fetch_to<C, P>(&self, client: &C, path: P) -> Result<FetchReport>
    where
        C: RepositoryClient + ?Sized,
        P: AsRef<Path>,
    {
        self.fetch_to_with(client, path, |_| {})
    }

    /// Like [`fetch_to`](Self::fetch_to), reporting progress to `observer`.
    ///
    /// The document is written before metadata is requested; a metadata
    /// failure leaves the written file in place.
    pub fn fetch_to_with<C, P, F>(&self, client: &C, path: P, observer: F) -> Result<FetchReport>
    where
        C: RepositoryClient + ?Sized,
        P: AsRef<Path>,
        F: FnMut(&AcquireEvent),
    {
        let path = path.as_ref();
        let acquisition = acquire_with(client, &self.options, observer)?;
        write_document(path, &acquisition.document)?;

        let dimensions = acquisition.document.dimensions();
        let metadata = fetch_metadata(client, acquisition.id, Some(dimensions))?;

        Ok(FetchReport {
            metadata,
            dimensions,
            output: path.to_path_buf(),
            attempts: acquisition.attempts,
            fetched_at: Utc::now(),
        })
    }
}

/// Outcome of a completed fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchReport {
    /// Metadata of the saved puzzle
    pub metadata: PuzzleMetadata,

    /// Dimensions of the saved puzzle
    pub dimensions: Dimensions,

    /// Where the normalized document was written
    pub output: PathBuf,

    /// Number of attempts it took to find a supported puzzle
    pub attempts: u32,

    /// When the fetch completed
    pub fetched_at: DateTime<Utc>,
}
