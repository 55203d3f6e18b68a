//! Puzzle model types.
//!
//! These types describe a puzzle as it moves through the pipeline: the
//! identifier it was fetched under, the dimensions announced by its export
//! header, the normalized document handed to the renderer, and the
//! informational metadata shown to the operator.

mod document;
mod metadata;
mod puzzle;

pub use document::NormalizedDocument;
pub use metadata::PuzzleMetadata;
pub use puzzle::{Dimensions, PuzzleId};
