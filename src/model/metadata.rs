//! Informational puzzle metadata.

use super::{Dimensions, PuzzleId};
use serde::{Deserialize, Serialize};

/// Descriptive fields of a puzzle, shown to the operator and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleMetadata {
    /// Repository identifier the puzzle was fetched under
    pub id: PuzzleId,

    /// Puzzle title
    pub title: String,

    /// Puzzle author
    pub author: String,

    /// Free-form description (may be empty)
    pub description: String,

    /// Dimensions parsed from the export, if one was fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}
