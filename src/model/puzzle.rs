//! Puzzle identity and size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Opaque handle of a puzzle in the remote repository.
///
/// Existence is not checked until the export is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleId(u64);

impl PuzzleId {
    /// Wrap a raw repository identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PuzzleId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for PuzzleId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Grid size announced by an export header.
///
/// The MK export header lists rows first; the normalized header lists
/// columns first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of rows (length of the row block)
    pub rows: usize,
    /// Number of columns (length of the column block)
    pub columns: usize,
}

impl Dimensions {
    /// Create dimensions from a row and column count.
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Header line of the normalized document: "columns rows".
    pub fn normalized_header(&self) -> String {
        format!("{} {}", self.columns, self.rows)
    }

    /// Number of lines an MK export needs to hold both blocks.
    ///
    /// Header, row block, separator, column block.
    pub fn required_export_lines(&self) -> usize {
        self.rows.saturating_add(2).saturating_add(self.columns)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} X {}", self.columns, self.rows)
    }
}
