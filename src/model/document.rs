//! Normalized document handed to the grid renderer.

use super::Dimensions;

/// A puzzle rewritten into the renderer's line-based layout.
///
/// The text is a header line "columns rows", the column block, the row
/// block, and one trailing empty line, joined by `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    dimensions: Dimensions,
    text: String,
}

impl NormalizedDocument {
    /// Assemble a document from its two blocks.
    ///
    /// Callers guarantee `columns.len() == dimensions.columns` and
    /// `rows.len() == dimensions.rows`.
    pub(crate) fn from_blocks(dimensions: Dimensions, columns: &[&str], rows: &[&str]) -> Self {
        let header = dimensions.normalized_header();
        let mut lines: Vec<&str> = Vec::with_capacity(columns.len() + rows.len() + 2);
        lines.push(header.as_str());
        lines.extend_from_slice(columns);
        lines.extend_from_slice(rows);
        lines.push("");

        Self {
            dimensions,
            text: lines.join("\n"),
        }
    }

    /// Dimensions parsed from the source export.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The document text, exactly as it is written to disk.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lines of the column block.
    pub fn column_lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n').skip(1).take(self.dimensions.columns)
    }

    /// Lines of the row block.
    pub fn row_lines(&self) -> impl Iterator<Item = &str> {
        self.text
            .split('\n')
            .skip(1 + self.dimensions.columns)
            .take(self.dimensions.rows)
    }
}
