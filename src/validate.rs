//! Export format validation.
//!
//! The repository answers an MK export request for a puzzle it cannot express
//! in that format with an explanatory page instead of the export. That page
//! is recognized by a fixed marker sentence.

/// Sentence the repository emits when a puzzle has blotted clues.
pub const UNSUPPORTED_MARKER: &str = "The mk format cannot handle puzzles with blotted clues.";

/// Outcome of inspecting a raw export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportCheck {
    /// The export can be normalized
    Supported,
    /// The puzzle uses blotted clues
    BlottedClues,
}

impl ExportCheck {
    /// Whether the export can be normalized.
    pub fn is_supported(self) -> bool {
        matches!(self, ExportCheck::Supported)
    }
}

/// Inspect a raw export for the unsupported-feature marker.
///
/// # Example
/// ```
/// use nonofetch::validate::{check_export, ExportCheck};
///
/// assert_eq!(check_export("1 1\n1\n#\n1\n"), ExportCheck::Supported);
/// ```
pub fn check_export(raw: &str) -> ExportCheck {
    if raw.contains(UNSUPPORTED_MARKER) {
        ExportCheck::BlottedClues
    } else {
        ExportCheck::Supported
    }
}

/// Check if a raw export can be normalized.
pub fn is_supported(raw: &str) -> bool {
    check_export(raw).is_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_export_is_supported() {
        assert_eq!(check_export("2 2\n1\n1\n#\n1\n1\n"), ExportCheck::Supported);
        assert!(is_supported(""));
    }

    #[test]
    fn test_marker_anywhere_rejects() {
        let page = format!("<html><body><p>{}</p></body></html>", UNSUPPORTED_MARKER);
        assert_eq!(check_export(&page), ExportCheck::BlottedClues);
        assert!(!is_supported(&page));
    }

    #[test]
    fn test_partial_marker_is_not_a_match() {
        assert!(is_supported("The mk format cannot handle puzzles"));
    }
}
