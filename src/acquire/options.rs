//! Acquisition options and configuration.

use super::Selection;
use crate::model::PuzzleId;
use crate::size::SizeClass;

/// Options for acquiring a puzzle.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// How the puzzle identifier is chosen
    pub selection: Selection,

    /// Attempt ceiling in random mode (0 = unlimited)
    pub max_attempts: u32,
}

impl FetchOptions {
    /// Create new fetch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch this puzzle only.
    pub fn with_id(mut self, id: PuzzleId) -> Self {
        self.selection = Selection::Explicit(id);
        self
    }

    /// Fetch a random puzzle of this size class.
    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.selection = Selection::Random(size);
        self
    }

    /// Stop retrying after this many attempts (0 = unlimited).
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_options_builder() {
        let options = FetchOptions::new()
            .with_size(SizeClass::Huge)
            .with_max_attempts(10);

        assert_eq!(options.selection, Selection::Random(SizeClass::Huge));
        assert_eq!(options.max_attempts, 10);
    }

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.selection, Selection::Random(SizeClass::Any));
        assert_eq!(options.max_attempts, 0);
    }

    #[test]
    fn test_last_selection_wins() {
        let options = FetchOptions::new()
            .with_size(SizeClass::Small)
            .with_id(PuzzleId::new(7));
        assert_eq!(options.selection, Selection::Explicit(PuzzleId::new(7)));
    }
}
