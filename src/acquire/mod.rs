//! Puzzle acquisition: identifier selection, format validation and retry.
//!
//! Each attempt selects an identifier, fetches its MK export and checks it
//! for the unsupported-feature marker. A supported export is normalized and
//! returned. A rejected export ends the acquisition when the identifier was
//! explicit; in random mode a new identifier is selected and the attempt
//! repeats. Nothing but the unsupported-format condition is ever retried.

mod options;
mod selector;

pub use options::FetchOptions;
pub use selector::Selection;

use log::{info, warn};

use crate::client::RepositoryClient;
use crate::error::{Error, Result};
use crate::model::{NormalizedDocument, PuzzleId};
use crate::normalize::normalize;
use crate::validate::{check_export, ExportCheck};

/// Progress notification emitted during an acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireEvent {
    /// An identifier was chosen for this attempt
    Selected { id: PuzzleId, attempt: u32 },
    /// The export of this identifier uses an unsupported feature
    Rejected { id: PuzzleId, attempt: u32 },
    /// The export of this identifier was normalized
    Accepted { id: PuzzleId, attempt: u32 },
}

/// A successfully acquired and normalized puzzle.
#[derive(Debug, Clone)]
pub struct Acquisition {
    /// Identifier of the accepted puzzle
    pub id: PuzzleId,

    /// The normalized document
    pub document: NormalizedDocument,

    /// Number of attempts made, including the accepted one
    pub attempts: u32,
}

/// Acquire and normalize a puzzle.
///
/// # Errors
/// * [`Error::UnsupportedPuzzle`] if an explicit puzzle uses blotted clues.
/// * [`Error::RetryLimitExceeded`] if the attempt ceiling is reached.
/// * [`Error::MalformedExport`] if the accepted export is malformed.
/// * [`Error::Transport`] from the client, unchanged.
pub fn acquire<C: RepositoryClient + ?Sized>(
    client: &C,
    options: &FetchOptions,
) -> Result<Acquisition> {
    acquire_with(client, options, |_| {})
}

/// Acquire and normalize a puzzle, reporting progress to `observer`.
pub fn acquire_with<C, F>(client: &C, options: &FetchOptions, mut observer: F) -> Result<Acquisition>
where
    C: RepositoryClient + ?Sized,
    F: FnMut(&AcquireEvent),
{
    let selection = options.selection;
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        let id = selection.select(client)?;
        observer(&AcquireEvent::Selected { id, attempt });

        let raw = client.fetch_export(id)?;
        match check_export(&raw) {
            ExportCheck::Supported => {
                let document = normalize(&raw).map_err(|e| e.with_puzzle(id))?;
                info!(
                    "Accepted puzzle {} ({}) after {} attempt(s)",
                    id,
                    document.dimensions(),
                    attempt
                );
                observer(&AcquireEvent::Accepted { id, attempt });
                return Ok(Acquisition {
                    id,
                    document,
                    attempts: attempt,
                });
            }
            ExportCheck::BlottedClues => {
                observer(&AcquireEvent::Rejected { id, attempt });
                if selection.is_explicit() {
                    return Err(Error::UnsupportedPuzzle { id });
                }
                if options.max_attempts != 0 && attempt >= options.max_attempts {
                    return Err(Error::RetryLimitExceeded { attempts: attempt });
                }
                warn!("Puzzle ID {} is invalid, retrying...", id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::SizeClass;
    use crate::validate::UNSUPPORTED_MARKER;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Client answering from canned queues.
    #[derive(Default)]
    struct ScriptedClient {
        ids: RefCell<VecDeque<u64>>,
        exports: RefCell<VecDeque<String>>,
        random_calls: Cell<u32>,
        export_calls: Cell<u32>,
    }

    impl ScriptedClient {
        fn new(ids: &[u64], exports: &[&str]) -> Self {
            Self {
                ids: RefCell::new(ids.iter().copied().collect()),
                exports: RefCell::new(exports.iter().map(|s| s.to_string()).collect()),
                ..Default::default()
            }
        }
    }

    impl RepositoryClient for ScriptedClient {
        fn random_id(&self, _size: SizeClass) -> Result<PuzzleId> {
            self.random_calls.set(self.random_calls.get() + 1);
            self.ids
                .borrow_mut()
                .pop_front()
                .map(PuzzleId::new)
                .ok_or_else(|| Error::Transport("no more ids".into()))
        }

        fn fetch_export(&self, _id: PuzzleId) -> Result<String> {
            self.export_calls.set(self.export_calls.get() + 1);
            self.exports
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| Error::Transport("no more exports".into()))
        }

        fn fetch_metadata(&self, _id: PuzzleId) -> Result<String> {
            Err(Error::Transport("not scripted".into()))
        }
    }

    const GOOD: &str = "1 1\n1\n#\n1\n";

    #[test]
    fn test_explicit_supported() {
        let client = ScriptedClient::new(&[], &[GOOD]);
        let options = FetchOptions::new().with_id(PuzzleId::new(9));

        let acquisition = acquire(&client, &options).unwrap();
        assert_eq!(acquisition.id, PuzzleId::new(9));
        assert_eq!(acquisition.attempts, 1);
        assert_eq!(client.random_calls.get(), 0);
        assert_eq!(client.export_calls.get(), 1);
    }

    #[test]
    fn test_explicit_unsupported_stops() {
        let client = ScriptedClient::new(&[], &[UNSUPPORTED_MARKER, GOOD]);
        let options = FetchOptions::new().with_id(PuzzleId::new(9));

        let result = acquire(&client, &options);
        assert!(matches!(result, Err(Error::UnsupportedPuzzle { id }) if id == PuzzleId::new(9)));
        assert_eq!(client.export_calls.get(), 1);
        assert_eq!(client.random_calls.get(), 0);
    }

    #[test]
    fn test_random_retries_until_supported() {
        let client = ScriptedClient::new(&[1, 2, 3], &[UNSUPPORTED_MARKER, UNSUPPORTED_MARKER, GOOD]);
        let options = FetchOptions::new().with_size(SizeClass::Small);

        let mut events = Vec::new();
        let acquisition = acquire_with(&client, &options, |e| events.push(*e)).unwrap();

        assert_eq!(acquisition.id, PuzzleId::new(3));
        assert_eq!(acquisition.attempts, 3);
        assert_eq!(client.random_calls.get(), 3);
        assert_eq!(client.export_calls.get(), 3);
        assert_eq!(
            events.last(),
            Some(&AcquireEvent::Accepted {
                id: PuzzleId::new(3),
                attempt: 3
            })
        );
        let rejected = events
            .iter()
            .filter(|e| matches!(e, AcquireEvent::Rejected { .. }))
            .count();
        assert_eq!(rejected, 2);
    }

    #[test]
    fn test_max_attempts_guard() {
        let client = ScriptedClient::new(&[1, 2, 3], &[UNSUPPORTED_MARKER; 3]);
        let options = FetchOptions::new().with_max_attempts(2);

        let result = acquire(&client, &options);
        assert!(matches!(result, Err(Error::RetryLimitExceeded { attempts: 2 })));
        assert_eq!(client.export_calls.get(), 2);
    }

    #[test]
    fn test_transport_error_is_not_retried() {
        let client = ScriptedClient::new(&[1], &[]);
        let result = acquire(&client, &FetchOptions::default());
        assert!(matches!(result, Err(Error::Transport(_))));
        assert_eq!(client.random_calls.get(), 1);
        assert_eq!(client.export_calls.get(), 1);
    }

    #[test]
    fn test_malformed_export_carries_id() {
        let client = ScriptedClient::new(&[], &["2 3\n0\nabc\n"]);
        let options = FetchOptions::new().with_id(PuzzleId::new(77));

        match acquire(&client, &options) {
            Err(Error::MalformedExport { id, dimensions, .. }) => {
                assert_eq!(id, Some(PuzzleId::new(77)));
                assert!(dimensions.is_some());
            }
            other => panic!("expected MalformedExport, got {:?}", other),
        }
    }
}
