//! Puzzle metadata decoding.
//!
//! The repository describes a puzzle with a small XML document:
//!
//! ```text
//! <puzzleset>
//!   <puzzle type="grid" defaultcolor="white">
//!     <title>...</title>
//!     <author>...</author>
//!     <description>...</description>
//!     ...
//!   </puzzle>
//! </puzzleset>
//! ```
//!
//! Only the first `puzzle` element is read.

use std::collections::HashMap;

use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::client::RepositoryClient;
use crate::error::{Error, Result};
use crate::model::{Dimensions, PuzzleId, PuzzleMetadata};

const ROOT: &str = "puzzleset";
const PUZZLE: &str = "puzzle";
const FIELDS: [&str; 3] = ["title", "author", "description"];

/// Fetch and decode the metadata of a puzzle.
///
/// `dimensions` is carried through to the result for display.
pub fn fetch_metadata<C: RepositoryClient + ?Sized>(
    client: &C,
    id: PuzzleId,
    dimensions: Option<Dimensions>,
) -> Result<PuzzleMetadata> {
    let xml = client.fetch_metadata(id)?;
    parse_metadata(&xml, id, dimensions)
}

/// Decode the metadata document of a puzzle.
///
/// Field text is unescaped and trimmed. A field whose element is present but
/// empty decodes to an empty string.
///
/// # Errors
/// * [`Error::MetadataFieldMissing`] if `title`, `author` or `description`
///   is absent.
/// * [`Error::MetadataParse`] if the document is not well-formed XML.
pub fn parse_metadata(
    xml: &str,
    id: PuzzleId,
    dimensions: Option<Dimensions>,
) -> Result<PuzzleMetadata> {
    let mut fields = extract_fields(xml)?;
    let mut take = |field: &'static str| {
        fields
            .remove(field)
            .map(|text| text.trim().to_string())
            .ok_or(Error::MetadataFieldMissing { id, field })
    };

    let metadata = PuzzleMetadata {
        id,
        title: take("title")?,
        author: take("author")?,
        description: take("description")?,
        dimensions,
    };
    debug!(
        "Decoded metadata for puzzle {}: title={:?}, author={:?}",
        id, metadata.title, metadata.author
    );

    Ok(metadata)
}

/// Collect the raw text of every known field of the first puzzle.
fn extract_fields(xml: &str) -> Result<HashMap<&'static str, String>> {
    let mut reader = Reader::from_str(xml);
    let mut path: Vec<String> = Vec::new();
    let mut fields: HashMap<&'static str, String> = HashMap::new();
    let mut puzzle_done = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                if let Some(field) = current_field(&path, puzzle_done) {
                    fields.entry(field).or_default();
                }
            }
            Event::Empty(e) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                if let Some(field) = current_field(&path, puzzle_done) {
                    fields.entry(field).or_default();
                }
                if is_puzzle(&path) {
                    puzzle_done = true;
                }
                path.pop();
            }
            Event::End(_) => {
                if is_puzzle(&path) {
                    puzzle_done = true;
                }
                path.pop();
            }
            Event::Text(e) => {
                if let Some(field) = current_field(&path, puzzle_done) {
                    let text = e.unescape()?;
                    fields.entry(field).or_default().push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(field) = current_field(&path, puzzle_done) {
                    fields
                        .entry(field)
                        .or_default()
                        .push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !path.is_empty() {
        return Err(Error::MetadataParse(format!(
            "unexpected end of document inside <{}>",
            path.join("/")
        )));
    }

    Ok(fields)
}

fn is_puzzle(path: &[String]) -> bool {
    matches!(path, [root, puzzle] if root == ROOT && puzzle == PUZZLE)
}

/// Field the current element path belongs to, if any.
fn current_field(path: &[String], puzzle_done: bool) -> Option<&'static str> {
    if puzzle_done {
        return None;
    }
    match path {
        [root, puzzle, field, ..] if root == ROOT && puzzle == PUZZLE => {
            FIELDS.into_iter().find(|known| *known == field.as_str())
        }
        _ => None,
    }
}
