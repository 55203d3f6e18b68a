//! MK export normalization.
//!
//! An MK export looks like this:
//!
//! ```text
//! rows columns
//! <rows lines of row clues>
//! #
//! <columns lines of column clues>
//! ```
//!
//! where a line holding just `0` marks an empty clue. The renderer expects
//! the header swapped to "columns rows", the column block first, then the
//! row block, then an empty line. Empty clues become blank lines.
//!
//! The transform runs in two named steps: [`parse_dimensions`] reads the
//! header, then [`normalize`] checks the line count against it and slices
//! both blocks by offset.

use crate::error::{Error, Result};
use crate::model::{Dimensions, NormalizedDocument};
use log::trace;

/// Line the MK format uses for "no clue".
pub const EMPTY_CLUE: &str = "0";

/// Normalize a validated MK export.
///
/// # Errors
/// * [`Error::MalformedExport`] if the header is not two non-negative
///   integers, or the export holds fewer lines than the header announces.
///
/// # Example
/// ```
/// use nonofetch::normalize::normalize;
///
/// let doc = normalize("2 2\n0\nR1\nR2\nC1\nC2\n").unwrap();
/// assert_eq!(doc.as_str(), "2 2\nC1\nC2\n\nR1\n");
/// ```
pub fn normalize(raw: &str) -> Result<NormalizedDocument> {
    let lines = split_lines(raw);

    let header = lines
        .first()
        .copied()
        .ok_or_else(|| Error::malformed(None, "empty export"))?;
    let dimensions = parse_dimensions(header)?;
    trace!(
        "Export header: {} rows, {} columns, {} lines",
        dimensions.rows,
        dimensions.columns,
        lines.len()
    );

    let required = dimensions.required_export_lines();
    if lines.len() < required {
        return Err(Error::malformed(
            Some(dimensions),
            format!("expected at least {} lines, found {}", required, lines.len()),
        ));
    }

    let rows = &lines[1..dimensions.rows + 1];
    let column_start = dimensions.rows + 2;
    let columns = &lines[column_start..column_start + dimensions.columns];

    Ok(NormalizedDocument::from_blocks(dimensions, columns, rows))
}

/// Parse an MK header line ("rows columns").
///
/// # Example
/// ```
/// use nonofetch::normalize::parse_dimensions;
///
/// let dims = parse_dimensions("20 15").unwrap();
/// assert_eq!((dims.rows, dims.columns), (20, 15));
/// ```
pub fn parse_dimensions(header: &str) -> Result<Dimensions> {
    let tokens: Vec<&str> = header.split_whitespace().collect();
    let &[rows, columns] = tokens.as_slice() else {
        return Err(Error::malformed(
            None,
            format!("header must hold two numbers, got {:?}", header),
        ));
    };

    let parse = |token: &str| {
        token.parse::<usize>().map_err(|_| {
            Error::malformed(None, format!("invalid dimension {:?} in header", token))
        })
    };

    Ok(Dimensions::new(parse(rows)?, parse(columns)?))
}

/// Split an export into lines, blanking empty-clue sentinels.
///
/// Splits on `\n` only, so a trailing newline yields a final empty line.
/// A trailing `\r` is dropped from each line. Each line is compared to the
/// sentinel once; the substitution is never reapplied to its output.
fn split_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| if line == EMPTY_CLUE { "" } else { line })
        .collect()
}
