//! Persisting normalized documents.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::model::NormalizedDocument;

/// Write a normalized document to `path`, creating or truncating the file.
///
/// Parent directories are not created. Failures are returned as
/// [`Error::Io`](crate::Error::Io).
///
/// # Example
/// ```no_run
/// use nonofetch::{normalize::normalize, output::write_document};
///
/// let doc = normalize("1 1\n1\n#\n1\n")?;
/// write_document("puzzle.non", &doc)?;
/// # Ok::<(), nonofetch::Error>(())
/// ```
pub fn write_document<P: AsRef<Path>>(path: P, document: &NormalizedDocument) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, document.as_str())?;
    debug!(
        "Wrote {} bytes to {}",
        document.as_str().len(),
        path.display()
    );
    Ok(())
}
