//! File-level metadata extraction.
//!
//! Opens one document, scans only as far as its header block, and parses it.
//! The file handle lives for the duration of the call.
//!
//! ```rust,no_run
//! use qindex_content::extract;
//!
//! let meta = extract("index.qmd").unwrap();
//! println!("{:?}", meta.title);
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use qindex_core::{DocumentMetadata, Error, Result};

use crate::header::{parse_header, read_header_block, HeaderParse, HeaderRules};

/// Extract metadata from a document using the default rules.
pub fn extract(path: impl AsRef<Path>) -> Result<DocumentMetadata> {
    extract_with(path, &HeaderRules::default())
}

/// Extract metadata from a document, logging any recoverable header problems.
///
/// The caller is expected to pass a path that exists; open, read, and UTF-8
/// decoding failures are returned as [`Error::Io`].
pub fn extract_with(path: impl AsRef<Path>, rules: &HeaderRules) -> Result<DocumentMetadata> {
    let path = path.as_ref();
    let report = extract_report(path, rules)?;
    for warning in &report.warnings {
        log::log!(warning.level(), "{}: {warning}", path.display());
    }
    Ok(report.metadata)
}

/// Extract metadata and return the header warnings instead of logging them.
pub fn extract_report(path: impl AsRef<Path>, rules: &HeaderRules) -> Result<HeaderParse> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io_with_path(e, path))?;
    let block = read_header_block(BufReader::new(file), &rules.marker)
        .map_err(|e| Error::io_with_path(e, path))?;
    log::debug!(
        "{}: header {:?}, {} line(s)",
        path.display(),
        block.state(),
        block.lines().len()
    );
    Ok(parse_header(&block, rules))
}
