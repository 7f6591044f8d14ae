//! JSON artifact writing and diagnostic rendering.
//!
//! The artifact is a pretty-printed JSON array (2-space indentation) with
//! non-ASCII text written literally, followed by a newline. Serialization is
//! deterministic, so an unchanged tree produces a byte-identical file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use qindex_core::{Error, ParentRecord, Result};

/// Render records as the artifact text.
pub fn to_json_string(records: &[ParentRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Write records to the artifact file, replacing any existing file.
///
/// Records are rendered before the file is touched, so every I/O failure
/// is reported as [`Error::Io`] with the output path.
pub fn write_json(records: &[ParentRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_string(records)?;
    std::fs::write(path, json).map_err(|e| Error::io_with_path(e, path))?;
    log::debug!("Wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}

/// Read an artifact back into records.
pub fn read_json(path: impl AsRef<Path>) -> Result<Vec<ParentRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io_with_path(e, path))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// One-line diagnostic rendering of a record. Not a stable format.
pub fn render_record(record: &ParentRecord) -> String {
    format!("{record:?}")
}
