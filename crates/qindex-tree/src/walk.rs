//! Parent candidate discovery.
//!
//! Only the base directory itself is listed; subdirectories are never
//! descended into. An entry is a candidate when its name ends with the
//! document suffix and it is a regular file (symlinks are followed).

use std::path::{Path, PathBuf};

use qindex_core::{Error, Result};

/// A top-level document found in the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// File name relative to the base directory.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// List parent candidates under `base_dir`.
///
/// Entries come back in directory-listing order unless `sort` is set.
/// Names that are not valid UTF-8 are skipped, since they cannot be exported.
pub fn list_candidates(base_dir: &Path, suffix: &str, sort: bool) -> Result<Vec<Candidate>> {
    let entries = std::fs::read_dir(base_dir).map_err(|e| Error::io_with_path(e, base_dir))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io_with_path(e, base_dir))?;
        let path = entry.path();

        let Some(name) = entry.file_name().to_str().map(String::from) else {
            log::debug!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }
        if !path.is_file() {
            log::debug!("Skipping {name}: not a regular file");
            continue;
        }

        candidates.push(Candidate { name, path });
    }

    if sort {
        candidates.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(candidates)
}
