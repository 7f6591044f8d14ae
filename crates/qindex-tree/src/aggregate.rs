//! Record assembly.
//!
//! For every parent candidate the aggregator extracts the header, then
//! extracts each declared child that resolves to a regular file under the
//! base directory. Children that do not exist are left out without a trace
//! in the output; that is expected for drafts and is not an error.
//!
//! Unreadable documents are handled according to [`ErrorPolicy`]:
//! `FailFast` aborts the run with the first error, `Collect` skips the
//! document and records a [`DocumentError`].

use std::fmt;
use std::path::{Path, PathBuf};

use qindex_content::{extract_with, HeaderRules};
use qindex_core::{ChildRecord, Error, ErrorPolicy, IndexConfig, ParentRecord, Result};

use crate::walk::{list_candidates, Candidate};

/// A document that could not be read under [`ErrorPolicy::Collect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentError {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Output of one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// One record per readable parent, in listing order.
    pub records: Vec<ParentRecord>,
    /// Documents skipped under the collect policy.
    pub errors: Vec<DocumentError>,
}

impl Aggregation {
    /// Returns `true` if every document was read.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Builds parent records for one configured base directory.
#[derive(Debug)]
pub struct Aggregator<'a> {
    config: &'a IndexConfig,
    rules: HeaderRules,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator, validating the configuration.
    pub fn new(config: &'a IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rules: HeaderRules::from(config),
        })
    }

    /// Run the aggregation.
    ///
    /// A missing or unlistable base directory is always an error, whatever
    /// the policy.
    pub fn run(&self) -> Result<Aggregation> {
        let base_dir = &self.config.base_dir;
        let candidates = list_candidates(
            base_dir,
            &self.config.extension_suffix(),
            self.config.sort_entries,
        )?;
        log::info!(
            "Found {} document(s) in {}",
            candidates.len(),
            base_dir.display()
        );

        let mut aggregation = Aggregation::default();
        for candidate in candidates {
            if let Some(record) = self.parent_record(candidate, &mut aggregation.errors)? {
                aggregation.records.push(record);
            }
        }

        log::info!(
            "Aggregated {} parent record(s), {} error(s)",
            aggregation.records.len(),
            aggregation.errors.len()
        );
        Ok(aggregation)
    }

    fn parent_record(
        &self,
        candidate: Candidate,
        errors: &mut Vec<DocumentError>,
    ) -> Result<Option<ParentRecord>> {
        let mut metadata = match extract_with(&candidate.path, &self.rules) {
            Ok(metadata) => metadata,
            Err(e) => {
                self.recover(&candidate.path, e, errors)?;
                return Ok(None);
            }
        };

        let child_paths = std::mem::take(&mut metadata.children_paths);
        let mut record = ParentRecord::from_metadata(candidate.name, metadata);

        for child in child_paths {
            let child_file = self.config.base_dir.join(&child);
            if !child_file.is_file() {
                log::debug!("{}: child {child} not found, skipping", record.filename);
                continue;
            }
            match extract_with(&child_file, &self.rules) {
                Ok(child_meta) => {
                    let child_record = ChildRecord::from_metadata(child.clone(), child_meta);
                    record.children.insert(child, child_record);
                }
                Err(e) => self.recover(&child_file, e, errors)?,
            }
        }

        Ok(Some(record))
    }

    /// Apply the error policy to a document failure.
    fn recover(&self, path: &Path, err: Error, errors: &mut Vec<DocumentError>) -> Result<()> {
        match self.config.error_policy {
            ErrorPolicy::FailFast => Err(err),
            ErrorPolicy::Collect => {
                log::warn!("Skipping unreadable document: {err}");
                let message = match &err {
                    Error::Io { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                errors.push(DocumentError {
                    path: path.to_path_buf(),
                    message,
                });
                Ok(())
            }
        }
    }
}

/// Aggregate the base directory named by `config`.
pub fn aggregate(config: &IndexConfig) -> Result<Aggregation> {
    Aggregator::new(config)?.run()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("conteudo")).unwrap();
        dir
    }

    fn write(dir: &TempDir, name: &str, content: &[u8]) {
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_parent_without_children() {
        let dir = site();
        write(&dir, "solo.qmd", b"---\ntitle: Solo\n---\n");

        let aggregation = aggregate(&IndexConfig::new(dir.path())).unwrap();
        assert!(aggregation.is_complete());
        assert_eq!(aggregation.records.len(), 1);
        let record = &aggregation.records[0];
        assert_eq!(record.filename, "solo.qmd");
        assert_eq!(record.title.as_deref(), Some("Solo"));
        assert!(record.children.is_empty());
    }

    #[test]
    fn test_child_order_follows_header() {
        let dir = site();
        write(
            &dir,
            "p.qmd",
            b"---\nchildren:\n  - conteudo/b.qmd\n  - conteudo/a.qmd\n---\n",
        );
        write(&dir, "conteudo/a.qmd", b"---\ntitle: A\n---\n");
        write(&dir, "conteudo/b.qmd", b"---\ntitle: B\n---\n");

        let aggregation = aggregate(&IndexConfig::new(dir.path())).unwrap();
        let keys: Vec<&str> = aggregation.records[0].children.keys().collect();
        assert_eq!(keys, vec!["conteudo/b.qmd", "conteudo/a.qmd"]);
    }

    #[test]
    fn test_duplicate_child_listed_once() {
        let dir = site();
        write(
            &dir,
            "p.qmd",
            b"---\nchildren:\n  - conteudo/a.qmd\n  - conteudo/a.qmd\n---\n",
        );
        write(&dir, "conteudo/a.qmd", b"---\ntitle: A\n---\n");

        let aggregation = aggregate(&IndexConfig::new(dir.path())).unwrap();
        assert_eq!(aggregation.records[0].children.len(), 1);
    }

    #[test]
    fn test_child_directory_is_skipped() {
        let dir = site();
        write(&dir, "p.qmd", b"---\nchildren:\n  - conteudo/sub\n---\n");
        std::fs::create_dir(dir.path().join("conteudo/sub")).unwrap();

        let aggregation = aggregate(&IndexConfig::new(dir.path())).unwrap();
        assert!(aggregation.records[0].children.is_empty());
    }

    #[test]
    fn test_fail_fast_on_unreadable_parent() {
        let dir = site();
        write(&dir, "bad.qmd", b"---\ntitle: \xff\n---\n");

        let err = aggregate(&IndexConfig::new(dir.path())).unwrap_err();
        assert_eq!(err.path(), Some(dir.path().join("bad.qmd").as_path()));
    }

    #[test]
    fn test_collect_skips_unreadable_child() {
        let dir = site();
        write(&dir, "p.qmd", b"---\ntitle: P\nchildren:\n  - conteudo/bad.qmd\n---\n");
        write(&dir, "conteudo/bad.qmd", b"---\ntitle: \xff\n---\n");

        let config = IndexConfig::new(dir.path()).with_error_policy(ErrorPolicy::Collect);
        let aggregation = aggregate(&config).unwrap();

        assert_eq!(aggregation.records.len(), 1);
        assert!(aggregation.records[0].children.is_empty());
        assert_eq!(aggregation.errors.len(), 1);
        assert_eq!(
            aggregation.errors[0].path,
            dir.path().join("conteudo/bad.qmd")
        );
        assert!(!aggregation.is_complete());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = site();
        let config = IndexConfig::new(dir.path()).with_child_prefix(" ");
        let err = aggregate(&config).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_document_error_display() {
        let err = DocumentError {
            path: PathBuf::from("site/bad.qmd"),
            message: "stream did not contain valid UTF-8".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "site/bad.qmd: stream did not contain valid UTF-8"
        );
    }
}
