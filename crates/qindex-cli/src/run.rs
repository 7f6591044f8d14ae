//! One indexing run.

use std::io::Write;

use qindex_core::IndexConfig;
use qindex_tree::{aggregate, render_record, write_json, Aggregation};

use crate::error::{Error, Result};

/// Aggregate the configured tree, write the JSON artifact, and echo each
/// record to `out` unless `echo` is off.
///
/// Under the fail-fast policy nothing is written when a document fails.
pub fn run(config: &IndexConfig, out: &mut impl Write, echo: bool) -> Result<Aggregation> {
    tracing::debug!(
        base_dir = %config.base_dir.display(),
        policy = %config.error_policy,
        "Starting run"
    );

    let aggregation = aggregate(config)?;
    write_json(&aggregation.records, &config.output)?;
    tracing::info!(
        records = aggregation.records.len(),
        output = %config.output.display(),
        "Index written"
    );

    if echo {
        for record in &aggregation.records {
            writeln!(out, "{}", render_record(record)).map_err(Error::Output)?;
        }
        out.flush().map_err(Error::Output)?;
    }

    Ok(aggregation)
}

/// Report documents skipped under the collect policy.
///
/// Returns [`Error::Incomplete`] if there were any, so the process exits
/// non-zero after the artifact has been written.
pub fn finish(aggregation: &Aggregation) -> Result<()> {
    if aggregation.is_complete() {
        return Ok(());
    }
    for error in &aggregation.errors {
        tracing::error!("{error}");
    }
    Err(Error::Incomplete {
        count: aggregation.errors.len(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use qindex_core::ErrorPolicy;
    use tempfile::TempDir;

    fn site() -> (TempDir, IndexConfig) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("conteudo")).unwrap();
        std::fs::write(
            dir.path().join("parent.qmd"),
            "---\ntitle: \"P\"\ncategories: [\"x\"]\nchildren:\n  - conteudo/child.qmd\n---\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("conteudo/child.qmd"),
            "---\ntitle: \"C\"\n---\n",
        )
        .unwrap();
        let config = IndexConfig::new(dir.path()).with_output(dir.path().join("saida.json"));
        (dir, config)
    }

    #[test]
    fn test_run_writes_artifact_and_echoes() {
        let (_dir, config) = site();
        let mut out = Vec::new();

        let aggregation = run(&config, &mut out, true).unwrap();
        assert_eq!(aggregation.records.len(), 1);

        let json = std::fs::read_to_string(&config.output).unwrap();
        assert!(json.contains("\"conteudo/child.qmd\""));

        let echoed = String::from_utf8(out).unwrap();
        assert_eq!(echoed.lines().count(), 1);
        assert!(echoed.starts_with("ParentRecord { filename: \"parent.qmd\""));
        assert!(finish(&aggregation).is_ok());
    }

    #[test]
    fn test_run_quiet() {
        let (_dir, config) = site();
        let mut out = Vec::new();

        run(&config, &mut out, false).unwrap();
        assert!(out.is_empty());
        assert!(config.output.exists());
    }

    #[test]
    fn test_fail_fast_writes_nothing() {
        let (dir, config) = site();
        std::fs::write(dir.path().join("bad.qmd"), b"---\ntitle: \xff\n---\n").unwrap();
        let mut out = Vec::new();

        let err = run(&config, &mut out, true).unwrap_err();
        assert!(matches!(err, Error::Core(_)));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_collect_writes_then_reports() {
        let (dir, config) = site();
        std::fs::write(dir.path().join("bad.qmd"), b"---\ntitle: \xff\n---\n").unwrap();
        let config = config.with_error_policy(ErrorPolicy::Collect);
        let mut out = Vec::new();

        let aggregation = run(&config, &mut out, true).unwrap();
        assert!(config.output.exists());

        let err = finish(&aggregation).unwrap_err();
        assert!(matches!(err, Error::Incomplete { count: 1 }));
    }
}
