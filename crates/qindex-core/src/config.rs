//! Run configuration.
//!
//! [`IndexConfig`] carries everything an indexing run needs: where to look,
//! which files count as documents, where child documents live, and what to do
//! when a document cannot be read. Values are layered as
//! defaults, then an optional TOML file, then command-line overrides.
//!
//! ```rust
//! use qindex_core::{ErrorPolicy, IndexConfig};
//!
//! let config = IndexConfig::from_toml_str(
//!     "base_dir = \"site\"\nerror_policy = \"collect\"\n",
//! )
//! .unwrap();
//!
//! assert_eq!(config.base_dir, std::path::PathBuf::from("site"));
//! assert_eq!(config.error_policy, ErrorPolicy::Collect);
//! assert_eq!(config.extension, "qmd");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default document extension (without the dot).
pub const DEFAULT_EXTENSION: &str = "qmd";

/// Default prefix every child path starts with.
pub const DEFAULT_CHILD_PREFIX: &str = "conteudo/";

/// Default output artifact file name.
pub const DEFAULT_OUTPUT: &str = "saida.json";

/// What to do when a document cannot be read or decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Abort the whole run on the first unreadable document.
    #[default]
    FailFast,
    /// Skip unreadable documents, record the failure, and keep going.
    Collect,
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail-fast"),
            Self::Collect => write!(f, "collect"),
        }
    }
}

/// Configuration for one indexing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Directory whose top-level documents become parent records.
    pub base_dir: PathBuf,
    /// Where the JSON artifact is written.
    pub output: PathBuf,
    /// Document extension, without the leading dot.
    pub extension: String,
    /// Prefix that marks a header entry as a child path.
    pub child_prefix: String,
    /// Partial-failure policy.
    pub error_policy: ErrorPolicy,
    /// Sort parent candidates by file name instead of listing order.
    pub sort_entries: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extension: DEFAULT_EXTENSION.to_string(),
            child_prefix: DEFAULT_CHILD_PREFIX.to_string(),
            error_policy: ErrorPolicy::default(),
            sort_entries: false,
        }
    }
}

impl IndexConfig {
    /// Create a configuration for the given base directory with defaults
    /// for everything else.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Set the output artifact path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the document extension (a leading dot is ignored).
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Set the child path prefix.
    pub fn with_child_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.child_prefix = prefix.into();
        self
    }

    /// Set the partial-failure policy.
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Sort parent candidates by file name.
    pub fn with_sorted_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { message } => Error::config(format!("{}: {message}", path.display())),
            other => other,
        })
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Check that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(Error::config("extension must not be empty"));
        }
        if self.child_prefix.trim().is_empty() {
            return Err(Error::config("child_prefix must not be empty"));
        }
        Ok(())
    }

    /// File-name suffix that identifies a document, e.g. `.qmd`.
    pub fn extension_suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}
