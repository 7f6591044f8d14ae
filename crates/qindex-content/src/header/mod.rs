//! Header block detection and parsing.
//!
//! A header is the region of a document between two marker lines (`---`
//! after trimming). It is parsed as YAML into a typed schema first; when the
//! block is not valid YAML, each line is matched by key prefix instead so a
//! sloppy header still yields whatever fields it clearly declares.
//!
//! Problems that do not stop extraction are reported as [`HeaderWarning`]s
//! next to the metadata instead of being dropped silently.
//!
//! # Example
//!
//! ```rust
//! use qindex_content::header::{parse_header_str, HeaderRules, HeaderWarning};
//!
//! // Unquoted colon in a title: not valid YAML, recovered line by line.
//! let content = "---\ntitle: Part 1: Basics\ncategories: [\"intro\"]\n---\n";
//! let parsed = parse_header_str(content, &HeaderRules::default());
//!
//! assert_eq!(parsed.metadata.title.as_deref(), Some("Part 1: Basics"));
//! assert_eq!(parsed.metadata.categories, vec!["intro"]);
//! assert!(matches!(parsed.warnings[0], HeaderWarning::InvalidYaml { .. }));
//! ```

pub mod block;
pub mod lines;
pub mod schema;

use std::fmt;

use qindex_core::{DocumentMetadata, IndexConfig};

pub use block::{read_header_block, BlockState, HeaderBlock};

/// Default header marker line.
pub const DEFAULT_MARKER: &str = "---";

/// Rules that control how a header is recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRules {
    /// Line content (after trimming) that opens and closes a header.
    pub marker: String,
    /// Prefix a child path must start with, e.g. `conteudo/`.
    pub child_prefix: String,
}

impl Default for HeaderRules {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            child_prefix: qindex_core::config::DEFAULT_CHILD_PREFIX.to_string(),
        }
    }
}

impl From<&IndexConfig> for HeaderRules {
    fn from(config: &IndexConfig) -> Self {
        Self {
            child_prefix: config.child_prefix.clone(),
            ..Self::default()
        }
    }
}

/// A recoverable problem found while parsing a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderWarning {
    /// The opening marker was never closed; everything after it was read
    /// as header content.
    Unterminated,
    /// The header is not valid YAML; fields were recovered line by line.
    InvalidYaml {
        /// Parser message
        detail: String,
    },
    /// `categories` could not be read as a list of strings and was left empty.
    MalformedCategories {
        /// What was wrong with it
        detail: String,
    },
    /// A field had a shape that cannot be used (e.g. a mapping as a title).
    UnexpectedType {
        /// Field name
        field: &'static str,
        /// Kind of value found
        found: &'static str,
    },
    /// A `children` entry did not start with the child prefix.
    IgnoredChild {
        /// The entry as written
        entry: String,
    },
}

impl HeaderWarning {
    /// Log level this warning deserves.
    pub fn level(&self) -> log::Level {
        match self {
            Self::Unterminated | Self::IgnoredChild { .. } => log::Level::Debug,
            _ => log::Level::Warn,
        }
    }
}

impl fmt::Display for HeaderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unterminated => write!(f, "header block is not closed"),
            Self::InvalidYaml { detail } => {
                write!(f, "header is not valid YAML, falling back to line matching: {detail}")
            }
            Self::MalformedCategories { detail } => {
                write!(f, "malformed categories, using an empty list: {detail}")
            }
            Self::UnexpectedType { field, found } => {
                write!(f, "ignoring `{field}`: expected a scalar, found {found}")
            }
            Self::IgnoredChild { entry } => {
                write!(f, "ignoring child entry without the content prefix: {entry}")
            }
        }
    }
}

/// Metadata parsed from one header, with any recoverable problems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderParse {
    pub metadata: DocumentMetadata,
    pub warnings: Vec<HeaderWarning>,
}

/// Parse a scanned header block.
///
/// Never fails: absent or empty headers yield default metadata, and
/// anything that cannot be used is reported in [`HeaderParse::warnings`].
pub fn parse_header(block: &HeaderBlock, rules: &HeaderRules) -> HeaderParse {
    let mut warnings = Vec::new();
    if block.state() == BlockState::Unterminated {
        warnings.push(HeaderWarning::Unterminated);
    }
    if block.is_blank() {
        return HeaderParse {
            metadata: DocumentMetadata::default(),
            warnings,
        };
    }

    let metadata = match schema::parse_yaml(&block.text(), rules, &mut warnings) {
        Ok(metadata) => metadata,
        Err(detail) => {
            warnings.push(HeaderWarning::InvalidYaml { detail });
            lines::parse_lines(block.lines(), rules, &mut warnings)
        }
    };

    HeaderParse { metadata, warnings }
}

/// Scan and parse the header of in-memory content.
pub fn parse_header_str(content: &str, rules: &HeaderRules) -> HeaderParse {
    match read_header_block(content.as_bytes(), &rules.marker) {
        Ok(block) => parse_header(&block, rules),
        // `&str` is always valid UTF-8 and reading from a slice cannot fail.
        Err(_) => HeaderParse::default(),
    }
}

// ============================================================================
// Tests
// ============================================================================
