//! Header block scanning and metadata extraction.
//!
//! This crate turns one document into a
//! [`DocumentMetadata`](qindex_core::DocumentMetadata). It knows nothing
//! about directory trees; the aggregator in `qindex-tree` drives it.
//!
//! # Modules
//!
//! - [`header`]: Header block detection and parsing
//!   - [`header::block`]: `---`-delimited block scanning over a reader
//!   - [`header::schema`]: Typed YAML header schema
//!   - [`header::lines`]: Line-prefix fallback for headers that are not YAML
//! - [`extractor`]: File-level extraction entry points
//!
//! # Example
//!
//! ```rust
//! use qindex_content::{parse_header_str, HeaderRules};
//!
//! let content = "---\ntitle: \"Hello\"\ncategories: [\"a\", \"b, c\"]\n---\n\nBody";
//! let parsed = parse_header_str(content, &HeaderRules::default());
//!
//! assert_eq!(parsed.metadata.title.as_deref(), Some("Hello"));
//! assert_eq!(parsed.metadata.categories, vec!["a", "b, c"]);
//! ```

pub mod extractor;
pub mod header;

// Re-export commonly used types
pub use extractor::{extract, extract_report, extract_with};
pub use header::{
    parse_header, parse_header_str, BlockState, HeaderBlock, HeaderParse, HeaderRules,
    HeaderWarning,
};
