//! Parent/child aggregation over a content directory.
//!
//! Lists the documents directly under a base directory, extracts each one's
//! header, resolves the children it declares, and produces
//! [`ParentRecord`](qindex_core::ParentRecord)s ready for export.
//!
//! # Modules
//!
//! - [`walk`]: Parent candidate discovery
//! - [`aggregate`]: Record assembly and the partial-failure policy
//! - [`export`]: JSON artifact writing and diagnostic rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use qindex_core::IndexConfig;
//! use qindex_tree::{aggregate, write_json};
//!
//! let config = IndexConfig::new("site");
//! let aggregation = aggregate(&config).unwrap();
//! write_json(&aggregation.records, &config.output).unwrap();
//! ```

pub mod aggregate;
pub mod export;
pub mod walk;

pub use aggregate::{aggregate, Aggregation, Aggregator, DocumentError};
pub use export::{read_json, render_record, to_json_string, write_json};
pub use walk::{list_candidates, Candidate};
