//! # qindex-cli
//!
//! Command-line front end for qindex.
//!
//! - [`cli`]: argument parsing and config layering
//! - [`run`]: one indexing run: aggregate, write the artifact, echo records
//! - [`error`]: CLI-level errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod run;

pub use cli::Args;
pub use error::{Error, Result};
pub use run::{finish, run};
