//! qindex core: shared types, errors, and configuration.
//!
//! This crate provides the foundational types used across all qindex crates.
//! It has no internal qindex dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: Extracted metadata and exported record types
//! - [`config`]: Run configuration and error policy

#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod record;

// Re-export key types at crate root for convenience
pub use config::{ErrorPolicy, IndexConfig};
pub use error::{Error, Result};
pub use record::{ChildMap, ChildRecord, DocumentMetadata, ParentRecord};
