//! Foundation types for the Locale Bundle Checker (LBC).
//!
//! This crate provides the data model and document loading shared by the
//! rest of the workspace. A locale bundle is a directory of JSON documents:
//! one reference locale (the source of truth, typically `en-us.json`) and
//! any number of translated candidates sitting next to it.
//!
//! # Key Types
//!
//! - [`LocaleNode`] — a locale document as a tree of objects and opaque leaves
//! - [`BundleError`] — load failures (missing file, malformed JSON)
//! - [`load_document`] — parse one file into a [`LocaleNode`]
//! - [`join_key_path`] — dotted key-path construction during traversal

pub mod error;
pub mod loader;
pub mod path;
pub mod tree;

pub use error::{BundleError, BundleResult};
pub use loader::load_document;
pub use path::join_key_path;
pub use tree::LocaleNode;
