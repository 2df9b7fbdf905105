//! Diff engine for the Locale Bundle Checker.
//!
//! Compares the key structure of translated locale documents against a
//! reference document, producing one drift report per file. Values are
//! never compared; the diff is purely over key sets, walked recursively
//! through nested objects.
//!
//! # Key Types
//!
//! - [`missing_keys`] / [`extra_keys`] -- the two recursive key-set walks
//! - [`FileReport`] -- per-candidate drift report
//! - [`check_bundle`] -- batch driver over a whole bundle directory

pub mod bundle;
pub mod key_diff;
pub mod report;

pub use bundle::{candidate_files, check_bundle, check_candidate};
pub use key_diff::{extra_keys, missing_keys};
pub use report::FileReport;
