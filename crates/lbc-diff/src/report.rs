//! Per-file drift report.

use serde::Serialize;

/// The structural drift found in one candidate locale file.
///
/// Produced fresh for every comparison; nothing is persisted between runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Candidate filename, relative to the bundle directory.
    pub file_name: String,
    /// Key paths present in the reference but absent from this file.
    pub missing: Vec<String>,
    /// Key paths present in this file but absent from the reference.
    pub extra: Vec<String>,
}

impl FileReport {
    /// Returns `true` if the candidate has no missing and no extra keys.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }

    /// Total number of drifted key paths.
    pub fn len(&self) -> usize {
        self.missing.len() + self.extra.len()
    }

    /// Returns `true` if there are no drifted key paths.
    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }
}
