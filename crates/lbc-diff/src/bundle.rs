//! Batch driver: check every candidate in a bundle directory.
//!
//! A candidate is any regular file in the directory with a `json`
//! extension whose filename is not the reference filename. Candidates are
//! visited in sorted filename order so batch output is deterministic
//! across platforms. A load failure for any candidate aborts the whole
//! batch; there is no per-file isolation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use lbc_bundle::{load_document, BundleResult, LocaleNode};

use crate::key_diff::{extra_keys, missing_keys};
use crate::report::FileReport;

/// Enumerate the candidate locale files in `dir`, sorted by filename.
///
/// Returns `(file_name, path)` pairs. Subdirectories, non-JSON files, the
/// reference file itself, and files with non-UTF-8 names are skipped.
pub fn candidate_files(
    dir: &Path,
    reference_name: &str,
) -> BundleResult<Vec<(String, PathBuf)>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        if name == reference_name {
            continue;
        }
        candidates.push((name, path));
    }

    candidates.sort();
    debug!(dir = %dir.display(), count = candidates.len(), "enumerated candidates");
    Ok(candidates)
}

/// Load one candidate and diff it against the reference.
pub fn check_candidate(
    reference: &LocaleNode,
    file_name: &str,
    path: &Path,
) -> BundleResult<FileReport> {
    let candidate = load_document(path)?;
    let missing = missing_keys(reference, &candidate);
    let extra = extra_keys(reference, &candidate);
    debug!(
        file = file_name,
        missing = missing.len(),
        extra = extra.len(),
        "checked candidate"
    );
    Ok(FileReport {
        file_name: file_name.to_string(),
        missing,
        extra,
    })
}

/// Check every candidate in `dir` against `reference`, in filename order.
///
/// The first load failure propagates and discards the reports collected so
/// far. Callers that want streaming output compose [`candidate_files`] and
/// [`check_candidate`] directly.
pub fn check_bundle(
    reference: &LocaleNode,
    reference_name: &str,
    dir: &Path,
) -> BundleResult<Vec<FileReport>> {
    let candidates = candidate_files(dir, reference_name)?;
    let mut reports = Vec::with_capacity(candidates.len());
    for (file_name, path) in candidates {
        reports.push(check_candidate(reference, &file_name, &path)?);
    }
    Ok(reports)
}
