//! Loading locale documents from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{BundleError, BundleResult};
use crate::tree::LocaleNode;

/// Load the JSON document at `path` and convert it into a [`LocaleNode`].
///
/// Fails with [`BundleError::NotFound`] when the file is missing or
/// unreadable, and with [`BundleError::Parse`] when the content is not
/// valid JSON. The root may be any JSON value; callers that require an
/// object root treat a non-object root as an empty object.
pub fn load_document(path: &Path) -> BundleResult<LocaleNode> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => BundleError::NotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => BundleError::Io(source),
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| BundleError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), "loaded locale document");
    Ok(LocaleNode::from(value))
}
