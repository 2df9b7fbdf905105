//! Dotted key paths.
//!
//! A key path identifies a node's position in a nested document as the
//! dot-joined sequence of ancestor keys (`"menu.file.open"`). Paths are
//! built incrementally during traversal and never stored on the tree.

/// Join a parent path and a key into a full key path.
///
/// At the root the parent path is empty and the result is the key itself.
pub fn join_key_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
