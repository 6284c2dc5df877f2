//! Path helpers for `/`-separated repository paths

/// Trim surrounding whitespace and slashes, converting backslashes to forward slashes.
pub fn normalize_path(path: &str) -> String {
    path.trim().replace('\\', "/").trim_matches('/').to_string()
}

/// Split a path at its last `/` into `(parent, name)`.
///
/// Top-level names have an empty parent: `"README.md"` -> `("", "README.md")`.
pub fn split_parent(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Final path segment.
pub fn basename(path: &str) -> &str {
    split_parent(path).1
}

/// Extension of the final segment, without the dot.
///
/// Names without a dot and dotfiles whose only dot leads the name have no extension.
pub fn extension_of(path: &str) -> Option<&str> {
    let name = basename(path);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) if idx + 1 < name.len() => Some(&name[idx + 1..]),
        Some(_) => None,
    }
}
