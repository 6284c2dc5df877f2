//! Sensitive path detection.

use crate::domain::Entry;

/// Substrings (lowercase) suggesting credentials or key material.
const SENSITIVE_MARKERS: &[&str] = &[
    ".env",
    "secret",
    "credentials",
    "id_rsa",
    "id_dsa",
    "id_ecdsa",
    "id_ed25519",
    ".pem",
    ".p12",
    ".pfx",
    "private_key",
];

/// Paths (files or directories) whose lowercase form contains a sensitive marker,
/// in listing order.
pub fn detect_risky_paths(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| is_sensitive_path(&entry.path))
        .map(|entry| entry.path.clone())
        .collect()
}

fn is_sensitive_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    SENSITIVE_MARKERS.iter().any(|marker| lower.contains(marker))
}
