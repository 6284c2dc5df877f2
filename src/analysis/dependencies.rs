//! Dependency manifest detection.

use crate::domain::Entry;
use crate::utils::{basename, is_manifest_file};
use std::collections::BTreeSet;

/// Basenames of manifest files present in the listing, deduplicated and sorted.
pub fn detect_dependency_files(entries: &[Entry]) -> BTreeSet<String> {
    entries
        .iter()
        .filter(|entry| entry.is_file())
        .map(|entry| basename(&entry.path))
        .filter(|name| is_manifest_file(name))
        .map(str::to_string)
        .collect()
}
