//! Heuristic analysis over a flat repository listing.
//!
//! Each pass is a pure function of the entry list; none depends on another or
//! on the reconstructed tree.

use crate::domain::Entry;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

pub mod dependencies;
pub mod languages;
pub mod risk;
pub mod structure;

pub use dependencies::detect_dependency_files;
pub use languages::count_languages;
pub use risk::detect_risky_paths;
pub use structure::detect_structure;

/// Aggregate findings for one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub structure_findings: Vec<String>,
    pub dependency_files: BTreeSet<String>,
    pub risky_paths: Vec<String>,
    pub language_counts: BTreeMap<String, usize>,
}

impl AnalysisResult {
    /// Languages by descending file count, ties broken by name.
    pub fn top_languages(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut langs: Vec<(&str, usize)> =
            self.language_counts.iter().map(|(lang, count)| (lang.as_str(), *count)).collect();
        langs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        langs.truncate(limit);
        langs
    }
}

/// Run all four passes. They are independent, so they are split across the rayon pool.
pub fn analyze(entries: &[Entry]) -> AnalysisResult {
    let ((structure_findings, dependency_files), (risky_paths, language_counts)) = rayon::join(
        || (detect_structure(entries), detect_dependency_files(entries)),
        || (detect_risky_paths(entries), count_languages(entries)),
    );

    tracing::debug!(
        structure = structure_findings.len(),
        dependencies = dependency_files.len(),
        risky = risky_paths.len(),
        languages = language_counts.len(),
        "Analysis complete"
    );

    AnalysisResult { structure_findings, dependency_files, risky_paths, language_counts }
}
