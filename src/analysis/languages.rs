//! Per-language file histogram.

use crate::domain::Entry;
use crate::utils::{extension_of, language_for_extension};
use std::collections::BTreeMap;

/// Count files per language. Unknown extensions, dotfiles and extensionless
/// names are not counted.
///
/// Extensions match case-insensitively, so `MAIN.PY` counts as Python.
pub fn count_languages(entries: &[Entry]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.is_file()) {
        let Some(language) = extension_of(&entry.path).and_then(language_for_extension) else {
            continue;
        };
        *counts.entry(language.to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_and_extensionless_files_are_excluded() {
        let entries = vec![
            Entry::file("a.py"),
            Entry::file("b.py"),
            Entry::file("c.unknownext"),
            Entry::file("README"),
        ];
        let counts = count_languages(&entries);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("Python"), Some(&2));
    }

    #[test]
    fn test_dotfiles_and_directories_are_skipped() {
        let entries = vec![
            Entry::file(".json"),
            Entry::file("pkg.v2/Makefile"),
            Entry::directory("styles.css"),
            Entry::file("app/.eslintrc.json"),
        ];
        let counts = count_languages(&entries);
        assert_eq!(counts.get("JSON"), Some(&1));
        assert!(!counts.contains_key("CSS"));
    }

    #[test]
    fn test_ts_and_tsx_share_a_language() {
        let entries = vec![Entry::file("a.ts"), Entry::file("b.tsx"), Entry::file("c.TS")];
        assert_eq!(count_languages(&entries).get("TypeScript"), Some(&3));
    }
}
