//! Project-structure convention detection.

use crate::domain::Entry;
use crate::utils::basename;
use std::collections::HashSet;

/// File and directory paths of one listing, split by kind.
struct PathSets<'a> {
    files: HashSet<&'a str>,
    dirs: HashSet<&'a str>,
}

impl<'a> PathSets<'a> {
    fn new(entries: &'a [Entry]) -> Self {
        let mut files = HashSet::new();
        let mut dirs = HashSet::new();
        for entry in entries {
            if entry.is_file() {
                files.insert(entry.path.as_str());
            } else {
                dirs.insert(entry.path.as_str());
            }
        }
        Self { files, dirs }
    }

    fn has_top_level_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
            || self
                .files
                .iter()
                .any(|path| path.split_once('/').is_some_and(|(top, _)| top == name))
    }
}

struct StructureRule {
    finding: &'static str,
    matches: fn(&PathSets<'_>) -> bool,
}

/// Evaluated in order; each matching rule contributes one finding.
const RULES: &[StructureRule] = &[
    StructureRule {
        finding: "'src' layout detected",
        matches: |sets| sets.files.iter().any(|p| p.starts_with("src/")),
    },
    StructureRule {
        finding: "Monorepo structure ('packages/' or 'apps/')",
        matches: |sets| sets.has_top_level_dir("packages") || sets.has_top_level_dir("apps"),
    },
    StructureRule {
        finding: "Django project ('manage.py' found)",
        matches: |sets| sets.files.iter().any(|p| p.ends_with("manage.py")),
    },
    StructureRule {
        finding: "Dockerized environment ('Dockerfile' or 'docker-compose.yml')",
        matches: |sets| {
            sets.files.iter().any(|p| matches!(basename(p), "Dockerfile" | "docker-compose.yml"))
        },
    },
    StructureRule {
        finding: "CI/CD configured (GitHub Actions)",
        matches: |sets| sets.dirs.contains(".github/workflows"),
    },
];

pub fn detect_structure(entries: &[Entry]) -> Vec<String> {
    let sets = PathSets::new(entries);
    RULES.iter().filter(|rule| (rule.matches)(&sets)).map(|rule| rule.finding.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rules_fire_on_flat_repo() {
        let entries = vec![Entry::file("README.md"), Entry::file("main.go")];
        assert!(detect_structure(&entries).is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let entries = vec![
            Entry::directory(".github/workflows"),
            Entry::file("deploy/Dockerfile"),
            Entry::file("backend/manage.py"),
            Entry::file("packages/ui/index.ts"),
            Entry::file("src/lib.rs"),
        ];
        let findings = detect_structure(&entries);
        assert_eq!(findings.len(), 5);
        assert!(findings[0].contains("'src' layout"));
        assert!(findings[1].contains("Monorepo"));
        assert!(findings[2].contains("Django"));
        assert!(findings[3].contains("Dockerized"));
        assert!(findings[4].contains("GitHub Actions"));
    }

    #[test]
    fn test_src_rule_needs_a_file_under_src() {
        assert!(detect_structure(&[Entry::directory("src")]).is_empty());
        assert!(detect_structure(&[Entry::file("lib/src/a.c")]).is_empty());
    }

    #[test]
    fn test_monorepo_from_directory_entry_or_nested_file() {
        assert_eq!(detect_structure(&[Entry::directory("apps")]).len(), 1);
        assert_eq!(detect_structure(&[Entry::file("apps/web/page.tsx")]).len(), 1);
        assert!(detect_structure(&[Entry::file("tools/packages/x.js")]).is_empty());
    }

    #[test]
    fn test_docker_rule_matches_exact_basenames_only() {
        assert_eq!(detect_structure(&[Entry::file("docker-compose.yml")]).len(), 1);
        assert!(detect_structure(&[Entry::file("Dockerfile.dev")]).is_empty());
        assert!(detect_structure(&[Entry::file("docs/NotADockerfile")]).is_empty());
    }

    #[test]
    fn test_ci_rule_requires_directory_entry() {
        assert!(detect_structure(&[Entry::file(".github/workflows")]).is_empty());
        assert_eq!(detect_structure(&[Entry::directory(".github/workflows")]).len(), 1);
    }
}
