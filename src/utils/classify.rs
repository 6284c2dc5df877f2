//! File classification helpers for detecting languages and dependency manifests.

/// Extension (without dot, lowercase) to language name.
const LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("py", "Python"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("go", "Go"),
    ("rs", "Rust"),
    ("java", "Java"),
    ("rb", "Ruby"),
    ("c", "C"),
    ("cpp", "C++"),
    ("md", "Markdown"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("yml", "YAML"),
    ("json", "JSON"),
];

/// Look up the language for a file extension.
///
/// # Arguments
/// * `extension` - Extension without the leading dot (case-insensitive)
///
/// # Returns
/// The language name, or `None` for unrecognized extensions
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    let ext = extension.to_ascii_lowercase();
    LANGUAGE_TABLE.iter().find(|(known, _)| *known == ext).map(|(_, language)| *language)
}

/// Check if a file name is a known dependency manifest.
///
/// # Arguments
/// * `name` - Final path segment (exact, case-sensitive match)
///
/// # Returns
/// `true` if the name matches a known manifest file
pub fn is_manifest_file(name: &str) -> bool {
    matches!(
        name,
        "pyproject.toml"
            | "requirements.txt"
            | "Pipfile"
            | "setup.py"
            | "package.json"
            | "composer.json"
            | "go.mod"
            | "pom.xml"
            | "build.gradle"
            | "build.gradle.kts"
            | "Cargo.toml"
            | "Gemfile"
            | "mix.exs"
            | "pubspec.yaml"
    )
}
