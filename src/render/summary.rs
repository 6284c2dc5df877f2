//! Console report: summary panel plus a findings table.

use crate::analysis::AnalysisResult;
use crate::domain::{RepoId, RepoMetadata};
use crate::utils::format_with_commas;
use console::style;
use unicode_width::UnicodeWidthStr;

const NO_DESCRIPTION: &str = "No description.";

pub fn render_console_report(
    repo: &RepoId,
    metadata: &RepoMetadata,
    analysis: &AnalysisResult,
    top_languages: usize,
) -> String {
    format!("\n{}\n{}", render_summary(repo, metadata), render_findings(analysis, top_languages))
}

/// Boxed panel with stars, forks, open issues and the description.
pub fn render_summary(repo: &RepoId, metadata: &RepoMetadata) -> String {
    let title = format!(" Oracle Report for {} ", repo);
    let stats = format!(
        "⭐ {} │ 🍴 {} │ 🐞 {} issues",
        format_with_commas(metadata.stargazers_count),
        format_with_commas(metadata.forks_count),
        format_with_commas(metadata.open_issues_count)
    );
    // Collapsed to one line so the panel borders stay aligned.
    let description = metadata
        .description
        .as_deref()
        .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let inner = [stats.width(), description.width(), title.width() + 2].into_iter().max().unwrap_or(0);

    let mut lines = Vec::with_capacity(4);
    let top_fill = inner + 1 - title.width();
    lines.push(style(format!("╭─{}{}╮", title, "─".repeat(top_fill))).green().to_string());
    lines.push(panel_line(&stats, inner, |s| style(s).cyan().bold().to_string()));
    lines.push(panel_line(&description, inner, |s| style(s).italic().to_string()));
    lines.push(style(format!("╰{}╯", "─".repeat(inner + 2))).green().to_string());
    lines.join("\n")
}

fn panel_line(text: &str, inner: usize, paint: impl Fn(&str) -> String) -> String {
    let padding = " ".repeat(inner - text.width());
    format!("{} {}{} {}", style("│").green(), paint(text), padding, style("│").green())
}

/// Two-column table of languages, architecture, dependencies and red flags.
pub fn render_findings(analysis: &AnalysisResult, top_languages: usize) -> String {
    let mut rows: Vec<(&str, Vec<String>)> = Vec::new();

    let languages = analysis.top_languages(top_languages);
    if !languages.is_empty() {
        let joined = languages
            .iter()
            .map(|(lang, count)| format!("{} ({} files)", lang, count))
            .collect::<Vec<_>>()
            .join(", ");
        rows.push(("🗣️ Top Languages", vec![joined]));
    }

    if !analysis.structure_findings.is_empty() {
        rows.push((
            "🏛️ Architecture",
            analysis.structure_findings.iter().map(|f| format!("- {}", f)).collect(),
        ));
    }

    if !analysis.dependency_files.is_empty() {
        let names = analysis.dependency_files.iter().cloned().collect::<Vec<_>>().join(", ");
        rows.push(("📦 Dependencies", vec![format!("Found: {}", style(names).cyan())]));
    }

    if analysis.risky_paths.is_empty() {
        rows.push((
            "🚩 Red Flags",
            vec![style("✅ No obvious secret files found.").green().to_string()],
        ));
    } else {
        rows.push((
            "🚩 Red Flags",
            vec![style(format!(
                "Potential secrets or config found in: {}",
                analysis.risky_paths.join(", ")
            ))
            .yellow()
            .to_string()],
        ));
    }

    let label_width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    let mut lines = Vec::new();
    for (label, values) in rows {
        let pad = " ".repeat(label_width - label.width());
        for (idx, value) in values.iter().enumerate() {
            if idx == 0 {
                lines.push(format!("{}{}  {}", style(label).magenta().bold(), pad, value));
            } else {
                lines.push(format!("{}  {}", " ".repeat(label_width), value));
            }
        }
    }
    lines.join("\n")
}
