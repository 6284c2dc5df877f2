//! Report JSON generation.

use crate::analysis::AnalysisResult;
use crate::domain::{RepoId, RepoMetadata, REPORT_SCHEMA_VERSION};
use crate::scan::RepoTree;
use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::path::Path;

pub struct ReportInput<'a> {
    pub repo: &'a RepoId,
    pub branch: &'a str,
    pub metadata: &'a RepoMetadata,
    pub analysis: &'a AnalysisResult,
    pub tree: &'a RepoTree,
    pub entry_count: usize,
}

pub fn build_report(input: &ReportInput<'_>, include_timestamp: bool) -> Result<Value> {
    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    if include_timestamp {
        report.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    report.insert(
        "repository".to_string(),
        json!({
            "full_name": input.repo.to_string(),
            "owner": input.repo.owner,
            "name": input.repo.name,
            "branch": input.branch,
        }),
    );
    report.insert("metadata".to_string(), serde_json::to_value(input.metadata)?);
    report.insert("analysis".to_string(), serde_json::to_value(input.analysis)?);
    report.insert("entry_count".to_string(), json!(input.entry_count));
    report.insert(
        "tree".to_string(),
        json!({
            "files": input.tree.file_count(),
            "directories": input.tree.dir_count(),
            "implicit_directories": input.tree.implicit_dirs(),
        }),
    );
    Ok(Value::Object(report))
}

pub fn write_report(report_path: &Path, report: &Value) -> Result<()> {
    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(report_path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}
