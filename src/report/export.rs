//! Report export functions for Markdown and JSON formats.
//!
//! This module handles writing the rendered report (and the optional
//! machine-readable summary) to disk.

use super::stats::summarize_rows;
use super::types::SuiteGroup;
use crate::error::{ReportError, Result};
use log::debug;
use std::fs::{self, File};
use std::path::Path;

/// Write the rendered Markdown to `output_path`.
///
/// Overwrites any existing file. The parent directory must already exist.
pub fn write_markdown_report(output_path: &Path, markdown: &str) -> Result<()> {
    debug!("Writing {} bytes of markdown to {:?}", markdown.len(), output_path);
    fs::write(output_path, markdown).map_err(|e| ReportError::io(output_path, e))
}

/// Export a JSON summary of the rendered groups.
///
/// # Arguments
/// * `groups` - Grouped rows, in render order
/// * `output_path` - Path to write the JSON file
/// * `input_path` - Report the rows were read from
/// * `markdown_path` - Markdown report written alongside
pub fn export_json_summary(
    groups: &[SuiteGroup],
    output_path: &Path,
    input_path: &Path,
    markdown_path: &Path,
) -> Result<()> {
    use serde_json::json;

    let summary = summarize_rows(groups.iter().flat_map(|g| g.rows.iter()));
    let group_entries: Vec<_> = groups
        .iter()
        .map(|g| {
            json!({
                "key": g.key,
                "summary": summarize_rows(&g.rows),
                "tests": g.rows,
            })
        })
        .collect();

    let report = json!({
        "input": input_path.display().to_string(),
        "output": markdown_path.display().to_string(),
        "summary": summary,
        "groups": group_entries,
    });

    let file = File::create(output_path).map_err(|e| ReportError::io(output_path, e))?;
    serde_json::to_writer_pretty(file, &report).map_err(|e| ReportError::io(output_path, e.into()))?;

    Ok(())
}
