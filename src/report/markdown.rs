//! Markdown rendering.
//!
//! Produces the overview table, the run metadata block and one detail table
//! per suite group, as a single document.
//!
//! Cell values are inserted verbatim unless `RenderOptions::escape_pipes` is
//! set, so a `|` inside a title or error message splits the row by default.

use super::types::{NOT_AVAILABLE, RenderOptions, SuiteGroup};
use crate::types::{Stats, display_value, is_present};
use serde_json::Value;

const OVERVIEW_HEADER: &str = "| Suites | Tests | Passes | Failures | Pending | Skipped | Pass % |\n\
                               | :----- | :---- | :----- | :------- | :------ | :------ | :----- |\n";

const DETAIL_HEADER: &str = "| Title | State | Duration (ms) | Error Message | Code |\n\
                             | :------------------- | :---- | :------------ | :------------ | :---- |\n";

/// Render the full Markdown document.
///
/// Output depends only on the arguments: the same inputs always give
/// byte-identical output.
pub fn render_markdown(stats: &Stats, groups: &[SuiteGroup], options: &RenderOptions) -> String {
    let mut md = String::new();

    md.push_str(&format!("{}\n---\n", options.title));
    md.push_str("### Overview of Test Results\n");
    md.push_str(OVERVIEW_HEADER);
    md.push_str(&format!(
        "| {} | {} | {} | {} | {} | {} | {} |\n",
        display_value(stats.suites.as_ref()),
        display_value(stats.tests.as_ref()),
        display_value(stats.passes.as_ref()),
        display_value(stats.failures.as_ref()),
        display_value(stats.pending.as_ref()),
        display_value(stats.skipped.as_ref()),
        format_pass_percent(stats.pass_percent.as_ref()),
    ));

    let image_ref = options.image_ref.as_deref().filter(|r| !r.is_empty()).unwrap_or(NOT_AVAILABLE);
    md.push_str(&format!("\n**Image Name:** `{}`\n\n", image_ref));
    md.push_str(&format!("**Run Start:** `{}`\n\n", or_not_available(stats.start.as_ref())));
    md.push_str(&format!("**Run End:** `{}`\n\n", or_not_available(stats.end.as_ref())));
    md.push_str(&format!("**Duration:** `{} ms`\n\n", or_not_available(stats.duration.as_ref())));
    md.push_str("---\n### Test Details by Suite\n");

    for group in groups {
        md.push_str(&format!("\n#### Suite: `{}`\n", cell(&group.key, options)));
        md.push_str(DETAIL_HEADER);
        for row in &group.rows {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                cell(&row.title, options),
                cell(&row.state, options),
                row.duration,
                cell(&row.error, options),
                cell(&row.code, options),
            ));
        }
        md.push('\n');
    }

    md.push_str("\n---");
    md
}

/// Two decimal places when the value is a non-zero number, "0.00" otherwise.
///
/// Numeric strings are accepted since some reporters quote the percentage.
/// Ties round away from zero, so 3.125 renders as 3.13.
pub fn format_pass_percent(value: Option<&Value>) -> String {
    let percent = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match percent {
        Some(p) if p != 0.0 && p.is_finite() => format!("{:.2}", (p * 100.0).round() / 100.0),
        _ => "0.00".to_string(),
    }
}

fn or_not_available(value: Option<&Value>) -> String {
    if is_present(value) { display_value(value) } else { NOT_AVAILABLE.to_string() }
}

fn cell(text: &str, options: &RenderOptions) -> String {
    if options.escape_pipes { text.replace('|', "\\|") } else { text.to_string() }
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;
