//! Report type definitions for the rendering model.
//!
//! Rows are the flattened, cell-ready form of each test. Groups cluster rows
//! into one detail table each.

use crate::types::{Test, display_value};

/// Placeholder used when a value is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Default heading for the generated document.
pub const DEFAULT_TITLE: &str = "Cypress Test Report";

/// A single flattened test, ready to be rendered as one table line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub suite_title: String,
    pub file: String,
    pub title: String,
    pub full_title: String,
    pub state: String,
    /// Empty when the test has no duration; "0" is kept as-is
    pub duration: String,
    /// Error message with newlines collapsed to spaces, or "N/A"
    pub error: String,
    /// Code snippet with newlines written as a literal `\n`
    pub code: String,
}

impl Row {
    /// Build the row for `test`, found in a suite titled `suite_title` under `file`.
    pub fn from_test(test: &Test, suite_title: &str, file: &str) -> Self {
        let error = match test.err.as_ref().and_then(|e| e.message.as_deref()) {
            Some(message) if !message.is_empty() => single_line(message, " "),
            _ => NOT_AVAILABLE.to_string(),
        };

        let code = match test.code.as_deref() {
            Some(code) if !code.is_empty() => single_line(code, "\\n"),
            _ => String::new(),
        };

        Row {
            suite_title: suite_title.to_string(),
            file: file.to_string(),
            title: test.title.clone().unwrap_or_default(),
            full_title: test.full_title.clone().unwrap_or_default(),
            state: test.state.clone().unwrap_or_default(),
            duration: display_value(test.duration.as_ref()),
            error,
            code,
        }
    }

    /// Key of the detail table this row belongs to.
    pub fn group_key(&self) -> String {
        if self.file.is_empty() { self.suite_title.clone() } else { format!("{} ({})", self.suite_title, self.file) }
    }
}

/// Replace every line break with `separator`.
fn single_line(text: &str, separator: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', separator)
}

/// Rows sharing one group key, in flatten order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteGroup {
    pub key: String,
    pub rows: Vec<Row>,
}

/// Per-state counts over all rendered rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub pending: usize,
    pub skipped: usize,
    /// Rows whose state is none of the above (including empty)
    pub other: usize,
    pub total: usize,
}

/// Knobs for the Markdown renderer.
///
/// Everything the renderer needs from the outside world is passed in here,
/// so rendering stays a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// First line of the document
    pub title: String,
    /// Image reference shown in the metadata block ("N/A" when unset or empty)
    pub image_ref: Option<String>,
    /// Escape `|` in cell values so they cannot split a table row
    pub escape_pipes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { title: DEFAULT_TITLE.to_string(), image_ref: None, escape_pipes: false }
    }
}
