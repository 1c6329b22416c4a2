/// Core data structures for the input report
///
/// This module defines the mochawesome-style JSON report shape that a Cypress
/// run writes to disk: aggregate stats plus a nested suite/test tree per spec file.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level report object
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct Report {
    /// Aggregate run statistics (absent = treated as empty)
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Stats,

    /// One entry per spec file that was executed
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<ResultFile>,
}

/// Aggregate statistics for the whole run
///
/// Every field is kept as a raw JSON value: the producing reporter emits numbers
/// for counts and ISO strings for timestamps, but nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub suites: Option<Value>,
    #[serde(default)]
    pub tests: Option<Value>,
    #[serde(default)]
    pub passes: Option<Value>,
    #[serde(default)]
    pub failures: Option<Value>,
    #[serde(default)]
    pub pending: Option<Value>,
    #[serde(default)]
    pub skipped: Option<Value>,
    #[serde(default)]
    pub pass_percent: Option<Value>,
    #[serde(default)]
    pub start: Option<Value>,
    #[serde(default)]
    pub end: Option<Value>,
    #[serde(default)]
    pub duration: Option<Value>,
}

/// Results for a single spec file
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFile {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub full_file: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suites: Vec<Suite>,
}

impl ResultFile {
    /// File name used to tag every row under this result.
    ///
    /// `file` wins when non-empty, then `fullFile`, then the empty string.
    pub fn source_file(&self) -> &str {
        [self.file.as_deref(), self.full_file.as_deref()]
            .into_iter()
            .flatten()
            .find(|f| !f.is_empty())
            .unwrap_or("")
    }
}

/// A (possibly nested) suite of tests
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct Suite {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tests: Vec<Test>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suites: Vec<Suite>,
}

impl Suite {
    pub const ROOT_TITLE: &'static str = "Root Suite";

    /// Display title, falling back to "Root Suite" for untitled suites
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => Self::ROOT_TITLE,
        }
    }

    /// Number of tests in this suite and every nested suite
    pub fn total_tests(&self) -> usize {
        self.tests.len() + self.suites.iter().map(Suite::total_tests).sum::<usize>()
    }
}

/// A single test case
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub full_title: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub duration: Option<Value>,
    #[serde(default)]
    pub err: Option<TestError>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Failure details attached to a test (an empty object for passing tests)
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct TestError {
    #[serde(default)]
    pub message: Option<String>,
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Render a raw JSON value the way it appears in a table cell.
///
/// Strings are unquoted, null becomes empty, everything else uses JSON formatting.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Whether a value counts as "present" for fallback purposes.
///
/// Absent, null, empty strings, `false` and numeric zero all fall back.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(_) => true,
    }
}

#[cfg(test)]
#[path = "data_structures_test.rs"]
mod data_structures_test;
