/// Report loading
///
/// Reads the JSON report a Cypress run leaves on disk and rejects reports
/// that carry no results.
use crate::error::{ReportError, Result};
use crate::types::{Report, Suite};
use log::debug;
use std::fs;
use std::path::Path;

/// Load and parse the report at `path`.
///
/// Fails with `MissingInputFile` when nothing exists at `path` and with
/// `EmptyResultSet` when `results` is absent or empty. Malformed JSON is
/// returned as-is; there is no partial recovery.
pub fn load_report(path: &Path) -> Result<Report> {
    if !path.exists() {
        return Err(ReportError::MissingInputFile(path.to_path_buf()));
    }

    debug!("Reading report from {:?}", path);
    let contents = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    let report: Report = serde_json::from_str(&contents)?;

    if report.results.is_empty() {
        return Err(ReportError::EmptyResultSet);
    }

    let total_tests: usize = report.results.iter().flat_map(|r| &r.suites).map(Suite::total_tests).sum();
    debug!("Loaded {} result file(s) with {} test(s) from {:?}", report.results.len(), total_tests, path);
    Ok(report)
}
