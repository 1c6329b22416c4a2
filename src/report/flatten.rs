//! Suite tree flattening.
//!
//! Walks each result file's suite tree depth-first and emits one `Row` per
//! test. A suite's own tests come before the tests of its child suites.

use super::types::Row;
use crate::types::{Report, Suite};
use log::debug;

/// Append one row per test in `suite` and all of its descendants to `rows`.
///
/// `parent_file` is the file of the enclosing result and is passed unchanged
/// to every nested suite.
pub fn collect_rows(suite: &Suite, rows: &mut Vec<Row>, parent_file: &str) {
    let suite_title = suite.display_title();
    rows.extend(suite.tests.iter().map(|test| Row::from_test(test, suite_title, parent_file)));

    for child in &suite.suites {
        collect_rows(child, rows, parent_file);
    }
}

/// Flatten every result file of `report`, preserving result, suite and test order.
pub fn flatten_report(report: &Report) -> Vec<Row> {
    let mut rows = Vec::new();

    for result in &report.results {
        let file = result.source_file();
        let before = rows.len();
        for suite in &result.suites {
            collect_rows(suite, &mut rows, file);
        }
        debug!("Collected {} row(s) from {:?}", rows.len() - before, file);
    }

    rows
}
