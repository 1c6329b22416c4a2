//! Grouping and summary statistics for flattened rows.

use super::types::{Row, RunSummary, SuiteGroup};
use std::collections::HashMap;

/// Group rows by `Row::group_key`, keeping keys in first-seen order.
///
/// Rows inside each group keep their relative order.
pub fn group_rows(rows: Vec<Row>) -> Vec<SuiteGroup> {
    let mut groups: Vec<SuiteGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let key = row.group_key();
        match index.get(&key) {
            Some(&i) => groups[i].rows.push(row),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(SuiteGroup { key, rows: vec![row] });
            }
        }
    }

    groups
}

/// Count rows by state.
///
/// States are matched exactly; anything unrecognized lands in `other`.
pub fn summarize_rows<'a>(rows: impl IntoIterator<Item = &'a Row>) -> RunSummary {
    let mut summary = RunSummary::default();

    for row in rows {
        match row.state.as_str() {
            "passed" => summary.passed += 1,
            "failed" => summary.failed += 1,
            "pending" => summary.pending += 1,
            "skipped" => summary.skipped += 1,
            _ => summary.other += 1,
        }
        summary.total += 1;
    }

    summary
}
