/// Tests for the Markdown renderer
#[cfg(test)]
mod tests {
    use crate::report::markdown::{format_pass_percent, render_markdown};
    use crate::report::stats::group_rows;
    use crate::report::types::{RenderOptions, Row, SuiteGroup};
    use crate::types::{Stats, Test, TestError};
    use serde_json::json;

    fn full_stats() -> Stats {
        Stats {
            suites: Some(json!(2)),
            tests: Some(json!(3)),
            passes: Some(json!(2)),
            failures: Some(json!(1)),
            pending: Some(json!(0)),
            skipped: Some(json!(0)),
            pass_percent: Some(json!(66.6666)),
            start: Some(json!("2024-05-01T10:00:00.000Z")),
            end: Some(json!("2024-05-01T10:00:05.000Z")),
            duration: Some(json!(5000)),
        }
    }

    fn passing_row(suite: &str, file: &str, title: &str) -> Row {
        let test = Test {
            title: Some(title.into()),
            state: Some("passed".into()),
            duration: Some(json!(12)),
            err: Some(TestError::default()),
            ..Test::default()
        };
        Row::from_test(&test, suite, file)
    }

    #[test]
    fn test_full_document() {
        let groups = group_rows(vec![passing_row("Home", "home.cy.js", "loads")]);
        let md = render_markdown(&full_stats(), &groups, &RenderOptions::default());

        let expected = "Cypress Test Report\n\
---\n\
### Overview of Test Results\n\
| Suites | Tests | Passes | Failures | Pending | Skipped | Pass % |\n\
| :----- | :---- | :----- | :------- | :------ | :------ | :----- |\n\
| 2 | 3 | 2 | 1 | 0 | 0 | 66.67 |\n\
\n\
**Image Name:** `N/A`\n\
\n\
**Run Start:** `2024-05-01T10:00:00.000Z`\n\
\n\
**Run End:** `2024-05-01T10:00:05.000Z`\n\
\n\
**Duration:** `5000 ms`\n\
\n\
---\n\
### Test Details by Suite\n\
\n\
#### Suite: `Home (home.cy.js)`\n\
| Title | State | Duration (ms) | Error Message | Code |\n\
| :------------------- | :---- | :------------ | :------------ | :---- |\n\
| loads | passed | 12 | N/A |  |\n\
\n\
\n\
---";
        assert_eq!(md, expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let groups = group_rows(vec![passing_row("A", "a.cy.js", "one"), passing_row("B", "", "two")]);
        let options = RenderOptions { image_ref: Some("app:1.2.3".into()), ..RenderOptions::default() };

        let first = render_markdown(&full_stats(), &groups, &options);
        let second = render_markdown(&full_stats(), &groups, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_groups_still_renders_overview() {
        let md = render_markdown(&full_stats(), &[], &RenderOptions::default());
        assert!(md.contains("### Overview of Test Results"));
        assert!(md.ends_with("### Test Details by Suite\n\n---"));
        assert!(!md.contains("#### Suite:"));
    }

    #[test]
    fn test_empty_stats() {
        let md = render_markdown(&Stats::default(), &[], &RenderOptions::default());
        assert!(md.contains("|  |  |  |  |  |  | 0.00 |\n"));
        assert!(md.contains("**Run Start:** `N/A`"));
        assert!(md.contains("**Run End:** `N/A`"));
        assert!(md.contains("**Duration:** `N/A ms`"));
    }

    #[test]
    fn test_image_ref() {
        let unset = render_markdown(&Stats::default(), &[], &RenderOptions::default());
        assert!(unset.contains("**Image Name:** `N/A`"));

        let empty = RenderOptions { image_ref: Some(String::new()), ..RenderOptions::default() };
        assert!(render_markdown(&Stats::default(), &[], &empty).contains("**Image Name:** `N/A`"));

        let set = RenderOptions { image_ref: Some("app:1.2.3".into()), ..RenderOptions::default() };
        assert!(render_markdown(&Stats::default(), &[], &set).contains("**Image Name:** `app:1.2.3`"));
    }

    #[test]
    fn test_custom_title() {
        let options = RenderOptions { title: "Nightly E2E".into(), ..RenderOptions::default() };
        let md = render_markdown(&Stats::default(), &[], &options);
        assert!(md.starts_with("Nightly E2E\n---\n"));
    }

    #[test]
    fn test_pass_percent_formatting() {
        assert_eq!(format_pass_percent(Some(&json!(66.6666))), "66.67");
        assert_eq!(format_pass_percent(Some(&json!(100))), "100.00");
        assert_eq!(format_pass_percent(Some(&json!("50"))), "50.00");
        assert_eq!(format_pass_percent(Some(&json!(0))), "0.00");
        assert_eq!(format_pass_percent(Some(&json!(0.125))), "0.13");
        assert_eq!(format_pass_percent(Some(&json!(3.125))), "3.13");
        assert_eq!(format_pass_percent(Some(&json!(12.125))), "12.13");
        assert_eq!(format_pass_percent(Some(&json!(87.375))), "87.38");
        assert_eq!(format_pass_percent(Some(&json!("n/a"))), "0.00");
        assert_eq!(format_pass_percent(None), "0.00");
    }

    #[test]
    fn test_duration_zero_vs_absent() {
        let zero_test = Test { title: Some("z".into()), duration: Some(json!(0)), ..Test::default() };
        let zero = Row::from_test(&zero_test, "S", "");
        let absent = Row::from_test(&Test { title: Some("a".into()), ..Test::default() }, "S", "");
        let md = render_markdown(&Stats::default(), &group_rows(vec![zero, absent]), &RenderOptions::default());

        assert!(md.contains("| z |  | 0 | N/A |  |\n"));
        assert!(md.contains("| a |  |  | N/A |  |\n"));
    }

    #[test]
    fn test_groups_render_in_order() {
        let groups = vec![
            SuiteGroup { key: "Zeta".into(), rows: vec![passing_row("Zeta", "", "z")] },
            SuiteGroup { key: "Alpha".into(), rows: vec![passing_row("Alpha", "", "a")] },
        ];
        let md = render_markdown(&Stats::default(), &groups, &RenderOptions::default());

        let zeta = md.find("#### Suite: `Zeta`").unwrap();
        let alpha = md.find("#### Suite: `Alpha`").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_pipes_verbatim_by_default() {
        let test = Test { title: Some("a | b".into()), ..Test::default() };
        let groups = group_rows(vec![Row::from_test(&test, "S", "")]);
        let md = render_markdown(&Stats::default(), &groups, &RenderOptions::default());
        assert!(md.contains("| a | b |"));
    }

    #[test]
    fn test_pipes_escaped_when_requested() {
        let test = Test {
            title: Some("a | b".into()),
            err: Some(TestError { message: Some("x|y".into()) }),
            ..Test::default()
        };
        let groups = group_rows(vec![Row::from_test(&test, "S|T", "")]);
        let options = RenderOptions { escape_pipes: true, ..RenderOptions::default() };
        let md = render_markdown(&Stats::default(), &groups, &options);

        assert!(md.contains("#### Suite: `S\\|T`"));
        assert!(md.contains("| a \\| b |  |  | x\\|y |  |\n"));
    }
}
