use serde_json::json;
use serenity_junit_exporter::junit::aggregate::{Aggregation, FailureRow};
use serenity_junit_exporter::junit::junit_model::RunTotals;
use serenity_junit_exporter::junit::normalize::{NormalizeOptions, normalize};
use serenity_junit_exporter::report::console::{
    count_table, failure_table, format_console_report, summary_table, threshold_table,
};
use serenity_junit_exporter::report::env_file::{env_entries, render_env_file, write_env_file};
use serenity_junit_exporter::report::table::{Align, Table};
use serenity_junit_exporter::report::threshold::{ExitDecision, ThresholdCheck};

use crate::common::utils::doc;

mod common;

// ============================================================================
// Helper builders
// ============================================================================

/// Four tests: one success, one failure, one error, one unknown.
fn mixed_aggregation() -> Aggregation {
    let docs = [
        json!({"testCaseName": "Login", "methodName": "logIn", "result": "SUCCESS"}),
        json!({
            "testCaseName": "Checkout", "methodName": "pay", "result": "FAILURE",
            "testFailureCause": {"message": "card declined", "stackTrace": [
                {"declaringClass": "Pay", "methodName": "charge", "fileName": "Pay.java", "lineNumber": 7}
            ]}
        }),
        json!({"testCaseName": "Search", "methodName": "find", "result": "ERROR"}),
        json!({"testCaseName": "Later", "methodName": "wait", "result": "PENDING"}),
    ];
    let mut aggregation = Aggregation::new();
    for value in docs {
        aggregation.ingest(normalize(&doc(value), &NormalizeOptions::default()));
    }
    aggregation
}

fn totals(tests: usize, failures: usize, errors: usize) -> RunTotals {
    RunTotals {
        total_tests: tests,
        total_failures: failures,
        total_errors: errors,
        total_failures_and_errors: failures + errors,
    }
}

// ============================================================================
// 1. Threshold decisions
// ============================================================================

#[test]
fn threshold_exceeded_fails() {
    let check = ThresholdCheck::new(Some(5.0), 10.0);
    assert_eq!(check.decision(), ExitDecision::Fail);
    assert_eq!(check.decision().exit_code(), Some(1));
    assert!(!check.passed());
}

#[test]
fn threshold_met_passes() {
    let check = ThresholdCheck::new(Some(10.0), 10.0);
    assert_eq!(check.decision(), ExitDecision::Pass);
    assert_eq!(check.decision().exit_code(), Some(0));
    assert!(check.passed());
}

#[test]
fn threshold_unset_is_not_enforced() {
    let check = ThresholdCheck::new(None, 75.0);
    assert_eq!(check.decision(), ExitDecision::NotEnforced);
    assert_eq!(check.decision().exit_code(), None);
    // Display still compares against 0
    assert_eq!(check.effective_threshold(), 0.0);
    assert!(!check.passed());
}

// ============================================================================
// 2. Table rendering
// ============================================================================

#[test]
fn table_renders_borders_and_cells() {
    let mut table = Table::new(&["Name", "Count"]).align(0, Align::Left);
    table.add_row(["alpha", "1"]);
    table.add_row(["b", "22"]);
    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "+-------+-------+");
    assert_eq!(lines[1], "| Name  | Count |");
    assert_eq!(lines[2], "+-------+-------+");
    assert_eq!(lines[3], "| alpha |   1   |");
    assert_eq!(lines[4], "| b     |  22   |");
    assert_eq!(lines[5], "+-------+-------+");
    assert!(!table.is_empty());
}

#[test]
fn table_title_spans_all_columns() {
    let mut table = Table::new(&["A", "B"]).with_title("Wide Title Here").without_header();
    table.add_row(["x", "y"]);
    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[1].contains("Wide Title Here"));
    let width = lines[0].chars().count();
    assert!(lines.iter().all(|l| l.chars().count() == width));
}

#[test]
fn table_wraps_and_splits_multiline_cells() {
    let mut table = Table::new(&["Col"]).max_width(0, 4).align_all(Align::Left);
    table.add_row(["abcdefgh\nxy"]);
    let rendered = table.render();
    assert!(rendered.contains("| abcd |"));
    assert!(rendered.contains("| efgh |"));
    assert!(rendered.contains("| xy   |"));
}

// ============================================================================
// 3. Console sections
// ============================================================================

#[test]
fn summary_table_values() {
    let rendered = summary_table(&totals(10, 1, 0)).render();
    assert!(rendered.contains("Test Summary"));
    assert!(rendered.contains("Total tests"));
    assert!(rendered.contains("Total errors+failures"));
    assert!(rendered.contains("10.00%"));
}

#[test]
fn failure_table_rows() {
    let rows = vec![FailureRow {
        test_case: "pay - Checkout".into(),
        message: "card declined".into(),
        stack_trace: "\nat Pay.charge (Pay.java:7)".into(),
    }];
    let table = failure_table("Failures", &rows);
    let rendered = table.render();
    assert!(!table.is_empty());
    assert!(failure_table("Errors", &[]).is_empty());
    assert!(rendered.contains("Failures"));
    assert!(rendered.contains("Stack Trace"));
    assert!(rendered.contains("pay - Checkout"));
    assert!(rendered.contains("at Pay.charge (Pay.java:7)"));
}

#[test]
fn count_and_threshold_tables() {
    assert!(count_table("Errors", "Total Errors", 3).render().contains("| 3"));

    let passed = threshold_table(&ThresholdCheck::new(Some(20.0), 12.5)).render();
    assert!(passed.contains("Acceptance Threshold Check"));
    assert!(passed.contains("20.0%"));
    assert!(passed.contains("12.50%"));
    assert!(passed.contains("PASSED"));

    let failed = threshold_table(&ThresholdCheck::new(Some(5.0), 10.0)).render();
    assert!(failed.contains("FAILED"));
}

#[test]
fn console_report_sections() {
    let aggregation = mixed_aggregation();
    let check = ThresholdCheck::new(Some(60.0), aggregation.failure_rate());
    let output = format_console_report(&aggregation, &check);

    assert!(output.contains("pay - Checkout"));
    assert!(output.contains("card declined"));
    assert!(output.contains("find - Search"));
    assert!(output.contains("Total Failures"));
    assert!(output.contains("Total Errors"));
    assert!(output.contains("50.00%"));
    assert!(output.contains("PASSED"));
    assert!(!output.contains("wait - Later"));
}

#[test]
fn console_report_all_green_omits_detail_tables() {
    let mut aggregation = Aggregation::new();
    aggregation.ingest(normalize(&doc(json!({"result": "SUCCESS"})), &NormalizeOptions::default()));
    let output = format_console_report(&aggregation, &ThresholdCheck::new(None, 0.0));

    assert!(!output.contains("Stack Trace"));
    assert!(!output.contains("Total Failures"));
    assert!(output.contains("Test Summary"));
    assert!(output.contains("0.00%"));
}

// ============================================================================
// 4. Environment file
// ============================================================================

#[test]
fn env_entries_keys_in_order() {
    let keys: Vec<&str> = env_entries(&mixed_aggregation())
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(
        keys,
        [
            "TOTAL_TESTS",
            "TOTAL_FAILURES",
            "TOTAL_ERRORS",
            "TOTAL_ERRORS_FAILED",
            "FAILURE_RATE",
            "FAILURES_TESTS_OUTPUT",
            "ERRORS_TESTS_OUTPUT",
        ]
    );
}

#[test]
fn env_file_metrics() {
    let contents = render_env_file(&mixed_aggregation());
    assert!(contents.starts_with("TOTAL_TESTS=4\n"));
    assert!(contents.contains("\nTOTAL_FAILURES=1\n"));
    assert!(contents.contains("\nTOTAL_ERRORS=1\n"));
    assert!(contents.contains("\nTOTAL_ERRORS_FAILED=2\n"));
    assert!(contents.contains("\nFAILURE_RATE=50.0\n"));
    assert!(contents.contains("FAILURES_TESTS_OUTPUT=+"));
    assert!(contents.contains("ERRORS_TESTS_OUTPUT=+"));
    assert!(contents.contains("card declined"));
}

#[test]
fn env_file_empty_run() {
    let contents = render_env_file(&Aggregation::new());
    assert!(contents.contains("TOTAL_TESTS=0\n"));
    assert!(contents.contains("FAILURE_RATE=0.0\n"));
}

#[test]
fn write_env_file_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let ok_path = dir.path().join("out.env");
    write_env_file(&ok_path, "TOTAL_TESTS=1\n").unwrap();
    assert_eq!(std::fs::read_to_string(&ok_path).unwrap(), "TOTAL_TESTS=1\n");

    let bad_path = dir.path().join("missing").join("out.env");
    assert!(write_env_file(&bad_path, "X=1\n").is_err());
}
