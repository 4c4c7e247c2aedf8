use crate::junit::aggregate::{Aggregation, FailureRow};
use crate::junit::junit_model::RunTotals;
use crate::junit::writer::format_decimal;
use crate::report::table::{Align, Table};
use crate::report::threshold::ThresholdCheck;

// ============================================================================
// Console reporter — summary tables printed after the XML is written
// ============================================================================

const CASE_WIDTH: usize = 73;
const MESSAGE_WIDTH: usize = 73;
const TRACE_WIDTH: usize = 120;

/// Detail table for failing or erroring cases.
pub fn failure_table(title: &str, rows: &[FailureRow]) -> Table {
    let mut table = Table::new(&["Test Case", "Message", "Stack Trace"])
        .with_title(title)
        .align_all(Align::Left)
        .min_width(0, CASE_WIDTH)
        .max_width(0, CASE_WIDTH)
        .min_width(1, MESSAGE_WIDTH)
        .max_width(1, MESSAGE_WIDTH)
        .min_width(2, TRACE_WIDTH)
        .max_width(2, TRACE_WIDTH);

    for row in rows {
        table.add_row([
            row.test_case.as_str(),
            row.message.as_str(),
            row.stack_trace.as_str(),
        ]);
    }
    table
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn summary_table(totals: &RunTotals) -> Table {
    let mut table = Table::new(&["Metric", "Value"])
        .with_title("Test Summary")
        .without_header()
        .min_width_all(30)
        .align(0, Align::Right)
        .align(1, Align::Left);

    table.add_row(["Total tests".to_string(), totals.total_tests.to_string()]);
    table.add_row([
        "Total errors+failures".to_string(),
        totals.total_failures_and_errors.to_string(),
    ]);
    table.add_row(["Failure rate".to_string(), format_percent(totals.failure_rate())]);
    table
}

/// Single-row count table such as `Total Failures | 3`.
pub fn count_table(title: &str, label: &str, count: usize) -> Table {
    let mut table = Table::new(&["Type", "Count"])
        .with_title(title)
        .without_header()
        .min_width_all(30)
        .align(0, Align::Right)
        .align(1, Align::Left);
    table.add_row([label.to_string(), count.to_string()]);
    table
}

pub fn threshold_table(check: &ThresholdCheck) -> Table {
    let status = if check.passed() { "PASSED" } else { "FAILED" };
    let mut table = Table::new(&["Threshold", "Failure Rate", "Status"])
        .with_title("Acceptance Threshold Check")
        .min_width_all(19);
    table.add_row([
        format!("{}%", format_decimal(check.effective_threshold())),
        format_percent(check.failure_rate),
        status.to_string(),
    ]);
    table
}

/// Format the complete console report.
///
/// Detail tables are only included when they have rows; the summary and the
/// threshold check are always present.
pub fn format_console_report(aggregation: &Aggregation, check: &ThresholdCheck) -> String {
    let totals = &aggregation.totals;
    let mut sections: Vec<Table> = Vec::new();

    for table in [
        failure_table("Failures", &aggregation.failures),
        failure_table("Errors", &aggregation.errors),
    ] {
        if !table.is_empty() {
            sections.push(table);
        }
    }

    sections.push(summary_table(totals));

    if totals.total_failures > 0 {
        sections.push(count_table("Failures", "Total Failures", totals.total_failures));
    }
    if totals.total_errors > 0 {
        sections.push(count_table("Errors", "Total Errors", totals.total_errors));
    }

    sections.push(threshold_table(check));

    sections
        .iter()
        .map(Table::render)
        .collect::<Vec<_>>()
        .join("\n")
}
