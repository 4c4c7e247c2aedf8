use std::path::Path;

use crate::error::ExportError;
use crate::junit::aggregate::Aggregation;
use crate::junit::writer::format_decimal;
use crate::report::console::failure_table;

/// `KEY=VALUE` pairs exported for later CI steps, in file order.
pub fn env_entries(aggregation: &Aggregation) -> Vec<(&'static str, String)> {
    let totals = &aggregation.totals;
    vec![
        ("TOTAL_TESTS", totals.total_tests.to_string()),
        ("TOTAL_FAILURES", totals.total_failures.to_string()),
        ("TOTAL_ERRORS", totals.total_errors.to_string()),
        (
            "TOTAL_ERRORS_FAILED",
            totals.total_failures_and_errors.to_string(),
        ),
        ("FAILURE_RATE", format_decimal(totals.failure_rate())),
        (
            "FAILURES_TESTS_OUTPUT",
            failure_table("Failures", &aggregation.failures).to_string(),
        ),
        (
            "ERRORS_TESTS_OUTPUT",
            failure_table("Errors", &aggregation.errors).to_string(),
        ),
    ]
}

/// Render the env file. Table values span several lines and are written
/// verbatim, so the file is not strictly one entry per line.
pub fn render_env_file(aggregation: &Aggregation) -> String {
    env_entries(aggregation)
        .into_iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}

pub fn write_env_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|source| ExportError::WriteEnvFile {
        path: path.to_path_buf(),
        source,
    })
}
