use tracing::{debug, warn};

use crate::junit::junit_model::{FailureDetail, NormalizedSuite, NormalizedTestCase};
use crate::junit::stack_trace::{format_stack_trace, last_frame};
use crate::serenity::serenity_model::{FailureCause, RawResultDocument, TestOutcome};

/// Divider between the short failure summary and the full trace.
pub const TRACE_SEPARATOR: &str =
    "-----------------------------------------------------------------";

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Append the fully formatted stack trace to failure messages
    pub full_stack_trace: bool,
}

/// Turn one Serenity document into the test cases of its suite.
///
/// A document with a non-empty data table yields one case per row whose
/// result is not `UNDEFINED`; the summed step duration is split evenly across
/// those rows. Otherwise the document is a single case.
pub fn normalize(doc: &RawResultDocument, options: &NormalizeOptions) -> NormalizedSuite {
    let test_case_name = doc.test_case_name();
    let method_name = doc.method_name();

    let (declared_tests, cases) = match doc.data_rows() {
        Some(rows) => {
            let executed = rows.iter().filter(|row| !row.outcome().is_undefined()).count();
            let duration_seconds = if executed == 0 {
                warn!(
                    suite = doc.suite_name(),
                    rows = rows.len(),
                    "every data-table row is UNDEFINED, no test cases emitted"
                );
                0.0
            } else {
                doc.step_duration_ms() as f64 / 1000.0 / executed as f64
            };

            let cases: Vec<NormalizedTestCase> = rows
                .iter()
                .filter(|row| {
                    let undefined = row.outcome().is_undefined();
                    if undefined {
                        debug!(values = %row.joined_values(), "skipping UNDEFINED row");
                    }
                    !undefined
                })
                .map(|row| {
                    let name = format!(
                        "{} {} - {}",
                        method_name,
                        row.joined_values(),
                        test_case_name
                    );
                    let outcome = row.outcome();
                    debug!(test_case = %name, %outcome, "parameterized test case");
                    // The failure cause is recorded once per document, so every
                    // failing row reports the same one.
                    build_case(
                        name,
                        duration_seconds,
                        outcome,
                        doc.test_failure_cause.as_ref(),
                        options,
                    )
                })
                .collect();

            (rows.len(), cases)
        }
        None => {
            let name = format!("{} - {}", method_name, test_case_name);
            let outcome = doc.outcome();
            debug!(test_case = %name, %outcome, "single test case");
            let case = build_case(
                name,
                doc.duration_ms() as f64 / 1000.0,
                outcome,
                doc.test_failure_cause.as_ref(),
                options,
            );
            (1, vec![case])
        }
    };

    NormalizedSuite {
        name: doc.suite_name().to_string(),
        declared_tests,
        cases,
    }
}

fn build_case(
    name: String,
    duration_seconds: f64,
    outcome: TestOutcome,
    cause: Option<&FailureCause>,
    options: &NormalizeOptions,
) -> NormalizedTestCase {
    NormalizedTestCase {
        name,
        duration_seconds,
        outcome,
        failure: failure_detail(outcome, cause, options),
    }
}

/// Default message when Serenity did not record one.
pub fn default_failure_message(outcome: TestOutcome) -> &'static str {
    match outcome {
        TestOutcome::Failure => "Test failed",
        _ => "Test encountered an error",
    }
}

/// Build the failure detail for a non-successful outcome.
///
/// Returns `None` for `SUCCESS`.
pub fn failure_detail(
    outcome: TestOutcome,
    cause: Option<&FailureCause>,
    options: &NormalizeOptions,
) -> Option<FailureDetail> {
    if outcome.is_success() {
        return None;
    }

    let message = cause
        .and_then(|c| c.message.clone())
        .unwrap_or_else(|| default_failure_message(outcome).to_string());
    let stack_frames = cause.map(|c| c.stack_trace.clone()).unwrap_or_default();

    let mut composed_message = message.clone();
    if let Some(last) = last_frame(&stack_frames) {
        let class_method = last.qualified_method();
        let file = format!("({})", last.file_label());
        let line = format!("({})", last.line_label());

        composed_message.push_str(&format!(
            "\nLast stack trace:\n {} \n \nFile: {} \nLine Number:{}",
            class_method, file, line
        ));

        if options.full_stack_trace {
            composed_message.push_str(&format!(
                "\n{} {} {}\n{}\n{}",
                class_method,
                file,
                line,
                TRACE_SEPARATOR,
                format_stack_trace(&stack_frames)
            ));
        }
    }

    Some(FailureDetail {
        message,
        composed_message,
        stack_frames,
    })
}
