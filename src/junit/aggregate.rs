use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::ExportError;
use crate::junit::junit_model::{NormalizedSuite, RunTotals};
use crate::junit::normalize::{NormalizeOptions, normalize};
use crate::junit::sanitize::sanitize_for_xml;
use crate::junit::stack_trace::format_stack_trace;
use crate::serenity::loader::{list_result_files, load_result_document};
use crate::serenity::serenity_model::{TestOutcome, UNNAMED_TEST_CASE};

/// One line of the Failures / Errors detail tables.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureRow {
    pub test_case: String,
    pub message: String,
    pub stack_trace: String,
}

// ============================================================================
// Aggregation — everything a run collects before emitting
// ============================================================================

/// Suites in input order, run totals, and the failing cases by kind.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub suites: Vec<NormalizedSuite>,
    pub totals: RunTotals,
    pub failures: Vec<FailureRow>,
    pub errors: Vec<FailureRow>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a normalized suite, counting each of its cases.
    pub fn ingest(&mut self, suite: NormalizedSuite) {
        for case in &suite.cases {
            self.totals.record(case.outcome);

            let table = match case.outcome {
                TestOutcome::Failure => &mut self.failures,
                TestOutcome::Error => &mut self.errors,
                _ => continue,
            };
            if let Some(failure) = &case.failure {
                table.push(FailureRow {
                    test_case: sanitize_for_xml(&case.name),
                    message: failure.message.clone(),
                    stack_trace: format_stack_trace(&failure.stack_frames),
                });
            }
        }
        self.suites.push(suite);
    }

    pub fn failure_rate(&self) -> f64 {
        self.totals.failure_rate()
    }
}

/// Read every `*.json` outcome in `dir` and aggregate it.
///
/// Any unreadable or malformed file aborts the whole run.
pub fn aggregate_dir(dir: &Path, options: &NormalizeOptions) -> Result<Aggregation, ExportError> {
    let files = list_result_files(dir)?;
    info!("Found {} result files in {}", files.len(), dir.display());

    let mut aggregation = Aggregation::new();
    for path in &files {
        debug!(file = %path.display(), "processing file");
        let doc = load_result_document(path)?;

        if doc.test_case_name() == UNNAMED_TEST_CASE {
            warn!(file = %path.display(), "result has neither testCaseName nor scenarioId");
        }

        let suite = normalize(&doc, options);
        debug!(
            suite = %suite.name,
            declared = suite.declared_tests,
            emitted = suite.cases.len(),
            "normalized suite"
        );
        aggregation.ingest(suite);
    }

    Ok(aggregation)
}
