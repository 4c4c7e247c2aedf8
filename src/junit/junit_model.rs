use crate::serenity::serenity_model::{StackFrame, TestOutcome};

// ============================================================================
// Normalized test model — what ends up in the JUnit report
// ============================================================================

/// One `<testcase>`: a plain Serenity test or one row of a data-driven one.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTestCase {
    pub name: String,

    pub duration_seconds: f64,

    /// Never `Undefined`; undefined rows are dropped before normalization.
    pub outcome: TestOutcome,

    /// Present exactly when `outcome` is not `Success`
    pub failure: Option<FailureDetail>,
}

impl NormalizedTestCase {
    /// Message written to the `<failure>` element, before sanitization.
    pub fn failure_message(&self) -> Option<&str> {
        self.failure.as_ref().map(|f| f.composed_message.as_str())
    }

    pub fn stack_frames(&self) -> &[StackFrame] {
        self.failure
            .as_ref()
            .map(|f| f.stack_frames.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailureDetail {
    /// Message reported by Serenity, or the default for the outcome
    pub message: String,

    /// `message` plus the innermost frame and, optionally, the full trace
    pub composed_message: String,

    pub stack_frames: Vec<StackFrame>,
}

/// All cases produced from one result document; becomes one `<testsuite>`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSuite {
    pub name: String,

    /// Data-table row count (undefined rows included), or 1
    pub declared_tests: usize,

    pub cases: Vec<NormalizedTestCase>,
}

// ============================================================================
// Run totals
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub total_tests: usize,
    pub total_failures: usize,
    pub total_errors: usize,
    pub total_failures_and_errors: usize,
}

impl RunTotals {
    /// Count one emitted test case.
    pub fn record(&mut self, outcome: TestOutcome) {
        self.total_tests += 1;
        match outcome {
            TestOutcome::Failure => {
                self.total_failures += 1;
                self.total_failures_and_errors += 1;
            }
            TestOutcome::Error => {
                self.total_errors += 1;
                self.total_failures_and_errors += 1;
            }
            _ => {}
        }
    }

    /// Failures plus errors as a percentage of all tests, 0 for an empty run.
    pub fn failure_rate(&self) -> f64 {
        if self.total_tests == 0 {
            return 0.0;
        }
        self.total_failures_and_errors as f64 / self.total_tests as f64 * 100.0
    }
}
