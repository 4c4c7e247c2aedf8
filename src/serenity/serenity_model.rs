use std::fmt;

use serde::Deserialize;

pub const UNNAMED_TEST_CASE: &str = "UnnamedTestCase";
pub const UNNAMED_METHOD: &str = "UnnamedMethod";
pub const UNNAMED_SUITE: &str = "UnnamedTest";

// ============================================================================
// Serenity result document — one JSON file per test case / scenario
// ============================================================================

/// A single Serenity BDD outcome file.
///
/// Every field is optional; Serenity writes many more keys than the exporter
/// reads and those are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResultDocument {
    /// Test case name (JUnit runs)
    pub test_case_name: Option<String>,

    /// Scenario identifier (Cucumber runs), used when `testCaseName` is absent
    pub scenario_id: Option<String>,

    pub method_name: Option<String>,

    /// Suite name
    pub name: Option<String>,

    /// Total duration in milliseconds
    pub duration: Option<u64>,

    pub result: Option<TestOutcome>,

    pub test_failure_cause: Option<FailureCause>,

    #[serde(default)]
    pub test_steps: Vec<TestStepRecord>,

    pub data_table: Option<DataTable>,
}

impl RawResultDocument {
    pub fn test_case_name(&self) -> &str {
        self.test_case_name
            .as_deref()
            .or(self.scenario_id.as_deref())
            .unwrap_or(UNNAMED_TEST_CASE)
    }

    pub fn method_name(&self) -> &str {
        self.method_name.as_deref().unwrap_or(UNNAMED_METHOD)
    }

    pub fn suite_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_SUITE)
    }

    pub fn outcome(&self) -> TestOutcome {
        self.result.unwrap_or_default()
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration.unwrap_or(0)
    }

    /// Sum of all step durations in milliseconds.
    pub fn step_duration_ms(&self) -> u64 {
        self.test_steps
            .iter()
            .map(|step| step.duration.unwrap_or(0))
            .sum()
    }

    /// Data-table rows, only when the table is present and non-empty.
    pub fn data_rows(&self) -> Option<&[DataRow]> {
        self.data_table
            .as_ref()
            .and_then(|table| table.rows.as_deref())
            .filter(|rows| !rows.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureCause {
    pub message: Option<String>,

    #[serde(default)]
    pub stack_trace: Vec<StackFrame>,
}

/// One frame of a Java stack trace as Serenity serializes it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    pub declaring_class: Option<String>,
    pub method_name: Option<String>,
    pub file_name: Option<String>,
    pub line_number: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestStepRecord {
    pub duration: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataTable {
    /// `null` and a missing key both mean "no rows"
    #[serde(default)]
    pub rows: Option<Vec<DataRow>>,
}

/// One parameter row of a data-driven scenario.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataRow {
    #[serde(default)]
    pub values: Vec<String>,

    pub result: Option<TestOutcome>,
}

impl DataRow {
    pub fn outcome(&self) -> TestOutcome {
        self.result.unwrap_or_default()
    }

    pub fn joined_values(&self) -> String {
        self.values.join(", ")
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a test case or data row.
///
/// Serenity values the exporter does not track individually (`PENDING`,
/// `SKIPPED`, `IGNORED`, `COMPROMISED`, ...) collapse into `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum TestOutcome {
    Success,
    Failure,
    Error,
    Undefined,
    #[default]
    Unknown,
}

impl TestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestOutcome::Success => "SUCCESS",
            TestOutcome::Failure => "FAILURE",
            TestOutcome::Error => "ERROR",
            TestOutcome::Undefined => "UNDEFINED",
            TestOutcome::Unknown => "UNKNOWN",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestOutcome::Success)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, TestOutcome::Undefined)
    }
}

impl From<String> for TestOutcome {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SUCCESS" => TestOutcome::Success,
            "FAILURE" => TestOutcome::Failure,
            "ERROR" => TestOutcome::Error,
            "UNDEFINED" => TestOutcome::Undefined,
            _ => TestOutcome::Unknown,
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
