use std::path::Path;

use crate::error::ExportError;
use crate::junit::aggregate::Aggregation;
use crate::junit::junit_model::NormalizedTestCase;
use crate::junit::sanitize::sanitize_for_xml;

// ============================================================================
// JUnit XML writer — one <testsuite> per Serenity result document
// ============================================================================

/// Render the aggregated run as JUnit XML.
///
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuites>
///   <testsuite name="Login" tests="1">
///     <testcase name="shouldLogIn - Login works" time="1.5" />
///   </testsuite>
///   <testsuite name="Search" tests="3">
///     <testcase name="shouldFind 1, a - Search" time="1.0" />
///     <testcase name="shouldFind 3, c - Search" time="1.0">
///       <failure message="boom&#10;Last stack trace:..." type="failure" />
///     </testcase>
///   </testsuite>
/// </testsuites>
/// ```
pub fn generate_junit_xml(aggregation: &Aggregation) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuites>\n");

    for suite in &aggregation.suites {
        let name = attribute(&suite.name);
        if suite.cases.is_empty() {
            xml.push_str(&format!(
                "  <testsuite name=\"{}\" tests=\"{}\" />\n",
                name, suite.declared_tests
            ));
            continue;
        }

        xml.push_str(&format!(
            "  <testsuite name=\"{}\" tests=\"{}\">\n",
            name, suite.declared_tests
        ));
        for case in &suite.cases {
            push_test_case(&mut xml, case);
        }
        xml.push_str("  </testsuite>\n");
    }

    xml.push_str("</testsuites>\n");
    xml
}

fn push_test_case(xml: &mut String, case: &NormalizedTestCase) {
    let name = attribute(&case.name);
    let time = format_decimal(case.duration_seconds);

    match case.failure_message() {
        Some(message) => xml.push_str(&format!(
            "    <testcase name=\"{}\" time=\"{}\">\n      <failure message=\"{}\" type=\"failure\" />\n    </testcase>\n",
            name,
            time,
            attribute(message)
        )),
        None => xml.push_str(&format!(
            "    <testcase name=\"{}\" time=\"{}\" />\n",
            name, time
        )),
    }
}

/// Write the JUnit report to `path`.
pub fn write_junit_report(path: &Path, aggregation: &Aggregation) -> Result<(), ExportError> {
    std::fs::write(path, generate_junit_xml(aggregation)).map_err(|source| {
        ExportError::WriteReport {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Sanitize then escape free-form text for an attribute value.
fn attribute(s: &str) -> String {
    escape_xml(&sanitize_for_xml(s))
}

/// Escape XML special characters.
///
/// Line breaks and tabs become character references so they survive
/// attribute-value normalization.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shortest round-trip decimal, keeping a `.0` on whole numbers.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
