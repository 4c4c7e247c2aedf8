use std::path::Path;

use tracing::{info, warn};

use crate::cli::config::Settings;
use crate::error::ExportError;
use crate::junit::aggregate::aggregate_dir;
use crate::junit::normalize::NormalizeOptions;
use crate::junit::writer::write_junit_report;
use crate::report::console::format_console_report;
use crate::report::env_file::{render_env_file, write_env_file};
use crate::report::threshold::{ExitDecision, ThresholdCheck};

// ============================================================================
// export command
// ============================================================================

/// Aggregate the Serenity results, write the JUnit report and env file, print
/// the console summary, and return the threshold decision.
///
/// Input errors abort before the XML report is written. A failed env-file
/// write is only a warning.
pub fn cmd_export(settings: &Settings) -> Result<ExitDecision, ExportError> {
    let options = NormalizeOptions {
        full_stack_trace: settings.full_stack_trace,
    };

    let aggregation = aggregate_dir(Path::new(&settings.report_dir), &options)?;

    write_junit_report(&settings.output_file, &aggregation)?;
    info!(
        "Wrote {} test suites to {}",
        aggregation.suites.len(),
        settings.output_file.display()
    );

    let check = ThresholdCheck::new(settings.threshold, aggregation.failure_rate());
    println!("{}", format_console_report(&aggregation, &check));

    if let Err(e) = write_env_file(&settings.env_file, &render_env_file(&aggregation)) {
        warn!("{}", e);
    }

    Ok(check.decision())
}
