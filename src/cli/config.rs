use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ExportError;

pub const DEFAULT_REPORT_DIR: &str = "target/site/serenity/";
pub const DEFAULT_OUTPUT_FILE: &str = "serenity_junit_output.xml";
pub const DEFAULT_ENV_FILE: &str = "default_env_file.env";
pub const DEFAULT_CONFIG_FILE: &str = "serenity-junit.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

/// Every option can also come from the plugin environment variables that CI
/// runners set; flags win over the environment.
#[derive(Parser, Debug)]
#[command(
    name = "serenity-junit-exporter",
    version,
    about = "Convert Serenity BDD JSON results into a JUnit XML report"
)]
pub struct Cli {
    /// Directory containing Serenity JSON outcome files
    #[arg(long, env = "PLUGIN_SERENITY_REPORT_DIR")]
    pub report_dir: Option<String>,

    /// JUnit XML output path (default: serenity_junit_output.xml)
    #[arg(short, long)]
    pub output: Option<String>,

    /// KEY=VALUE metrics file for later pipeline steps
    #[arg(long, env = "DRONE_OUTPUT")]
    pub env_file: Option<String>,

    /// Verbose per-file logging (`true` to enable)
    #[arg(long, env = "PLUGIN_DEBUG")]
    pub debug: Option<String>,

    /// Append the full formatted stack trace to failure messages (`true` to enable)
    #[arg(long, env = "PLUGIN_FULL_STACK_TRACE")]
    pub full_stack_trace: Option<String>,

    /// Maximum accepted failure rate in percent; exits 1 when exceeded
    #[arg(long, env = "PLUGIN_THRESHOLD")]
    pub threshold: Option<String>,

    /// Path to config file (default: serenity-junit.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,
}

impl Cli {
    pub fn debug_flag(&self) -> Option<bool> {
        parse_flag(self.debug.as_deref())
    }

    pub fn full_stack_trace_flag(&self) -> Option<bool> {
        parse_flag(self.full_stack_trace.as_deref())
    }
}

/// Plugin flags are enabled only by the literal `true`, in any case.
/// An empty value counts as unset.
pub fn parse_flag(value: Option<&str>) -> Option<bool> {
    non_empty(value).map(|v| v.trim().eq_ignore_ascii_case("true"))
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `serenity-junit.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report_dir: Option<String>,

    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub env_file: Option<String>,

    #[serde(default)]
    pub debug: Option<bool>,

    #[serde(default)]
    pub full_stack_trace: Option<bool>,

    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolved settings (CLI > environment > config file > defaults)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Always ends with `/`
    pub report_dir: String,
    pub output_file: PathBuf,
    pub env_file: PathBuf,
    pub debug: bool,
    pub full_stack_trace: bool,
    pub threshold: Option<f64>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &AppConfig) -> Result<Self, ExportError> {
        let threshold = match non_empty(cli.threshold.as_deref()) {
            Some(raw) => Some(parse_threshold(raw)?),
            None => config.threshold,
        };

        let report_dir = non_empty(cli.report_dir.as_deref())
            .or(non_empty(config.report_dir.as_deref()));
        let output_file = non_empty(cli.output.as_deref())
            .or(non_empty(config.output.as_deref()))
            .unwrap_or(DEFAULT_OUTPUT_FILE);
        let env_file = non_empty(cli.env_file.as_deref())
            .or(non_empty(config.env_file.as_deref()))
            .unwrap_or(DEFAULT_ENV_FILE);

        Ok(Self {
            report_dir: resolve_report_dir(report_dir),
            output_file: PathBuf::from(output_file),
            env_file: PathBuf::from(env_file),
            debug: cli.debug_flag().or(config.debug).unwrap_or(false),
            full_stack_trace: cli
                .full_stack_trace_flag()
                .or(config.full_stack_trace)
                .unwrap_or(false),
            threshold,
        })
    }
}

/// Validate the configured report directory.
///
/// A value that looks like a report file (`.xml`, `.json`, `.html`) falls back
/// to the default directory. The result always ends with `/`.
pub fn resolve_report_dir(raw: Option<&str>) -> String {
    let mut dir = match raw {
        Some(dir) if is_report_file_path(dir) => {
            warn!(
                "{} is not a directory, using default value: {}",
                dir, DEFAULT_REPORT_DIR
            );
            DEFAULT_REPORT_DIR.to_string()
        }
        Some(dir) => dir.to_string(),
        None => DEFAULT_REPORT_DIR.to_string(),
    };

    if !dir.ends_with('/') {
        dir.push('/');
    }
    dir
}

fn is_report_file_path(dir: &str) -> bool {
    [".xml", ".json", ".html"].iter().any(|ext| dir.ends_with(ext))
}

pub fn parse_threshold(raw: &str) -> Result<f64, ExportError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| ExportError::InvalidThreshold {
            value: raw.to_string(),
        })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
