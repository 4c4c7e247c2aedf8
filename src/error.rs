use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The Serenity report directory could not be listed
    #[error("failed to read report directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An outcome file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An outcome file is not valid JSON or has the wrong shape
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write JUnit report {}: {source}", .path.display())]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write environment file {}: {source}", .path.display())]
    WriteEnvFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid threshold {value:?}: expected a finite number")]
    InvalidThreshold { value: String },
}
