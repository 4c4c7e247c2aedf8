use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::serenity::serenity_model::RawResultDocument;

/// List the `*.json` files directly inside `dir`.
///
/// Sorted by file name so suite order does not depend on the filesystem.
pub fn list_result_files(dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let read_dir_err = |source| ExportError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        let is_json = entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.ends_with(".json"));
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read and parse one Serenity outcome file.
pub fn load_result_document(path: &Path) -> Result<RawResultDocument, ExportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ExportError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ExportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
