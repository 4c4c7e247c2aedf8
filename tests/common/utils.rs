#![allow(dead_code)]

use std::path::Path;

use serde_json::Value;
use serenity_junit_exporter::serenity::serenity_model::RawResultDocument;

/// Deserialize a Serenity document from a `json!` literal.
pub fn doc(value: Value) -> RawResultDocument {
    serde_json::from_value(value).unwrap()
}

/// Write a Serenity outcome file into `dir`.
pub fn write_result(dir: &Path, file_name: &str, value: &Value) {
    std::fs::write(dir.join(file_name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// Report directory as the exporter expects it, with a trailing slash.
pub fn dir_arg(dir: &Path) -> String {
    format!("{}/", dir.display())
}
