//! Loading and writing knowledge files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::OUTPUT_SUFFIX;
use crate::error::{RestructureError, Result};
use crate::types::OutputRecord;

/// Load the records of a knowledge file.
///
/// The file must hold a top-level JSON array. Elements are returned as raw
/// values so pass-through records keep every field and their key order.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    match value {
        Value::Array(records) => {
            tracing::debug!(path = %path.display(), count = records.len(), "Loaded records");
            Ok(records)
        }
        _ => Err(RestructureError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Serialize records as pretty JSON with a two-space indent and a trailing
/// newline.
///
/// Non-ASCII characters are written as-is.
pub fn render_records(records: &[OutputRecord]) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(records)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write records to `path`.
///
/// Writes to a temporary file in the same directory, then renames it over
/// the destination.
pub fn write_records(path: &Path, records: &[OutputRecord]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(RestructureError::MissingOutputDir(dir.to_path_buf()));
    }

    let content = render_records(records)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.json".to_string());
    let temp_file = dir.join(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), count = records.len(), "Wrote records");

    Ok(())
}

/// Default output location: `<stem>_restructured.json` next to the input.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use yogakb_restructurer::io::default_output_path;
///
/// assert_eq!(
///     default_output_path(Path::new("data/yoga_knowledge.json")),
///     PathBuf::from("data/yoga_knowledge_restructured.json")
/// );
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "knowledge".to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.json"))
}
