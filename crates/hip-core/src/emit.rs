/// JSON index output (`hip-index.json`).
///
/// Output is `serde_json` pretty printing: two-space indent, non-ASCII kept
/// literally, no trailing newline. The same records always produce the same bytes.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::IndexError;
use crate::model::{HipIndex, HipRecord};

/// Render the index document exactly as `emit` writes it.
pub fn render_index(records: &[HipRecord]) -> Result<String, IndexError> {
    Ok(serde_json::to_string_pretty(&HipIndex::new(records))?)
}

/// Write the index to every destination, creating parent directories as needed.
pub fn emit(records: &[HipRecord], destinations: &[PathBuf]) -> Result<(), IndexError> {
    let json = render_index(records)?;
    for dest in destinations {
        write_file(dest, &json)?;
        info!(path = %dest.display(), hips = records.len(), "wrote hip index");
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), IndexError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IndexError::io(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| IndexError::io(path, e))
}
