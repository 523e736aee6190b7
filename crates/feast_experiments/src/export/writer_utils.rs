//! Shared plumbing for the export writers.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Refuse to write an export with no runs in it.
pub(crate) fn ensure_not_empty(
    results: &[crate::metrics::SimulationResult],
) -> Result<(), Box<dyn std::error::Error>> {
    if results.is_empty() {
        return Err("sweep produced no runs; nothing to export".into());
    }
    Ok(())
}

/// Open `path` for writing, creating missing parent directories first.
pub(crate) fn open_export(
    path: impl AsRef<Path>,
) -> Result<BufWriter<File>, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}
