// CSV sink for normalized item records.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ItemRecord;

/// Writes one row per record with a header taken from the field table,
/// creating the parent directory if absent. Returns the number of rows
/// written. An empty slice performs no file I/O at all and returns 0.
pub fn write_csv(path: &Path, records: &[ItemRecord]) -> Result<usize> {
    if records.is_empty() {
        tracing::warn!("no records to save, skipping export");
        return Ok(0);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create export directory {}", parent.display()))?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open export file {}", path.display()))?;

    writer.write_record(ItemRecord::field_names())?;
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush().context("failed to flush export file")?;

    Ok(records.len())
}

/// Derives the export filename from the query list: queries joined with
/// underscores, spaces replaced, lowercased, `.csv` appended.
pub fn export_filename(queries: &[String]) -> String {
    let joined = queries
        .iter()
        .map(|q| q.replace(' ', "_").to_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    format!("{joined}.csv")
}
