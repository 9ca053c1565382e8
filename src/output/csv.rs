//! CSV output formatter for check mode.
//!
//! Writes one row per selected file so the listing can be reviewed or fed
//! into other tools before anything is deleted.

use crate::data::FileRecord;
use crate::output::format_mtime;
use anyhow::{Context, Result};
use csv::Writer;
use humansize::{BINARY, format_size};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::info;

/// A single CSV row.
#[derive(Debug, serde::Serialize)]
pub struct CsvRecord {
    pub path: String,
    pub size_bytes: u64,
    pub size_human: String,
    pub modified: String,
}

impl From<&FileRecord> for CsvRecord {
    fn from(record: &FileRecord) -> Self {
        Self {
            path: record.path.display().to_string(),
            size_bytes: record.size,
            size_human: format_size(record.size, BINARY),
            modified: format_mtime(record.modified),
        }
    }
}

/// Serializes `records` to any writer.
pub fn write_records<W: io::Write>(records: &[FileRecord], writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(CsvRecord::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `records` as CSV to `output`.
pub fn render(records: &[FileRecord], output: &Path) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    write_records(records, file)?;
    info!("CSV output written to: {}", output.display());
    Ok(())
}
