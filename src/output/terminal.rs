//! Terminal output formatter for check mode.

use crate::data::FileRecord;
use crate::output::format_mtime;
use humansize::{BINARY, format_size};
use tracing::info;

/// Logs the list of files that would be deleted, one line per file.
pub fn render(records: &[FileRecord]) {
    info!("List of files:");
    for record in records {
        info!(
            size = %format_size(record.size, BINARY),
            mod_time = %format_mtime(record.modified),
            "\t{}",
            record.path.display()
        );
    }
}
