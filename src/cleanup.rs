//! Removal of collected files and directories.
//!
//! Deletion runs after collection has finished, one item at a time. Every
//! item is attempted exactly once; a failure is logged, recorded in the
//! report, and the remaining items are still processed.

use crate::data::FileRecord;
use crate::error::DeletionError;
use std::cmp::Reverse;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Outcome of a deletion run.
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub deleted: usize,
    pub failures: Vec<DeletionError>,
}

impl DeletionReport {
    fn record(&mut self, path: &Path, result: io::Result<()>, kind: &str) {
        match result {
            Ok(()) => {
                self.deleted += 1;
                debug!(path = %path.display(), "{kind} deleted");
            }
            Err(source) => {
                let err = DeletionError {
                    path: path.to_path_buf(),
                    source,
                };
                error!("{err}");
                self.failures.push(err);
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Deletes every collected file.
pub fn remove_files(records: &[FileRecord]) -> DeletionReport {
    let mut report = DeletionReport::default();
    for record in records {
        report.record(&record.path, fs::remove_file(&record.path), "File");
    }
    report
}

/// Deletes the given directories, deepest first.
///
/// Only empty directories can be removed; a non-empty one fails individually.
pub fn remove_dirs(dirs: &[PathBuf]) -> DeletionReport {
    let mut ordered: Vec<&PathBuf> = dirs.iter().collect();
    ordered.sort_by_key(|d| Reverse(d.components().count()));

    let mut report = DeletionReport::default();
    for dir in ordered {
        report.record(dir, fs::remove_dir(dir), "Dir");
    }
    report
}
