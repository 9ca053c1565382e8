//! Check-mode listings of the files selected for deletion.
//!
//! # Available Formatters
//!
//! - **Terminal**: one log line per file with human-readable size and local mtime
//! - **CSV**: machine-readable export for further processing
//!
//! Both formatters take the already collected records and contain no
//! selection logic.

pub mod csv;
pub mod terminal;

/// CSV output renderer function.
///
/// See [`csv::render`] for full documentation.
pub use csv::render as render_csv;

/// Terminal output renderer function.
///
/// See [`terminal::render`] for full documentation.
pub use terminal::render as render_terminal;

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Formats a modification time in the local timezone.
pub(crate) fn format_mtime(modified: SystemTime) -> String {
    DateTime::<Local>::from(modified)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
