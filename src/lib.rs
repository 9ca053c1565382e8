//! Library crate for fcl
//!
//! `fcl` removes regular files from a directory tree by age and/or size,
//! skipping excluded paths, and can remove the directories left empty
//! afterwards.
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`FileRecord`, `Thresholds`, `ExclusionSet`)
//! - [`filter`]: Deletion eligibility rules
//! - [`scan`]: Tree walking and empty-directory detection
//! - [`cleanup`]: Sequential, per-item deletion with failure reports
//! - [`output`]: Check-mode listings (terminal, CSV)
//! - [`cli`]: Command-line interface definitions
//! - [`utils`]: Path normalization and unit conversion helpers

pub mod cleanup;
pub mod cli;
pub mod data;
pub mod error;
pub mod filter;
pub mod output;
pub mod scan;
pub mod utils;

pub use cleanup::{DeletionReport, remove_dirs, remove_files};
pub use cli::{Args, CleanupConfig};
pub use data::{ExclusionMode, ExclusionSet, FileRecord, Thresholds};
pub use error::{CleanupError, DeletionError};
pub use filter::{is_eligible, is_eligible_at};
pub use scan::{collect_deletable, collect_empty_dirs};
