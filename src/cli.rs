//! CLI interface definitions for the `fcl` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`CleanupConfig`]: the validated parameters handed to the core
//!
//! # Example
//!
//! ```bash
//! fcl --path /var/log/app --mtime 7 --size 10 --skip /var/log/app/keep,/var/log/app/current.log
//! ```

use crate::data::{ExclusionMode, ExclusionSet, Thresholds};
use crate::error::CleanupError;
use crate::utils::normalize_path;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the `fcl` file cleaner.
#[derive(Parser, Debug)]
#[command(name = "fcl", version, about)]
pub struct Args {
    /// Working dir path
    #[arg(long, default_value = ".")]
    pub path: String,

    /// Remove files older than N days (0 disables the age filter)
    #[arg(long, value_name = "DAYS", default_value_t = 0)]
    pub mtime: u64,

    /// Remove files bigger than N megabytes (0 disables the size filter)
    #[arg(long, value_name = "MB", default_value_t = 0.0)]
    pub size: f64,

    /// A comma-separated list of dirs or files to skip
    #[arg(long, value_name = "PATHS", value_delimiter = ',', action = clap::ArgAction::Append)]
    pub skip: Vec<String>,

    /// How skip entries are matched: the full walked path or the path relative to --path
    #[arg(long, value_enum, default_value_t = ExclusionMode::Full)]
    pub skip_mode: ExclusionMode,

    /// Only list the files that would be deleted
    #[arg(long, default_value_t = false)]
    pub check: bool,

    /// In check mode, also write the list to a CSV file
    #[arg(long, value_name = "FILE", requires = "check")]
    pub output: Option<PathBuf>,

    /// Remove directories left empty after the files are deleted
    #[arg(long, default_value_t = false)]
    pub cleanup_empty_dirs: bool,

    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable colors in output
    #[arg(long, default_value_t = false)]
    pub no_colors: bool,
}

/// Parameters of a single run, validated once before any traversal.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    pub root: PathBuf,
    pub thresholds: Thresholds,
    pub exclusions: ExclusionSet,
}

impl Args {
    /// Normalizes paths and converts user units into a [`CleanupConfig`].
    ///
    /// # Errors
    /// Returns [`CleanupError::Config`] for a negative size or an empty path.
    pub fn to_config(&self) -> Result<CleanupConfig, CleanupError> {
        let root = normalize_path(&self.path);
        if root.as_os_str().is_empty() {
            return Err(CleanupError::Config("path must not be empty".into()));
        }
        Ok(CleanupConfig {
            root,
            thresholds: Thresholds::from_days_and_megabytes(self.mtime, self.size)?,
            exclusions: ExclusionSet::new(self.skip_mode, &self.skip),
        })
    }
}
