//! Data structures shared by the walker, the filter and the remover.
//!
//! This module defines the records produced during a traversal and the
//! immutable parameters (thresholds, exclusions) that drive it.

use crate::error::CleanupError;
use crate::utils::{clean_path, days_to_duration, megabytes_to_bytes, normalize_path};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// A regular file selected for deletion.
///
/// # Fields
/// * `path` - The walked path (root joined with the root-relative path)
/// * `size` - Size in bytes
/// * `modified` - Last modification time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
}

/// Age and size cutoffs for a run. A zero value disables that cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thresholds {
    pub max_age: Duration,
    pub min_size: u64,
}

impl Thresholds {
    pub fn new(max_age: Duration, min_size: u64) -> Self {
        Self { max_age, min_size }
    }

    /// Builds thresholds from the user-facing units: whole days and megabytes.
    ///
    /// # Errors
    /// Returns [`CleanupError::Config`] if `megabytes` is negative or not finite.
    pub fn from_days_and_megabytes(days: u64, megabytes: f64) -> Result<Self, CleanupError> {
        if !megabytes.is_finite() || megabytes < 0.0 {
            return Err(CleanupError::Config(format!(
                "size threshold must be a non-negative number, got {megabytes}"
            )));
        }
        Ok(Self::new(days_to_duration(days), megabytes_to_bytes(megabytes)))
    }

    pub fn has_age(&self) -> bool {
        !self.max_age.is_zero()
    }

    pub fn has_size(&self) -> bool {
        self.min_size > 0
    }
}

/// Which form of an entry's path is compared against the exclusion list.
///
/// # Variants
/// * `Full` - The walked path, i.e. the root as given joined with the relative path
/// * `Relative` - The path relative to the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExclusionMode {
    #[default]
    Full,
    Relative,
}

/// Paths to skip during a traversal.
///
/// Entries are stored normalized (no trailing separator) and lexically
/// cleaned, so `./keep`, `keep/` and `keep` are the same entry. Matching is
/// otherwise literal; there is no globbing.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    mode: ExclusionMode,
    paths: HashSet<PathBuf>,
}

impl ExclusionSet {
    pub fn new<I, S>(mode: ExclusionMode, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = paths
            .into_iter()
            .map(|p| normalize_path(p.as_ref()))
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| clean_path(&p))
            .collect();
        Self { mode, paths }
    }

    pub fn mode(&self) -> ExclusionMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Literal membership test against an already selected key.
    pub fn contains(&self, key: &Path) -> bool {
        self.paths.contains(key)
    }

    /// Picks the path form this set is keyed on, cleaned the same way as
    /// the stored entries.
    pub fn key(&self, full: &Path, relative: &Path) -> PathBuf {
        match self.mode {
            ExclusionMode::Full => clean_path(full),
            ExclusionMode::Relative => clean_path(relative),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_from_user_units() {
        let t = Thresholds::from_days_and_megabytes(2, 1.5).unwrap();
        assert_eq!(t.max_age, Duration::from_secs(2 * 24 * 60 * 60));
        assert_eq!(t.min_size, 1_572_864);
        assert!(t.has_age());
        assert!(t.has_size());
    }

    #[test]
    fn test_thresholds_reject_negative_size() {
        assert!(Thresholds::from_days_and_megabytes(0, -1.0).is_err());
        assert!(Thresholds::from_days_and_megabytes(0, f64::NAN).is_err());
    }

    #[test]
    fn test_disabled_thresholds() {
        let t = Thresholds::default();
        assert!(!t.has_age());
        assert!(!t.has_size());
    }

    #[test]
    fn test_exclusion_set_normalizes_entries() {
        let set = ExclusionSet::new(ExclusionMode::Full, ["data/cache/", "data/keep", ""]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Path::new("data/cache")));
        assert!(set.contains(Path::new("data/keep")));
        assert!(!set.contains(Path::new("data")));
    }

    #[test]
    fn test_exclusion_key_follows_mode() {
        let full = Path::new("root/sub/file");
        let rel = Path::new("sub/file");
        let abs = ExclusionSet::new(ExclusionMode::Full, Vec::<String>::new());
        let relative = ExclusionSet::new(ExclusionMode::Relative, Vec::<String>::new());
        assert_eq!(abs.key(full, rel), full);
        assert_eq!(relative.key(full, rel), rel);
    }

    #[test]
    fn test_dot_prefixed_walk_paths_match_bare_entries() {
        let set = ExclusionSet::new(ExclusionMode::Full, ["keep", "./data/x/", "logs//old"]);
        assert!(set.contains(&set.key(Path::new("./keep"), Path::new("keep"))));
        assert!(set.contains(&set.key(Path::new("data/x"), Path::new("x"))));
        assert!(set.contains(&set.key(Path::new("./data/./x"), Path::new("x"))));
        assert!(set.contains(&set.key(Path::new("logs/old"), Path::new("old"))));
        assert!(!set.contains(&set.key(Path::new("./other"), Path::new("other"))));
    }
}
