//! Path and unit helpers for the `fcl` cleanup tool.
//!
//! This module provides:
//! - Trailing-separator normalization for the root and exclusion entries
//! - Lexical path cleaning, so `./keep` and `keep` compare equal
//! - Root-relative path resolution
//! - Conversion from user-facing units (days, megabytes) to durations and bytes

use std::path::{Component, Path, PathBuf, is_separator};
use std::time::Duration;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Strips trailing path separators, keeping a lone root separator intact.
///
/// `"logs/"` becomes `"logs"`, `"/"` stays `"/"`.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim_end_matches(is_separator);
    if trimmed.is_empty() && !raw.is_empty() {
        // Only separators: the filesystem root.
        return PathBuf::from(&raw[..1]);
    }
    PathBuf::from(trimmed)
}

/// Cleans a path lexically, without touching the filesystem.
///
/// `.` components are dropped, repeated separators collapse, and `..`
/// cancels the preceding normal component. `..` directly under the root is
/// dropped. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.last() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(component),
            },
            other => cleaned.push(other),
        }
    }
    if cleaned.is_empty() {
        return PathBuf::from(".");
    }
    cleaned.iter().collect()
}

/// Returns `path` relative to `root`, or `None` if it does not lie under it.
pub fn relative_path<'a>(root: &Path, path: &'a Path) -> Option<&'a Path> {
    path.strip_prefix(root).ok()
}

pub fn days_to_duration(days: u64) -> Duration {
    Duration::from_secs(days.saturating_mul(SECS_PER_DAY))
}

/// Converts megabytes to bytes as `mb * 1024 * 1024`, truncating the fraction.
pub fn megabytes_to_bytes(megabytes: f64) -> u64 {
    (megabytes * 1024.0 * 1024.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("logs/"), PathBuf::from("logs"));
        assert_eq!(normalize_path("logs//"), PathBuf::from("logs"));
        assert_eq!(normalize_path("a/b"), PathBuf::from("a/b"));
        assert_eq!(normalize_path("/"), PathBuf::from("/"));
        assert_eq!(normalize_path("a "), PathBuf::from("a "));
        assert_eq!(normalize_path(" a/b/"), PathBuf::from(" a/b"));
        assert_eq!(normalize_path(""), PathBuf::new());
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path(Path::new("./keep")), PathBuf::from("keep"));
        assert_eq!(clean_path(Path::new("./data/x")), PathBuf::from("data/x"));
        assert_eq!(clean_path(Path::new("a//b/./c")), PathBuf::from("a/b/c"));
        assert_eq!(clean_path(Path::new("a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(clean_path(Path::new("../a/../../b")), PathBuf::from("../../b"));
        assert_eq!(clean_path(Path::new("/../etc")), PathBuf::from("/etc"));
        assert_eq!(clean_path(Path::new(".")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_relative_path() {
        let root = Path::new("/srv/data");
        assert_eq!(
            relative_path(root, Path::new("/srv/data/a/b")),
            Some(Path::new("a/b"))
        );
        assert_eq!(relative_path(root, root), Some(Path::new("")));
        assert_eq!(relative_path(root, Path::new("/srv/other")), None);
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(days_to_duration(0), Duration::ZERO);
        assert_eq!(days_to_duration(3), Duration::from_secs(259_200));
        assert_eq!(megabytes_to_bytes(0.0), 0);
        assert_eq!(megabytes_to_bytes(1.0), 1_048_576);
        assert_eq!(megabytes_to_bytes(0.5), 524_288);
    }
}
