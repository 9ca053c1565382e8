//! Directory traversal for `fcl`.
//!
//! This module handles:
//! - Depth-first traversal using `WalkDir`, without following links
//! - Pruning excluded directories before they are entered
//! - Collecting files eligible for deletion ([`collect_deletable`])
//! - Detecting empty directories ([`collect_empty_dirs`])
//!
//! Both collectors share [`walk_tree`]. Each call owns its accumulator, so
//! independent traversals never see each other's state.
//!
//! A traversal is all-or-nothing: any error from the filesystem layer aborts
//! the walk and drops what was gathered so far. An entry whose root-relative
//! path cannot be computed is only skipped, with a warning.

use crate::data::{ExclusionSet, FileRecord, Thresholds};
use crate::error::CleanupError;
use crate::filter::is_eligible_at;
use crate::utils::relative_path;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Per-entry hook driven by [`walk_tree`].
///
/// `key` is the entry's path in the form the exclusion set is keyed on.
trait Visitor {
    fn visit(&mut self, entry: &DirEntry, key: &Path) -> Result<(), CleanupError>;
}

/// Walks `root` pre-order, handing every non-pruned entry to `visitor`.
///
/// A directory whose key is in `exclusions` is neither visited nor descended
/// into. This applies to `root` as well.
fn walk_tree<V: Visitor>(
    root: &Path,
    exclusions: &ExclusionSet,
    visitor: &mut V,
) -> Result<(), CleanupError> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_pruned(root, e, exclusions));

    for item in walker {
        let entry = item.map_err(|source| CleanupError::Traversal {
            path: source.path().unwrap_or(root).to_path_buf(),
            source: source.into(),
        })?;

        let Some(relative) = relative_path(root, entry.path()) else {
            warn!(
                "Got invalid path from traversal: {} is not under {}",
                entry.path().display(),
                root.display()
            );
            continue;
        };

        visitor.visit(&entry, &exclusions.key(entry.path(), relative))?;
    }

    Ok(())
}

/// Returns true for excluded directories; files are never pruned here.
fn is_pruned(root: &Path, entry: &DirEntry, exclusions: &ExclusionSet) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    // Unresolvable entries are left to the walk loop, which skips them.
    let Some(relative) = relative_path(root, entry.path()) else {
        return false;
    };
    let pruned = exclusions.contains(&exclusions.key(entry.path(), relative));
    if pruned {
        debug!("Skipping excluded dir: {}", entry.path().display());
    }
    pruned
}

struct DeletableCollector<'a> {
    thresholds: &'a Thresholds,
    exclusions: &'a ExclusionSet,
    now: SystemTime,
    records: Vec<FileRecord>,
}

impl Visitor for DeletableCollector<'_> {
    fn visit(&mut self, entry: &DirEntry, key: &Path) -> Result<(), CleanupError> {
        if !entry.file_type().is_file() {
            return Ok(());
        }

        let traversal_error = |source: std::io::Error| CleanupError::Traversal {
            path: entry.path().to_path_buf(),
            source,
        };
        let metadata = entry.metadata().map_err(|e| traversal_error(e.into()))?;
        let modified = metadata.modified().map_err(traversal_error)?;
        let size = metadata.len();

        let fits = is_eligible_at(
            key,
            size,
            modified,
            self.thresholds,
            self.exclusions,
            self.now,
        );
        debug!(
            size,
            mod_time = %chrono::DateTime::<chrono::Local>::from(modified),
            fits,
            "Processed: {}",
            entry.path().display()
        );

        if fits {
            self.records.push(FileRecord {
                path: entry.path().to_path_buf(),
                size,
                modified,
            });
        }
        Ok(())
    }
}

/// Collects regular files under `root` that are eligible for deletion.
///
/// Age is measured against a single clock reading taken when the walk starts.
///
/// # Errors
/// Returns [`CleanupError::Traversal`] if the root is missing or unreadable,
/// or if any directory or file metadata cannot be read during the walk.
pub fn collect_deletable(
    root: &Path,
    thresholds: &Thresholds,
    exclusions: &ExclusionSet,
) -> Result<Vec<FileRecord>, CleanupError> {
    let mut collector = DeletableCollector {
        thresholds,
        exclusions,
        now: SystemTime::now(),
        records: Vec::new(),
    };
    walk_tree(root, exclusions, &mut collector)?;
    Ok(collector.records)
}

/// Directory path to "still presumed empty".
#[derive(Default)]
struct EmptyDirCandidates {
    dirs: HashMap<PathBuf, bool>,
}

impl Visitor for EmptyDirCandidates {
    fn visit(&mut self, entry: &DirEntry, _key: &Path) -> Result<(), CleanupError> {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            if entry.depth() > 0 {
                self.dirs.insert(entry.path().to_path_buf(), true);
            }
        } else if file_type.is_file() {
            // Only the direct parent; ancestors further up are not touched.
            if let Some(parent) = entry.path().parent() {
                self.dirs.remove(parent);
            }
        }
        Ok(())
    }
}

/// Collects directories under `root` that hold no regular file directly.
///
/// The root itself is never reported. A file removes only its immediate
/// parent from the candidates, so a directory whose only content is a
/// subdirectory with files is still reported.
///
/// # Errors
/// Returns [`CleanupError::Traversal`] if the walk fails.
pub fn collect_empty_dirs(
    root: &Path,
    exclusions: &ExclusionSet,
) -> Result<Vec<PathBuf>, CleanupError> {
    let mut candidates = EmptyDirCandidates::default();
    walk_tree(root, exclusions, &mut candidates)?;
    Ok(candidates
        .dirs
        .into_iter()
        .filter_map(|(path, empty)| empty.then_some(path))
        .collect())
}
