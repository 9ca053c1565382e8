//! Deletion eligibility rules.
//!
//! A file is eligible when it is not excluded and satisfies every active
//! threshold. With no threshold active nothing is eligible, so the tool never
//! deletes unconditionally. All comparisons are strict.

use crate::data::{ExclusionSet, Thresholds};
use std::path::Path;
use std::time::SystemTime;

/// Decides whether a file may be deleted, measuring age against the current time.
///
/// `key` is the path form the exclusion set is keyed on (see
/// [`ExclusionSet::key`]).
pub fn is_eligible(
    key: &Path,
    size: u64,
    modified: SystemTime,
    thresholds: &Thresholds,
    exclusions: &ExclusionSet,
) -> bool {
    is_eligible_at(key, size, modified, thresholds, exclusions, SystemTime::now())
}

/// Same as [`is_eligible`] with an explicit clock.
pub fn is_eligible_at(
    key: &Path,
    size: u64,
    modified: SystemTime,
    thresholds: &Thresholds,
    exclusions: &ExclusionSet,
    now: SystemTime,
) -> bool {
    if exclusions.contains(key) {
        return false;
    }

    // A timestamp in the future has no age.
    let age = now.duration_since(modified).unwrap_or_default();
    let old_enough = age > thresholds.max_age;
    let big_enough = size > thresholds.min_size;

    match (thresholds.has_age(), thresholds.has_size()) {
        (true, true) => old_enough && big_enough,
        (true, false) => old_enough,
        (false, true) => big_enough,
        (false, false) => false,
    }
}
