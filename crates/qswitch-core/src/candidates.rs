//! Candidate filtering.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Effective candidates of a raw group.
///
/// Drops `current`, paths for which `exists` is false and repeated entries,
/// keeping the relative order of the survivors.
pub fn filter_candidates<F>(group: &[PathBuf], current: &Path, exists: F) -> Vec<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    let mut seen: HashSet<&Path> = HashSet::new();
    let mut effective = Vec::new();
    for candidate in group {
        if candidate == current || !seen.insert(candidate.as_path()) {
            continue;
        }
        if exists(candidate.as_path()) {
            effective.push(candidate.clone());
        }
    }
    effective
}

/// Position of `current` in the raw group.
pub fn position_of(group: &[PathBuf], current: &Path) -> Option<usize> {
    group.iter().position(|candidate| candidate == current)
}
