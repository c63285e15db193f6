//! Session memory: remembers the group a file was reached from.
//!
//! When a switch lands on a file that no rule matches, the target is mapped
//! to the group it came from so that switching from the target can offer the
//! same group again. The map lives as long as its owner (one process or one
//! headless session) and is never persisted or evicted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mapping from a file to the last candidate group that led to it.
#[derive(Debug, Clone, Default)]
pub struct SessionMemory {
    groups: HashMap<PathBuf, Vec<PathBuf>>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group remembered for `path`, if any.
    pub fn lookup(&self, path: &Path) -> Option<&[PathBuf]> {
        self.groups.get(path).map(Vec::as_slice)
    }

    /// Remember `group` for `target`, replacing any previous association.
    pub fn record(&mut self, target: impl Into<PathBuf>, group: Vec<PathBuf>) {
        self.groups.insert(target.into(), group);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
