//! Selection policies: turn a candidate group into one target.
//!
//! Deterministic policies resolve immediately. The interactive pick cannot,
//! so it resolves to [`Resolution::Prompt`] and the host asks the user.

use std::path::{Path, PathBuf};

use crate::candidates::{filter_candidates, position_of};

/// Number of fixed index shortcuts (1-9)
pub const MAX_INDEX_SHORTCUTS: usize = 9;

/// Everything a policy needs to pick a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionContext {
    /// File the switch starts from
    pub current: PathBuf,
    /// Position of `current` in `group`
    pub current_index: Option<usize>,
    /// Raw candidate group, in rule template order
    pub group: Vec<PathBuf>,
    /// `group` without `current`, missing files and duplicates
    pub available: Vec<PathBuf>,
}

impl SelectionContext {
    pub fn new<F>(current: impl Into<PathBuf>, group: Vec<PathBuf>, exists: F) -> Self
    where
        F: Fn(&Path) -> bool,
    {
        let current = current.into();
        let current_index = position_of(&group, &current);
        let available = filter_candidates(&group, &current, exists);
        Self {
            current,
            current_index,
            group,
            available,
        }
    }

    /// Whether there is anything to switch to.
    pub fn has_candidates(&self) -> bool {
        !self.available.is_empty()
    }
}

/// How the target is chosen from a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Ask the user (auto-selects a single candidate when allowed)
    Pick,
    /// Next existing entry after the current file, wrapping around
    Next,
    /// Previous existing entry before the current file, wrapping around
    Previous,
    /// Entry at a fixed zero-based position of the group
    Index(usize),
}

/// Outcome of resolving a [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Selected(PathBuf),
    /// The user must choose among these candidates
    Prompt(Vec<PathBuf>),
    NoSelection,
}

impl Selection {
    /// Selection for a 1-based index shortcut (1-9).
    pub fn shortcut(number: usize) -> Option<Self> {
        (1..=MAX_INDEX_SHORTCUTS)
            .contains(&number)
            .then(|| Selection::Index(number - 1))
    }

    /// Resolve against `ctx`.
    ///
    /// `exists` is consulted again for rotation and fixed indexes since they
    /// walk the raw group rather than the filtered one.
    pub fn resolve<F>(
        &self,
        ctx: &SelectionContext,
        exists: F,
        auto_select_single: bool,
    ) -> Resolution
    where
        F: Fn(&Path) -> bool,
    {
        match self {
            Selection::Pick => match ctx.available.as_slice() {
                [] => Resolution::NoSelection,
                [single] if auto_select_single => Resolution::Selected(single.clone()),
                available => Resolution::Prompt(available.to_vec()),
            },
            Selection::Next => rotate(ctx, exists, true),
            Selection::Previous => rotate(ctx, exists, false),
            Selection::Index(index) => match ctx.group.get(*index) {
                Some(candidate) if *candidate != ctx.current && exists(candidate.as_path()) => {
                    Resolution::Selected(candidate.clone())
                }
                _ => Resolution::NoSelection,
            },
        }
    }
}

/// Circular walk over the raw group.
///
/// Starts after (or before) the current file; when the current file is not a
/// member, `Next` starts at the first entry and `Previous` at the last one.
/// Every entry is visited at most once.
fn rotate<F>(ctx: &SelectionContext, exists: F, forward: bool) -> Resolution
where
    F: Fn(&Path) -> bool,
{
    let len = ctx.group.len();
    if len == 0 {
        return Resolution::NoSelection;
    }

    let origin = match (ctx.current_index, forward) {
        (Some(index), true) => (index + 1) % len,
        (Some(index), false) => (index + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };

    for step in 0..len {
        let index = if forward {
            (origin + step) % len
        } else {
            (origin + len - step) % len
        };
        let candidate = &ctx.group[index];
        if *candidate != ctx.current && exists(candidate.as_path()) {
            return Resolution::Selected(candidate.clone());
        }
    }

    Resolution::NoSelection
}
