//! Host collaborators consumed by the switcher.
//!
//! The switcher never touches a terminal or an editor directly. Everything
//! with a visible effect goes through a [`Workbench`]: the terminal UI
//! implements it with a picker and editor launches, the headless session
//! implements it by reporting what should happen.

use std::path::{Path, PathBuf};

use qswitch_core::prelude::*;

/// One entry of the interactive candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    /// Workspace-relative display path
    pub label: String,
    pub path: PathBuf,
}

/// Editor/terminal surface used by a switch request.
///
/// Suspension points of a switch are exactly the async methods: waiting for
/// the user to pick, and waiting for the host to show something.
#[trait_variant::make(Workbench: Send)]
pub trait LocalWorkbench {
    /// Whether `path` currently exists as a file.
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Display path relative to the workspace.
    fn relative_path(&self, path: &Path) -> String;

    /// Let the user choose one of `items`; `None` when cancelled.
    async fn pick(&self, items: Vec<PickItem>) -> Option<usize>;

    /// Show `path` standalone.
    async fn open(&self, path: &Path) -> Result<()>;

    /// Show a two-way diff.
    async fn diff(&self, left: &Path, right: &Path, title: &str) -> Result<()>;

    /// Generic fuzzy open seeded with `keyword`.
    ///
    /// Returns the file the host ended up showing, if any.
    async fn quick_open(&self, keyword: &str) -> Result<Option<PathBuf>>;
}
