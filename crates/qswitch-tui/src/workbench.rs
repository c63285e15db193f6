//! Terminal-hosted [`Workbench`]: ratatui picker plus editor launches.

use std::path::{Path, PathBuf};

use qswitch_app::config::EditorSettings;
use qswitch_app::editor::{diff_in_editor, open_in_editor, run_quick_open, OpenResult};
use qswitch_app::{EditorError, PickItem, Workbench};
use qswitch_core::prelude::*;
use qswitch_core::{format_relative_path, normalize_path};

use crate::selector::{select_candidate, SelectionResult};

/// Workbench for interactive command-line use.
///
/// In print mode nothing is launched: chosen paths go to stdout, one per
/// line, for shell integrations to pick up.
#[derive(Debug, Clone)]
pub struct TerminalWorkbench {
    workspace: PathBuf,
    editor: EditorSettings,
    print: bool,
}

impl TerminalWorkbench {
    pub fn new(workspace: impl Into<PathBuf>, editor: EditorSettings, print: bool) -> Self {
        Self {
            workspace: workspace.into(),
            editor,
            print,
        }
    }
}

/// Run an editor call off the async runtime; terminal editors block until exit.
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, EditorError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::editor(e.to_string()))?
        .map_err(Error::from)
}

fn log_launch(result: &OpenResult) {
    info!(
        "Launched {} ({}){}",
        result.editor_display_name,
        result.command_line.join(" "),
        if result.waited { ", waited for exit" } else { "" }
    );
}

impl Workbench for TerminalWorkbench {
    fn relative_path(&self, path: &Path) -> String {
        format_relative_path(path, &self.workspace)
    }

    async fn pick(&self, items: Vec<PickItem>) -> Option<usize> {
        let workspace = self.workspace.clone();
        match tokio::task::spawn_blocking(move || select_candidate(&items, &workspace)).await {
            Ok(Ok(SelectionResult::Selected(index))) => Some(index),
            Ok(Ok(SelectionResult::Cancelled)) => None,
            Ok(Err(e)) => {
                warn!("Picker failed: {}", e);
                None
            }
            Err(e) => {
                warn!("Picker task failed: {}", e);
                None
            }
        }
    }

    async fn open(&self, path: &Path) -> Result<()> {
        if self.print {
            println!("{}", path.display());
            return Ok(());
        }

        let path = path.to_path_buf();
        let editor = self.editor.clone();
        let result = blocking(move || open_in_editor(&path, &editor)).await?;
        log_launch(&result);
        Ok(())
    }

    async fn diff(&self, left: &Path, right: &Path, title: &str) -> Result<()> {
        if self.print {
            println!("{}", left.display());
            println!("{}", right.display());
            return Ok(());
        }

        let left = left.to_path_buf();
        let right = right.to_path_buf();
        let title = title.to_string();
        let editor = self.editor.clone();
        let result = blocking(move || diff_in_editor(&left, &right, &title, &editor)).await?;
        log_launch(&result);
        Ok(())
    }

    async fn quick_open(&self, keyword: &str) -> Result<Option<PathBuf>> {
        if self.editor.quick_open_pattern.trim().is_empty() {
            debug!("No quick-open command configured");
            return Ok(None);
        }

        let query = keyword.to_string();
        let editor = self.editor.clone();
        let Some(chosen) = blocking(move || run_quick_open(&query, &editor)).await? else {
            return Ok(None);
        };

        let chosen = normalize_path(&chosen, &self.workspace);
        if !self.exists(&chosen) {
            warn!("Quick-open chose {:?}, which is not a file", chosen);
            return Ok(None);
        }
        self.open(&chosen).await?;
        Ok(Some(chosen))
    }
}
