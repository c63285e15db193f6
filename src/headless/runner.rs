//! Headless mode runner - request loop without TUI
//!
//! Reads NDJSON requests from stdin on a dedicated thread and answers each
//! one on stdout. One [`Switcher`] lives for the whole session so the memory
//! of previous switches is kept between requests.

use std::path::{Path, PathBuf};

use tokio::sync::{mpsc, Mutex};
use tracing::{error, info, warn};

use qswitch_app::{
    NothingReason, PickItem, SettingsLoader, SwitchCommand, SwitchOutcome, Switcher, Workbench,
};
use qswitch_core::prelude::*;
use qswitch_core::{format_relative_path, normalize_path};

use super::{HeadlessEvent, HeadlessRequest};

/// Workbench that never prompts and never launches anything.
///
/// The response event tells the host what to show. A pick is answered with
/// the request's `target`; without one the offered items are kept so the
/// host can be sent the list and ask again.
#[derive(Debug)]
pub struct HeadlessWorkbench {
    workspace: PathBuf,
    /// Answer for the next pick
    choice: Mutex<Option<PathBuf>>,
    /// Items of the last unanswered pick
    offered: Mutex<Option<Vec<PickItem>>>,
}

impl HeadlessWorkbench {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            choice: Mutex::new(None),
            offered: Mutex::new(None),
        }
    }

    /// Set the answer for the next pick, clearing anything left from the
    /// previous request.
    pub async fn prepare(&self, choice: Option<PathBuf>) {
        *self.choice.lock().await = choice.map(|path| normalize_path(&path, &self.workspace));
        *self.offered.lock().await = None;
    }

    /// Items of a pick that had no answer, if the last request needed one.
    pub async fn take_offered(&self) -> Option<Vec<PickItem>> {
        self.offered.lock().await.take()
    }
}

impl Workbench for HeadlessWorkbench {
    fn relative_path(&self, path: &Path) -> String {
        format_relative_path(path, &self.workspace)
    }

    async fn pick(&self, items: Vec<PickItem>) -> Option<usize> {
        let Some(choice) = self.choice.lock().await.take() else {
            info!("{} candidates, asking the host", items.len());
            *self.offered.lock().await = Some(items);
            return None;
        };

        let index = items.iter().position(|item| item.path == choice);
        if index.is_none() {
            warn!("Requested target {:?} is not a candidate", choice);
        }
        index
    }

    async fn open(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    async fn diff(&self, _left: &Path, _right: &Path, _title: &str) -> Result<()> {
        Ok(())
    }

    async fn quick_open(&self, _keyword: &str) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// Run in headless mode - answer stdin requests until `quit` or EOF
pub async fn run_headless(loader: SettingsLoader) -> Result<()> {
    let workspace = loader.workspace().to_path_buf();
    info!("═══════════════════════════════════════════════════════");
    info!("quick-switch starting in HEADLESS mode");
    info!("Workspace: {}", workspace.display());
    info!("═══════════════════════════════════════════════════════");

    let (line_tx, mut line_rx) = mpsc::channel::<String>(32);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(line_tx);
    });

    let mut switcher = Switcher::new(HeadlessWorkbench::new(&workspace), &workspace);
    HeadlessEvent::ready(&workspace).emit();

    while let Some(line) = line_rx.recv().await {
        if line.trim().is_empty() {
            continue;
        }

        let (command, file, target) = match HeadlessRequest::parse(&line) {
            Ok(HeadlessRequest::Quit) => {
                info!("Quit requested");
                break;
            }
            Ok(HeadlessRequest::Switch {
                command,
                file,
                target,
            }) => (command, file, target),
            Err(e) => {
                warn!("Rejected request {:?}: {}", line, e);
                HeadlessEvent::error(e.to_string(), false).emit();
                continue;
            }
        };

        handle_request(&mut switcher, &loader, command, &file, target)
            .await
            .emit();
    }

    info!("quick-switch headless mode exiting");
    Ok(())
}

/// Run one request against the session's switcher and build its response.
///
/// Settings are re-read for every request so edits to the config file apply
/// without restarting the session. A pick without `target` is answered with
/// a `candidates` event instead of choosing for the user.
pub async fn handle_request(
    switcher: &mut Switcher<HeadlessWorkbench>,
    loader: &SettingsLoader,
    command: SwitchCommand,
    file: &Path,
    target: Option<PathBuf>,
) -> HeadlessEvent {
    let settings = match loader.load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return HeadlessEvent::error(e.to_string(), e.is_fatal());
        }
    };

    let shown = if file.as_os_str().is_empty() {
        PathBuf::new()
    } else {
        normalize_path(file, loader.workspace())
    };

    switcher.workbench().prepare(target).await;
    let outcome = match switcher.run(&settings, file, command).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Request {:?} on {:?} failed: {}", command, file, e);
            return HeadlessEvent::error(e.to_string(), e.is_fatal());
        }
    };

    if matches!(
        outcome,
        SwitchOutcome::Nothing {
            reason: NothingReason::Cancelled
        }
    ) {
        if let Some(items) = switcher.workbench().take_offered().await {
            return HeadlessEvent::candidates(&shown, command, items);
        }
    }

    HeadlessEvent::from_outcome(&shown, outcome)
}

/// Forward stdin lines to the request loop (blocking version)
fn spawn_stdin_reader_blocking(line_tx: mpsc::Sender<String>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
