//! Headless mode - NDJSON switch session on stdin/stdout
//!
//! Editor integrations keep one `qswitch session` process alive per
//! workspace so the session memory survives between requests. Each request
//! is one JSON object per line on stdin; each gets exactly one response line
//! on stdout.
//!
//! When a request needs the user to pick among several files, the answer is
//! a `candidates` event. The host shows the list and repeats the request
//! with the chosen path in `target`; dropping it cancels.
//!
//! # Requests
//!
//! ```json
//! {"command":"switch","file":"src/foo.ts"}
//! {"command":"switch","file":"src/foo.ts","target":"src/foo.spec.ts"}
//! {"command":"index","file":"src/foo.ts","index":2}
//! {"command":"compare_left","file":"src/foo.ts"}
//! {"command":"quit"}
//! ```
//!
//! # Responses
//!
//! ```json
//! {"event":"ready","workspace":"/home/user/proj","timestamp":1704700001000}
//! {"event":"candidates","file":"/home/user/proj/src/foo.ts","command":"switch","candidates":[{"label":"src/foo.test.ts","path":"/home/user/proj/src/foo.test.ts"},{"label":"src/foo.spec.ts","path":"/home/user/proj/src/foo.spec.ts"}],"timestamp":1704700002000}
//! {"event":"opened","file":"/home/user/proj/src/foo.ts","target":"/home/user/proj/src/foo.spec.ts","timestamp":1704700003000}
//! {"event":"nothing","file":"/home/user/proj/src/foo.ts","reason":"no_selection","timestamp":1704700004000}
//! ```

pub mod runner;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;

use qswitch_app::{PickItem, SwitchCommand, SwitchOutcome};
use qswitch_core::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RequestKind {
    Switch,
    Next,
    Previous,
    Index,
    CompareLeft,
    CompareRight,
    Quit,
}

#[derive(Debug, Deserialize)]
struct RawRequest {
    command: RequestKind,
    #[serde(default)]
    file: Option<PathBuf>,
    #[serde(default)]
    index: Option<usize>,
    /// Answer to an earlier `candidates` event
    #[serde(default)]
    target: Option<PathBuf>,
}

/// One parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessRequest {
    Switch {
        command: SwitchCommand,
        file: PathBuf,
        target: Option<PathBuf>,
    },
    Quit,
}

impl HeadlessRequest {
    /// Parse a request line. `q` and `quit` are accepted as bare words.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if matches!(line, "q" | "quit") {
            return Ok(HeadlessRequest::Quit);
        }

        let raw: RawRequest = serde_json::from_str(line)
            .map_err(|e| Error::protocol(format!("Invalid request: {}", e)))?;

        let command = match raw.command {
            RequestKind::Quit => return Ok(HeadlessRequest::Quit),
            RequestKind::Switch => SwitchCommand::Switch,
            RequestKind::Next => SwitchCommand::Next,
            RequestKind::Previous => SwitchCommand::Previous,
            RequestKind::CompareLeft => SwitchCommand::CompareAsLeft,
            RequestKind::CompareRight => SwitchCommand::CompareAsRight,
            RequestKind::Index => {
                let index = raw
                    .index
                    .ok_or_else(|| Error::protocol("\"index\" command requires an index"))?;
                SwitchCommand::at_index(index)?
            }
        };

        // A missing file is "no active file", answered with `nothing`
        Ok(HeadlessRequest::Switch {
            command,
            file: raw.file.unwrap_or_default(),
            target: raw.target,
        })
    }
}

/// Request name of `command`, as a host would send it back.
pub fn command_name(command: SwitchCommand) -> &'static str {
    match command {
        SwitchCommand::Switch => "switch",
        SwitchCommand::Next => "next",
        SwitchCommand::Previous => "previous",
        SwitchCommand::AtIndex(_) => "index",
        SwitchCommand::CompareAsLeft => "compare_left",
        SwitchCommand::CompareAsRight => "compare_right",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of a `candidates` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateItem {
    pub label: String,
    pub path: String,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Session started
    Ready { workspace: String, timestamp: i64 },

    /// Target should be shown
    Opened {
        file: String,
        target: String,
        timestamp: i64,
    },

    /// Several related files; the host should let the user choose and
    /// repeat `command` with `target`
    Candidates {
        file: String,
        command: String,
        candidates: Vec<CandidateItem>,
        timestamp: i64,
    },

    /// Diff should be shown
    Compared {
        file: String,
        left: String,
        right: String,
        title: String,
        timestamp: i64,
    },

    /// No related file; the host should run its fuzzy open with `keyword`
    QuickOpen {
        file: String,
        keyword: String,
        timestamp: i64,
    },

    /// Request ended without effect
    Nothing {
        file: String,
        reason: String,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(workspace: &Path) -> Self {
        Self::Ready {
            workspace: display(workspace),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn candidates(file: &Path, command: SwitchCommand, items: Vec<PickItem>) -> Self {
        Self::Candidates {
            file: display(file),
            command: command_name(command).to_string(),
            candidates: items
                .into_iter()
                .map(|item| CandidateItem {
                    label: item.label,
                    path: display(&item.path),
                })
                .collect(),
            timestamp: Self::now(),
        }
    }

    /// Response for a finished switch request on `file`.
    pub fn from_outcome(file: &Path, outcome: SwitchOutcome) -> Self {
        let file = display(file);
        let timestamp = Self::now();
        match outcome {
            SwitchOutcome::Opened { target } => Self::Opened {
                file,
                target: display(&target),
                timestamp,
            },
            SwitchOutcome::Compared { left, right, title } => Self::Compared {
                file,
                left: display(&left),
                right: display(&right),
                title,
                timestamp,
            },
            SwitchOutcome::QuickOpen { keyword, .. } => Self::QuickOpen {
                file,
                keyword,
                timestamp,
            },
            SwitchOutcome::Nothing { reason } => Self::Nothing {
                file,
                reason: reason.to_string(),
                timestamp,
            },
        }
    }
}
