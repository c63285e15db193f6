//! Editor command execution for opening, comparing and searching files.
//!
//! Command lines come from the editor patterns in the settings. Patterns are
//! split on whitespace *before* variables are substituted, so a path or diff
//! title containing spaces stays a single argument. No shell is involved.

use crate::config::{EditorSettings, ResolvedEditor};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur when handing a file to the editor.
#[derive(Debug, Error)]
pub enum EditorError {
    /// No editor configured or detected
    #[error("No editor configured or detected")]
    NoEditor,

    /// The editor has no known diff command and none is configured
    #[error("No diff command configured for {0}")]
    DiffUnsupported(String),

    /// File not found at the specified path
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to execute the editor command
    #[error("Failed to execute editor: {0}")]
    ExecutionFailed(#[from] std::io::Error),

    /// The command pattern expanded to nothing
    #[error("Empty command pattern")]
    EmptyPattern,

    /// Path contains a NUL byte and cannot be passed as an argument
    #[error("Path cannot be passed to the editor: {0}")]
    PathRejected(String),
}

impl From<EditorError> for qswitch_core::Error {
    fn from(err: EditorError) -> Self {
        qswitch_core::Error::editor(err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Result Types
// ─────────────────────────────────────────────────────────────────────────────

/// Result of launching the editor.
#[derive(Debug)]
pub struct OpenResult {
    /// Editor command that was used
    pub editor: String,
    /// Display name of the editor (e.g., "Visual Studio Code")
    pub editor_display_name: String,
    /// Full argument list that was executed
    pub command_line: Vec<String>,
    /// Whether we waited for the editor to exit
    pub waited: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Main API
// ─────────────────────────────────────────────────────────────────────────────

/// Open a file in the configured editor.
pub fn open_in_editor(path: &Path, settings: &EditorSettings) -> Result<OpenResult, EditorError> {
    let file = checked_path(path)?;
    let editor = settings.resolve().ok_or(EditorError::NoEditor)?;

    let vars = PatternVars {
        editor: &editor.command,
        file: Some(&file),
        ..Default::default()
    };
    let command_line = build_command(&editor.open_pattern, &vars);
    launch(&editor, command_line)
}

/// Open a two-way diff of `left` and `right` in the configured editor.
pub fn diff_in_editor(
    left: &Path,
    right: &Path,
    title: &str,
    settings: &EditorSettings,
) -> Result<OpenResult, EditorError> {
    let left = checked_path(left)?;
    let right = checked_path(right)?;
    let editor = settings.resolve().ok_or(EditorError::NoEditor)?;
    let pattern = editor
        .diff_pattern
        .clone()
        .ok_or_else(|| EditorError::DiffUnsupported(editor.display_name.clone()))?;

    let vars = PatternVars {
        editor: &editor.command,
        left: Some(&left),
        right: Some(&right),
        title: Some(title),
        ..Default::default()
    };
    let command_line = build_command(&pattern, &vars);
    launch(&editor, command_line)
}

/// Run the configured quick-open command seeded with `keyword`.
///
/// The command is expected to print the chosen path on stdout (like `fzf`).
/// Returns `Ok(None)` when no command is configured, the user aborted, or
/// nothing was printed.
pub fn run_quick_open(
    keyword: &str,
    settings: &EditorSettings,
) -> Result<Option<PathBuf>, EditorError> {
    if settings.quick_open_pattern.trim().is_empty() {
        return Ok(None);
    }

    let vars = PatternVars {
        editor: &settings.command,
        keyword: Some(keyword),
        ..Default::default()
    };
    let command_line = build_command(&settings.quick_open_pattern, &vars);
    let (cmd, args) = command_line.split_first().ok_or(EditorError::EmptyPattern)?;

    let output = Command::new(cmd)
        .args(args)
        .stdin(Stdio::inherit())
        .stderr(Stdio::inherit())
        .stdout(Stdio::piped())
        .output()?;

    if !output.status.success() {
        tracing::debug!("Quick-open command exited with {}", output.status);
        return Ok(None);
    }

    let chosen = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if chosen.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(chosen)))
    }
}

fn checked_path(path: &Path) -> Result<String, EditorError> {
    let display = path.display().to_string();
    let Some(file) = sanitize_path(&display) else {
        return Err(EditorError::PathRejected(display));
    };
    if !path.exists() {
        return Err(EditorError::FileNotFound(path.to_path_buf()));
    }
    Ok(file)
}

fn launch(editor: &ResolvedEditor, command_line: Vec<String>) -> Result<OpenResult, EditorError> {
    execute_command(&command_line, editor.waits)?;

    Ok(OpenResult {
        editor: editor.command.clone(),
        editor_display_name: editor.display_name.clone(),
        command_line,
        waited: editor.waits,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Pattern Substitution
// ─────────────────────────────────────────────────────────────────────────────

/// Values available to editor patterns.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternVars<'a> {
    pub editor: &'a str,
    pub file: Option<&'a str>,
    pub left: Option<&'a str>,
    pub right: Option<&'a str>,
    pub title: Option<&'a str>,
    pub keyword: Option<&'a str>,
}

/// Split `pattern` into arguments and substitute variables in each.
///
/// # Variables
///
/// - `$EDITOR` - Editor command
/// - `$FILE` - File to open
/// - `$LEFT` / `$RIGHT` - Diff sides
/// - `$TITLE` - Diff title
/// - `$KEYWORD` - Quick-open search keyword
/// - `$NVIM` - Neovim server socket of the parent Neovim
pub fn build_command(pattern: &str, vars: &PatternVars<'_>) -> Vec<String> {
    let nvim = std::env::var("NVIM").unwrap_or_default();

    pattern
        .split_whitespace()
        .map(|token| substitute(token, vars, &nvim))
        .filter(|arg| !arg.is_empty())
        .collect()
}

/// Replace `$NAME` variables in one pass, so substituted paths that contain
/// `$` are never expanded again. Unknown names stay literal.
fn substitute(token: &str, vars: &PatternVars<'_>, nvim: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut rest = token;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let name_len = after
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or(after.len());
        let name = &after[..name_len];

        let value = match name {
            "EDITOR" => Some(vars.editor),
            "FILE" => Some(vars.file.unwrap_or_default()),
            "LEFT" => Some(vars.left.unwrap_or_default()),
            "RIGHT" => Some(vars.right.unwrap_or_default()),
            "TITLE" => Some(vars.title.unwrap_or_default()),
            "KEYWORD" => Some(vars.keyword.unwrap_or_default()),
            "NVIM" => Some(nvim),
            _ => None,
        };

        match value {
            Some(value) => out.push_str(value),
            None => {
                out.push('$');
                out.push_str(name);
            }
        }
        rest = &after[name_len..];
    }

    out.push_str(rest);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Command Execution
// ─────────────────────────────────────────────────────────────────────────────

/// Execute the editor command.
///
/// GUI editors are spawned without waiting; terminal editors take over the
/// terminal, so we wait for them to exit.
fn execute_command(command_line: &[String], wait: bool) -> Result<(), EditorError> {
    let (cmd, args) = command_line.split_first().ok_or(EditorError::EmptyPattern)?;

    let mut command = Command::new(cmd);
    command.args(args);

    if wait {
        let status = command.status()?;
        if !status.success() {
            tracing::warn!("Editor {} exited with {}", cmd, status);
        }
    } else {
        command.spawn()?;
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Security
// ─────────────────────────────────────────────────────────────────────────────

/// Sanitize file path for security.
///
/// Arguments go straight to the editor process without a shell, and
/// candidate paths are already normalized, so only NUL bytes (which no
/// process argument can carry) are rejected.
///
/// # Returns
///
/// `Some(path)` if the path can be passed on, `None` otherwise.
pub fn sanitize_path(path: &str) -> Option<String> {
    if path.contains('\0') {
        return None;
    }

    Some(path.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
