//! Settings loader for .qswitch/config.toml and editor detection

use super::types::{default_open_pattern, EditorSettings, ParentIde, Settings};
use qswitch_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const QSWITCH_DIR: &str = ".qswitch";
const USER_CONFIG_DIR: &str = "quick-switch";

// ─────────────────────────────────────────────────────────────────────────────
// Editor Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Known editor configuration with open and diff patterns.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub command: &'static str,
    pub open_pattern: &'static str,
    /// Empty when the editor has no diff command line
    pub diff_pattern: &'static str,
    pub display_name: &'static str,
    /// Terminal editors take over the terminal, so we wait for them
    pub waits: bool,
}

/// List of known editors with their open and diff patterns.
///
/// Note: Patterns include --reuse-window where applicable for IDE instance reuse.
pub const KNOWN_EDITORS: &[EditorConfig] = &[
    EditorConfig {
        command: "code",
        open_pattern: "code --reuse-window $FILE",
        diff_pattern: "code --reuse-window --diff $LEFT $RIGHT",
        display_name: "Visual Studio Code",
        waits: false,
    },
    EditorConfig {
        command: "cursor",
        open_pattern: "cursor --reuse-window $FILE",
        diff_pattern: "cursor --reuse-window --diff $LEFT $RIGHT",
        display_name: "Cursor",
        waits: false,
    },
    EditorConfig {
        command: "zed",
        open_pattern: "zed $FILE",
        diff_pattern: "zed --diff $LEFT $RIGHT",
        display_name: "Zed",
        waits: false,
    },
    EditorConfig {
        command: "nvim",
        open_pattern: "nvim $FILE",
        diff_pattern: "nvim -d $LEFT $RIGHT",
        display_name: "Neovim",
        waits: true,
    },
    EditorConfig {
        command: "vim",
        open_pattern: "vim $FILE",
        diff_pattern: "vim -d $LEFT $RIGHT",
        display_name: "Vim",
        waits: true,
    },
    EditorConfig {
        command: "emacs",
        open_pattern: "emacs $FILE",
        diff_pattern: "",
        display_name: "Emacs",
        waits: true,
    },
    EditorConfig {
        command: "subl",
        open_pattern: "subl $FILE",
        diff_pattern: "",
        display_name: "Sublime Text",
        waits: false,
    },
    EditorConfig {
        command: "idea",
        open_pattern: "idea $FILE",
        diff_pattern: "idea diff $LEFT $RIGHT",
        display_name: "IntelliJ IDEA",
        waits: false,
    },
];

/// Detect if running inside an IDE's integrated terminal.
///
/// This is crucial for opening files in the CURRENT IDE instance
/// rather than spawning a new window.
pub fn detect_parent_ide() -> Option<ParentIde> {
    use std::env;

    // Check TERM_PROGRAM first (most reliable)
    if let Ok(term_program) = env::var("TERM_PROGRAM") {
        match term_program.as_str() {
            "vscode" => return Some(ParentIde::VSCode),
            "vscode-insiders" => return Some(ParentIde::VSCodeInsiders),
            "cursor" => return Some(ParentIde::Cursor),
            "Zed" => return Some(ParentIde::Zed),
            _ => {}
        }
    }

    // Check for Zed's terminal marker
    if env::var("ZED_TERM").is_ok() {
        return Some(ParentIde::Zed);
    }

    // Check for VS Code's IPC hook (backup detection)
    if env::var("VSCODE_IPC_HOOK_CLI").is_ok() {
        return Some(ParentIde::VSCode);
    }

    // Check for JetBrains terminal
    if let Ok(terminal_emulator) = env::var("TERMINAL_EMULATOR") {
        if terminal_emulator.starts_with("JetBrains") {
            if let Ok(idea_dir) = env::var("IDEA_INITIAL_DIRECTORY") {
                if idea_dir.contains("AndroidStudio") {
                    return Some(ParentIde::AndroidStudio);
                }
            }
            return Some(ParentIde::IntelliJ);
        }
    }

    // Check for Neovim's socket (running inside :terminal)
    if env::var("NVIM").is_ok() {
        return Some(ParentIde::Neovim);
    }

    None
}

/// Get the editor config for a detected parent IDE.
pub fn editor_config_for_ide(ide: ParentIde) -> EditorConfig {
    match ide {
        ParentIde::VSCode => EditorConfig {
            command: "code",
            open_pattern: "code --reuse-window $FILE",
            diff_pattern: "code --reuse-window --diff $LEFT $RIGHT",
            display_name: ide.display_name(),
            waits: false,
        },
        ParentIde::VSCodeInsiders => EditorConfig {
            command: "code-insiders",
            open_pattern: "code-insiders --reuse-window $FILE",
            diff_pattern: "code-insiders --reuse-window --diff $LEFT $RIGHT",
            display_name: ide.display_name(),
            waits: false,
        },
        ParentIde::Cursor => EditorConfig {
            command: "cursor",
            open_pattern: "cursor --reuse-window $FILE",
            diff_pattern: "cursor --reuse-window --diff $LEFT $RIGHT",
            display_name: ide.display_name(),
            waits: false,
        },
        ParentIde::Zed => EditorConfig {
            command: "zed",
            open_pattern: "zed $FILE",
            diff_pattern: "zed --diff $LEFT $RIGHT",
            display_name: ide.display_name(),
            waits: false,
        },
        ParentIde::IntelliJ => EditorConfig {
            command: "idea",
            open_pattern: "idea $FILE",
            diff_pattern: "idea diff $LEFT $RIGHT",
            display_name: ide.display_name(),
            waits: false,
        },
        ParentIde::AndroidStudio => EditorConfig {
            command: "studio",
            open_pattern: "studio $FILE",
            diff_pattern: "studio diff $LEFT $RIGHT",
            display_name: ide.display_name(),
            waits: false,
        },
        ParentIde::Neovim => EditorConfig {
            command: "nvim",
            open_pattern: "nvim --server $NVIM --remote $FILE",
            diff_pattern: "",
            display_name: ide.display_name(),
            waits: false,
        },
    }
}

/// Detect the user's preferred editor.
///
/// Detection order:
/// 1. **Parent IDE** - If running in an IDE's terminal, use that IDE
/// 2. $VISUAL environment variable
/// 3. $EDITOR environment variable
/// 4. Check for common editors in PATH
pub fn detect_editor() -> Option<EditorConfig> {
    use std::env;

    // Priority 1: Parent IDE (most important for instance reuse)
    if let Some(ide) = detect_parent_ide() {
        return Some(editor_config_for_ide(ide));
    }

    for var in ["VISUAL", "EDITOR"] {
        if let Ok(editor) = env::var(var) {
            // Extract command name from path
            let cmd = Path::new(&editor)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&editor);

            if let Some(config) = find_editor_config(cmd) {
                return Some(config);
            }
        }
    }

    KNOWN_EDITORS
        .iter()
        .find(|config| is_command_available(config.command))
        .cloned()
}

/// Find editor config by command name.
///
/// Exact names win over substring matches so that `vim` does not resolve to
/// Neovim's entry and vice versa.
pub fn find_editor_config(cmd: &str) -> Option<EditorConfig> {
    KNOWN_EDITORS
        .iter()
        .find(|e| e.command == cmd)
        .or_else(|| KNOWN_EDITORS.iter().find(|e| cmd.contains(e.command)))
        .cloned()
}

/// Check if a command is available in PATH.
fn is_command_available(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

// ─────────────────────────────────────────────────────────────────────────────
// EditorSettings Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Effective editor command line patterns after detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEditor {
    pub command: String,
    pub open_pattern: String,
    pub diff_pattern: Option<String>,
    pub display_name: String,
    pub waits: bool,
}

impl EditorSettings {
    /// Resolve the effective editor command and patterns.
    ///
    /// Priority order:
    /// 1. Explicitly configured command (if set)
    /// 2. Parent IDE detection (if running in an IDE terminal)
    /// 3. $VISUAL / $EDITOR environment variables
    /// 4. Common editors in PATH
    ///
    /// Custom patterns always override the editor-specific ones.
    pub fn resolve(&self) -> Option<ResolvedEditor> {
        let known = if self.command.is_empty() {
            Some(detect_editor()?)
        } else {
            find_editor_config(&self.command)
        };

        let command = if self.command.is_empty() {
            known.as_ref()?.command.to_string()
        } else {
            self.command.clone()
        };

        let open_pattern = if self.open_pattern == default_open_pattern() {
            known
                .as_ref()
                .map(|e| e.open_pattern.to_string())
                .unwrap_or_else(|| self.open_pattern.clone())
        } else {
            self.open_pattern.clone()
        };

        let diff_pattern = if self.diff_pattern.is_empty() {
            known
                .as_ref()
                .map(|e| e.diff_pattern)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
        } else {
            Some(self.diff_pattern.clone())
        };

        let display_name = known
            .as_ref()
            .map(|e| e.display_name.to_string())
            .unwrap_or_else(|| command.clone());

        Some(ResolvedEditor {
            command,
            open_pattern,
            diff_pattern,
            display_name,
            waits: known.map(|e| e.waits).unwrap_or(false),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Where settings are read from. Re-read on every switch request.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    explicit: Option<PathBuf>,
    workspace: PathBuf,
}

impl SettingsLoader {
    pub fn new(workspace: impl Into<PathBuf>, explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            workspace: workspace.into(),
        }
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Load the current settings.
    ///
    /// An explicit `--config` file must exist and parse; implicit files
    /// degrade to defaults.
    pub fn load(&self) -> Result<Settings> {
        match &self.explicit {
            Some(path) => load_settings_file(path),
            None => Ok(load_settings(&self.workspace)),
        }
    }
}

/// Load settings from `<workspace>/.qswitch/config.toml`, falling back to the
/// user config directory.
///
/// Returns default settings if no file exists or the file can't be parsed.
pub fn load_settings(workspace: &Path) -> Settings {
    let candidates = [
        Some(workspace.join(QSWITCH_DIR).join(CONFIG_FILENAME)),
        user_config_path(),
    ];

    let Some(config_path) = candidates.into_iter().flatten().find(|p| p.exists()) else {
        debug!("No config file for {:?}, using defaults", workspace);
        return Settings::default();
    };

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from an explicitly requested file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", path.display(), e)))
}

/// `<config_dir>/quick-switch/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Create a default config file in the .qswitch/ directory.
///
/// Never overwrites an existing config. Returns the config path.
pub fn init_config_dir(workspace: &Path) -> Result<PathBuf> {
    let qswitch_dir = workspace.join(QSWITCH_DIR);

    if !qswitch_dir.exists() {
        std::fs::create_dir_all(&qswitch_dir)
            .map_err(|e| Error::config(format!("Failed to create .qswitch dir: {}", e)))?;
    }

    let config_path = qswitch_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

fn generate_default_config() -> String {
    r#"# quick-switch configuration

# Open the quick-open command when no related file exists.
fallback_to_quick_open = true

# Rules are tried in order; the first pattern matching the current file wins.
# Templates may reference capture groups: $1..$99, $<name>, $& (whole match).
[[rules]]
pattern = '(.*)\.ts$'
list = ["$1.ts", "$1.test.ts", "$1.spec.ts"]

[[rules]]
pattern = '(.*)\.(c|cc|cpp|h|hpp)$'
list = ["$1.h", "$1.hpp", "$1.c", "$1.cc", "$1.cpp"]

# Search keyword for the quick-open fallback (default: the file name).
# [quick_open_keyword]
# pattern = '^.*/([^/.]+)[^/]*$'
# result = "$1"

[editor]
# Editor command (leave empty for auto-detection)
command = ""
# Variables: $EDITOR, $FILE
open_pattern = "$EDITOR $FILE"
# Variables: $EDITOR, $LEFT, $RIGHT, $TITLE (empty: editor default)
diff_pattern = ""
# Command printing the chosen path, e.g. "fzf --query $KEYWORD"
quick_open_pattern = ""

[picker]
auto_select_single = true
"#
    .to_string()
}
