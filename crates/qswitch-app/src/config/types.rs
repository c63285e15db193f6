//! Configuration types for quick-switch

use serde::{Deserialize, Serialize};

use qswitch_core::{KeywordRule, Rule, RuleSet};

/// Application settings (.qswitch/config.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// File group rules, in precedence order
    #[serde(default, alias = "file_groups", alias = "fileGroups")]
    pub rules: Vec<RuleConfig>,

    /// Open the quick-open command when nothing can be switched to
    #[serde(default = "default_true", alias = "fallbackToQuickOpen")]
    pub fallback_to_quick_open: bool,

    /// Transform of the current path into the quick-open search keyword
    #[serde(default, alias = "quickOpenKeyword")]
    pub quick_open_keyword: Option<KeywordConfig>,

    #[serde(default)]
    pub editor: EditorSettings,

    #[serde(default)]
    pub picker: PickerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            fallback_to_quick_open: true,
            quick_open_keyword: None,
            editor: EditorSettings::default(),
            picker: PickerSettings::default(),
        }
    }
}

impl Settings {
    /// Build the rule set for one switch request.
    ///
    /// Entries missing `pattern` or `list` are dropped: they can never match.
    pub fn rule_set(&self) -> RuleSet {
        self.rules.iter().filter_map(RuleConfig::to_rule).collect()
    }

    /// Keyword rule, when both halves are configured.
    pub fn keyword_rule(&self) -> Option<KeywordRule> {
        let config = self.quick_open_keyword.as_ref()?;
        match (&config.pattern, &config.result) {
            (Some(pattern), Some(result)) => Some(KeywordRule::new(pattern, result)),
            _ => None,
        }
    }
}

/// One `[[rules]]` entry as written by the user.
///
/// Both fields are optional so that an incomplete entry does not invalidate
/// the whole file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub list: Option<Vec<String>>,
}

impl RuleConfig {
    pub fn new(pattern: impl Into<String>, list: Vec<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            list: Some(list),
        }
    }

    fn to_rule(&self) -> Option<Rule> {
        match (&self.pattern, &self.list) {
            (Some(pattern), Some(list)) => Some(Rule::new(pattern.clone(), list.clone())),
            _ => {
                tracing::warn!("Ignoring incomplete rule entry: {:?}", self);
                None
            }
        }
    }
}

/// `[quick_open_keyword]` section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KeywordConfig {
    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub result: Option<String>,
}

/// Editor integration settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Editor command or name (e.g., "code", "zed", "nvim").
    /// If empty, attempts auto-detection.
    #[serde(default)]
    pub command: String,

    /// Pattern for opening a file.
    /// Variables: $EDITOR, $FILE
    #[serde(default = "default_open_pattern")]
    pub open_pattern: String,

    /// Pattern for a two-way diff.
    /// Variables: $EDITOR, $LEFT, $RIGHT, $TITLE
    /// If empty, uses the editor's known diff command.
    #[serde(default)]
    pub diff_pattern: String,

    /// Command printing a chosen file path on stdout (e.g., "fzf --query $KEYWORD").
    /// Variables: $KEYWORD
    /// If empty, the fallback only reports the keyword.
    #[serde(default)]
    pub quick_open_pattern: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            command: String::new(), // Auto-detect
            open_pattern: default_open_pattern(),
            diff_pattern: String::new(),
            quick_open_pattern: String::new(),
        }
    }
}

pub(crate) fn default_open_pattern() -> String {
    "$EDITOR $FILE".to_string()
}

/// Candidate picker settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PickerSettings {
    /// Skip the prompt when exactly one candidate is available
    #[serde(default = "default_true")]
    pub auto_select_single: bool,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            auto_select_single: true,
        }
    }
}

/// Detected parent IDE when running in an integrated terminal.
///
/// This is used to open files in the *current* IDE instance rather than
/// spawning a new window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentIde {
    VSCode,
    VSCodeInsiders,
    Cursor,
    Zed,
    IntelliJ,
    AndroidStudio,
    Neovim,
}

impl ParentIde {
    pub fn display_name(&self) -> &'static str {
        match self {
            ParentIde::VSCode => "Visual Studio Code",
            ParentIde::VSCodeInsiders => "VS Code Insiders",
            ParentIde::Cursor => "Cursor",
            ParentIde::Zed => "Zed",
            ParentIde::IntelliJ => "IntelliJ IDEA",
            ParentIde::AndroidStudio => "Android Studio",
            ParentIde::Neovim => "Neovim",
        }
    }
}

fn default_true() -> bool {
    true
}
