//! Configuration file parsing for quick-switch
//!
//! Supports:
//! - `--config <FILE>` - Explicit settings file
//! - `.qswitch/config.toml` - Workspace settings
//! - `<config dir>/quick-switch/config.toml` - User settings

pub mod settings;
pub mod types;

pub use settings::{
    detect_editor, detect_parent_ide, editor_config_for_ide, find_editor_config, init_config_dir,
    load_settings, load_settings_file, user_config_path, EditorConfig, ResolvedEditor,
    SettingsLoader, CONFIG_FILENAME, KNOWN_EDITORS, QSWITCH_DIR,
};
pub use types::*;
