//! qswitch-app - Configuration, editor integration and switch orchestration
//!
//! This crate loads settings, drives a switch request through the rule
//! engine and session memory of `qswitch-core`, and hands the result to a
//! [`Workbench`] host (terminal UI or headless session).

pub mod config;
pub mod editor;
pub mod switcher;
pub mod workbench;

// Re-export primary types
pub use config::{load_settings, Settings, SettingsLoader};
pub use editor::{EditorError, OpenResult};
pub use switcher::{
    compare_title, GroupSource, NothingReason, SwitchAction, SwitchCommand, SwitchOutcome,
    Switcher,
};
pub use workbench::{LocalWorkbench, PickItem, Workbench};
