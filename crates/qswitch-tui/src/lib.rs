//! qswitch-tui - Terminal host for quick-switch
//!
//! Provides the ratatui candidate picker and a [`TerminalWorkbench`] that
//! launches the configured editor for the switcher in `qswitch-app`.

pub mod selector;
pub mod terminal;
pub mod workbench;

// Re-export main entry points
pub use selector::{select_candidate, SelectionResult};
pub use terminal::install_panic_hook;
pub use workbench::TerminalWorkbench;
