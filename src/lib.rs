//! quick-switch library
//!
//! Jump between related files (source/test, header/implementation, ...)
//! from a terminal or through a long-running headless session.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
