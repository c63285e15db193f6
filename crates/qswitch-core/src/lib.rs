//! # qswitch-core - Core Domain Types
//!
//! Foundation crate for quick-switch. Provides the rule engine that derives
//! related files, the session memory used when no rule applies, candidate
//! filtering, selection policies, error handling and logging.
//!
//! This crate has **zero internal dependencies** and never talks to an editor
//! or a terminal; hosts inject filesystem existence checks where needed.
//!
//! ## Public API
//!
//! ### Rules (`rule`, `template`)
//! - [`Rule`] - Pattern plus replacement templates
//! - [`RuleSet`] - Ordered rules, first match wins
//! - [`replace_first()`] - First-match substitution with `$1`/`$&`/`$<name>` references
//!
//! ### Session Memory (`memory`)
//! - [`SessionMemory`] - File to last candidate group mapping
//!
//! ### Selection (`candidates`, `selection`)
//! - [`filter_candidates()`] - Drop self, missing and duplicate candidates
//! - [`SelectionContext`] - Current file, its index and the candidate group
//! - [`Selection`] - Pick / Next / Previous / Index policies
//! - [`Resolution`] - Outcome of a policy
//!
//! ### Fallback Keyword (`keyword`)
//! - [`KeywordRule`], [`derive_keyword()`] - Search keyword for quick-open
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use qswitch_core::prelude::*;
//! ```

pub mod candidates;
pub mod error;
pub mod keyword;
pub mod logging;
pub mod memory;
pub mod path;
pub mod prelude;
pub mod rule;
pub mod selection;
pub mod template;

// Re-export commonly used types at crate root for convenience
pub use candidates::{filter_candidates, position_of};
pub use error::{Error, Result, ResultExt};
pub use keyword::{derive_keyword, KeywordRule};
pub use memory::SessionMemory;
pub use path::{base_name, format_relative_path, normalize_path};
pub use rule::{Rule, RuleSet};
pub use selection::{Resolution, Selection, SelectionContext, MAX_INDEX_SHORTCUTS};
pub use template::replace_first;
