//! Search keyword derivation for the quick-open fallback.

use std::path::Path;

use regex::Regex;

use crate::path::base_name;
use crate::prelude::*;
use crate::template::replace_first;

/// A pattern/result pair turning the current path into a search keyword.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pattern: String,
    result: String,
    regex: Option<Regex>,
}

impl KeywordRule {
    pub fn new(pattern: impl Into<String>, result: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let regex = match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!("Ignoring invalid quick-open keyword pattern {:?}: {}", pattern, e);
                None
            }
        };
        Self {
            pattern,
            result: result.into(),
            regex,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Apply the rule to `path`; `None` when the pattern is invalid or misses.
    pub fn apply(&self, path: &Path) -> Option<String> {
        let regex = self.regex.as_ref()?;
        let source = path.to_string_lossy();
        if !regex.is_match(&source) {
            return None;
        }
        Some(replace_first(regex, &source, &self.result))
    }
}

/// Derive the quick-open keyword for `path`.
///
/// Uses `rule` when it is configured and matches the full path, otherwise the
/// file's base name.
pub fn derive_keyword(path: &Path, rule: Option<&KeywordRule>) -> String {
    rule.and_then(|rule| rule.apply(path))
        .filter(|keyword| !keyword.is_empty())
        .unwrap_or_else(|| base_name(path))
}
