//! File group rules: a pattern plus replacement templates that derive the
//! related files of a path.
//!
//! Rules are rebuilt from configuration for every switch request and are
//! immutable afterwards. A malformed pattern never aborts anything; the rule
//! simply never matches.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::path::normalize_path;
use crate::prelude::*;
use crate::template::replace_first;

/// A configured pattern and the templates of its related files.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    list: Vec<String>,
    /// `None` when `pattern` failed to compile
    regex: Option<Regex>,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, list: Vec<String>) -> Self {
        let pattern = pattern.into();
        let regex = match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!("Ignoring rule with invalid pattern {:?}: {}", pattern, e);
                None
            }
        };
        Self {
            pattern,
            list,
            regex,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn list(&self) -> &[String] {
        &self.list
    }

    /// Whether the pattern compiled.
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    /// Unanchored search of the pattern in `path`.
    pub fn matches(&self, path: &Path) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(&path.to_string_lossy()),
            None => false,
        }
    }

    /// Derive the related paths of `path`, one per template, in template order.
    ///
    /// Each template replaces the first match of the pattern; the result is
    /// resolved against `base` and normalized. The source path itself and
    /// duplicates are kept, filtering is up to the caller.
    pub fn expand(&self, path: &Path, base: &Path) -> Vec<PathBuf> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };

        let source = path.to_string_lossy();
        self.list
            .iter()
            .map(|template| {
                let replaced = replace_first(regex, &source, template);
                normalize_path(Path::new(&replaced), base)
            })
            .collect()
    }
}

/// Rules in configured order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// First rule whose pattern matches `path`; later rules are not evaluated.
    pub fn first_match(&self, path: &Path) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    /// Whether any rule matches `path`.
    pub fn is_matched(&self, path: &Path) -> bool {
        self.first_match(path).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
