// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exclusion resolver.
//!
//! ```text
//! "ajax, image,,zzz"
//!   parse  --> {ajax, image, zzz}
//!   apply  ["inline","ajax","image","ajax"] --> ["inline"]
//!          zzz matched nothing --> warn, no error
//! ```
//!
//! Matching is exact and case-sensitive. Every occurrence of an excluded
//! name is dropped, and the result is always a fresh list in the original
//! relative order.

use tracing::{info, warn};

/// Module names parsed from a `--exclude` value.
///
/// Tokens are kept in first-seen order so log output follows the user's
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    /// Parses a delimited exclusion string.
    ///
    /// Any run of whitespace and/or commas separates tokens; empty tokens
    /// from leading, trailing or repeated delimiters are discarded. `None`
    /// and blank input yield an empty set.
    #[must_use]
    pub fn parse(input: Option<&str>) -> Self {
        let mut names: Vec<String> = Vec::new();
        for token in input
            .unwrap_or_default()
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            if !names.iter().any(|n| n == token) {
                names.push(token.to_string());
            }
        }
        Self { names }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Excluded names in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns `modules` without any entry named in this set.
    ///
    /// Logs each removed name; names that match nothing are logged as a
    /// warning and otherwise ignored.
    #[must_use]
    pub fn apply(&self, modules: &[String]) -> Vec<String> {
        if self.is_empty() {
            return modules.to_vec();
        }

        for name in self.iter() {
            let hits = modules.iter().filter(|m| *m == name).count();
            if hits == 0 {
                warn!(module = %name, "exclusion matched no module");
            } else {
                info!(module = %name, "removed \"{name}\"");
            }
        }

        modules
            .iter()
            .filter(|m| !self.contains(m))
            .cloned()
            .collect()
    }
}

/// Filters `modules` by a raw exclusion string.
///
/// Shorthand for `ExclusionSet::parse(input).apply(modules)`. Never fails.
#[must_use]
pub fn resolve(modules: &[String], input: Option<&str>) -> Vec<String> {
    ExclusionSet::parse(input).apply(modules)
}
