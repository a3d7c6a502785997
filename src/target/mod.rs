// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Target registry for resolving target names and aliases.
//!
//! ```text
//! input ["default", "lite*"]
//!   resolve_aliases: "default" --> [all]
//!   match_pattern:   "lite*"   --> [lite, lite-zepto]
//!   dedupe + preserve order
//!
//! input []  --> every enabled target, in name order
//! ```

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Context;
use wax::{Glob, Program};

use crate::config::Config;
use crate::config::types::Aliases;
use crate::error::{ConfigError, Result};

/// Registry for looking up build targets by name, alias, or glob.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    /// Target name to its `enabled` flag.
    targets: BTreeMap<String, bool>,

    /// Aliases mapping names to target lists.
    aliases: Aliases,
}

impl TargetRegistry {
    /// Creates an empty registry with the given aliases.
    #[must_use]
    pub const fn new(aliases: Aliases) -> Self {
        Self {
            targets: BTreeMap::new(),
            aliases,
        }
    }

    /// Registry of every `[targets.*]` table in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a target cannot be resolved.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::new(config.aliases.clone());
        for name in config.targets.keys() {
            let target = config.target_config(name)?;
            registry.register(name.clone(), target.enabled);
        }
        Ok(registry)
    }

    /// Registers a target.
    pub fn register(&mut self, name: impl Into<String>, enabled: bool) {
        self.targets.insert(name.into(), enabled);
    }

    /// All registered target names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Registered targets that are enabled.
    #[must_use]
    pub fn enabled(&self) -> Vec<String> {
        self.targets
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.clone())
            .collect()
    }

    #[must_use]
    pub const fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    /// Expands aliases in a list of target patterns.
    ///
    /// Aliases may refer to other aliases. An alias that refers back to
    /// itself is expanded once and then left alone.
    #[must_use]
    pub fn resolve_aliases(&self, patterns: &[String]) -> Vec<String> {
        let mut result = Vec::new();
        self.expand_into(patterns, &mut Vec::new(), &mut result);
        result
    }

    fn expand_into<'a>(
        &'a self,
        patterns: &'a [String],
        stack: &mut Vec<&'a str>,
        result: &mut Vec<String>,
    ) {
        for pattern in patterns {
            match self.aliases.get(pattern) {
                Some(_) if stack.contains(&pattern.as_str()) => {
                    tracing::warn!(alias = %pattern, "alias refers to itself");
                }
                Some(targets) => {
                    stack.push(pattern);
                    self.expand_into(targets, stack, result);
                    stack.pop();
                }
                None => result.push(pattern.clone()),
            }
        }
    }

    /// Matches a name or glob pattern against registered targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn match_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        if self.targets.contains_key(pattern) {
            return Ok(vec![pattern.to_string()]);
        }

        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        Ok(self
            .targets
            .keys()
            .filter(|name| glob.is_match(name.as_str()))
            .cloned()
            .collect())
    }

    /// Resolves target names, aliases and globs to concrete target names.
    ///
    /// An empty list selects every enabled target. Otherwise aliases are
    /// expanded, globs matched, and duplicates dropped with first-seen
    /// order kept. Explicitly named targets are selected even when
    /// disabled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownTarget` for a pattern that matches no
    /// target, or an error for an invalid glob.
    pub fn select(&self, specs: &[String]) -> Result<Vec<String>> {
        if specs.is_empty() {
            return Ok(self.enabled());
        }

        let mut result = Vec::new();
        let mut seen = BTreeSet::new();

        for pattern in &self.resolve_aliases(specs) {
            let matches = self.match_pattern(pattern)?;
            if matches.is_empty() {
                return Err(ConfigError::UnknownTarget(pattern.clone()).into());
            }

            for name in matches {
                if seen.insert(name.clone()) {
                    result.push(name);
                }
            }
        }

        tracing::debug!(targets = ?result, "selected targets");
        Ok(result)
    }
}

#[cfg(test)]
mod tests;
