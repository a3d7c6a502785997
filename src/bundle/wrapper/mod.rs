// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Closure wrapper around the assembled modules.
//!
//! ```text
//! ;(function($) {
//!   ...modules...
//! })(window.jQuery || window.Zepto);
//! ```
//!
//! The fallback between the two host objects happens when the artifact is
//! loaded, not at build time. Only the names are configurable.

use serde::{Deserialize, Serialize};

/// The `[wrapper]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Wrapper {
    /// Name of the closure's single parameter.
    pub param: String,
    /// Host library object passed in when present.
    pub primary: String,
    /// Compatible object used when `primary` is unavailable.
    pub fallback: String,
}

impl Default for Wrapper {
    fn default() -> Self {
        Self {
            param: "$".to_string(),
            primary: "window.jQuery".to_string(),
            fallback: "window.Zepto".to_string(),
        }
    }
}

impl Wrapper {
    /// Line that opens the closure.
    #[must_use]
    pub fn opening(&self) -> String {
        format!(";(function({}) {{\n", self.param)
    }

    /// Line that closes the closure and invokes it.
    #[must_use]
    pub fn closing(&self) -> String {
        format!("}})({} || {});", self.primary, self.fallback)
    }
}
