// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source text encoding (UTF-8, Windows-1252, Shift_JIS, ...).
//!
//! ```text
//! module file --(decode)--> UTF-8 String --(assemble)--> artifact --(encode)--> dest
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD. The same encoding is used
//! for reading modules and writing the artifact, so a non-UTF-8 project
//! round-trips unchanged.

use encoding_rs::{Encoding, UTF_8};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;

use crate::error::ConfigError;

/// A WHATWG encoding selected by label in the config (`encoding = "utf-8"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl Default for TextEncoding {
    fn default() -> Self {
        Self(UTF_8)
    }
}

impl TextEncoding {
    pub const UTF8: Self = Self(UTF_8);

    /// Looks an encoding up by any of its WHATWG labels (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the label is unknown.
    pub fn for_label(label: &str) -> std::result::Result<Self, ConfigError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(Self)
            .ok_or_else(|| ConfigError::InvalidValue {
                section: "target".to_string(),
                key: "encoding".to_string(),
                message: format!("unknown encoding label '{label}'"),
            })
    }

    /// Canonical name, e.g. `UTF-8` or `windows-1252`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decodes raw file bytes to text.
    ///
    /// A leading BOM is only stripped for the BOM of this encoding; the rest
    /// of the content passes through untouched.
    #[must_use]
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        let (text, _had_errors) = self.0.decode_with_bom_removal(bytes);
        text
    }

    /// Encodes text for writing.
    ///
    /// UTF-16 labels encode as UTF-8 per the WHATWG output encoding rules.
    #[must_use]
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        let (bytes, _encoding, _unmappable) = self.0.encode(text);
        bytes
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::for_label(s)
    }
}

impl Serialize for TextEncoding {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TextEncoding {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Self::for_label(&label).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests;
