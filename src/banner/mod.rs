// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! License banner rendering.
//!
//! ```text
//! package manifest (JSON) ─┐
//!                          ├─> render(template) ─> "/*! Title - v1.0.0 - 2026-10-16 ..."
//! build date (local)  ─────┘
//! ```
//!
//! Placeholders are `{name}`; `{{` and `}}` are literal braces. A `{` that
//! does not start a well-formed placeholder is copied as-is so templates can
//! contain ordinary code.

use std::path::Path;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::BannerError;

/// Default template, matching the classic Grunt banner layout.
pub const DEFAULT_TEMPLATE: &str = "/*! {title} - v{version} - {date}\n{homepage_line}* Copyright (c) {year} {author}; Licensed {licenses} */\n";

/// Subset of a jQuery-plugin/npm style package manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageManifest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    pub licenses: Vec<License>,
}

/// `author` is either `{ "name": ... }` or a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Person { name: String },
    Plain(String),
}

impl Author {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Person { name } | Self::Plain(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PackageManifest {
    /// Reads and parses a JSON manifest.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::ManifestRead`] or [`BannerError::ManifestParse`].
    pub fn load(path: &Path) -> Result<Self, BannerError> {
        let content = std::fs::read_to_string(path).map_err(|source| BannerError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| BannerError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `title`, or `name` when the title is absent or empty.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.name)
    }

    /// License types joined with `", "`.
    #[must_use]
    pub fn license_list(&self) -> String {
        self.licenses
            .iter()
            .map(|l| l.kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Values available to a banner template.
#[derive(Debug, Clone)]
pub struct BannerContext {
    manifest: Option<PackageManifest>,
    date: NaiveDate,
}

impl BannerContext {
    #[must_use]
    pub const fn new(manifest: Option<PackageManifest>, date: NaiveDate) -> Self {
        Self { manifest, date }
    }

    /// Context dated with the local calendar day.
    #[must_use]
    pub fn today(manifest: Option<PackageManifest>) -> Self {
        Self::new(manifest, Local::now().date_naive())
    }

    #[must_use]
    pub const fn manifest(&self) -> Option<&PackageManifest> {
        self.manifest.as_ref()
    }

    fn lookup(&self, key: &str) -> Result<String, BannerError> {
        match key {
            "date" => return Ok(self.date.format("%Y-%m-%d").to_string()),
            "year" => return Ok(self.date.year().to_string()),
            "title" | "name" | "version" | "homepage" | "homepage_line" | "author"
            | "licenses" => {}
            _ => return Err(BannerError::UnknownPlaceholder(key.to_string())),
        }

        let pkg = self
            .manifest
            .as_ref()
            .ok_or_else(|| BannerError::NoManifest(key.to_string()))?;

        let homepage = pkg.homepage.as_deref().unwrap_or_default();
        Ok(match key {
            "title" => pkg.display_title().to_string(),
            "name" => pkg.name.clone(),
            "version" => pkg.version.clone(),
            "homepage" => homepage.to_string(),
            "homepage_line" if homepage.is_empty() => String::new(),
            "homepage_line" => format!("* {homepage}\n"),
            "author" => pkg.author.as_ref().map(Author::name).unwrap_or_default().to_string(),
            _ => pkg.license_list(),
        })
    }

    /// Expands `template`.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::UnknownPlaceholder`] for unknown keys and
    /// [`BannerError::NoManifest`] when a manifest field is used without a
    /// manifest.
    pub fn render(&self, template: &str) -> Result<String, BannerError> {
        let mut out = String::with_capacity(template.len() + 64);
        let mut rest = template;

        while let Some(pos) = rest.find(['{', '}']) {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if let Some(after) = tail.strip_prefix("{{") {
                out.push('{');
                rest = after;
            } else if let Some(after) = tail.strip_prefix("}}") {
                out.push('}');
                rest = after;
            } else if let Some((key, after)) = placeholder(tail) {
                out.push_str(&self.lookup(key)?);
                rest = after;
            } else {
                out.push_str(&tail[..1]);
                rest = &tail[1..];
            }
        }
        out.push_str(rest);

        Ok(out)
    }
}

/// Splits `{key}rest` into `(key, rest)` when `key` is a placeholder name.
fn placeholder(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix('{')?;
    let end = inner.find('}')?;
    let key = &inner[..end];
    let valid = !key.is_empty() && key.chars().all(|c| c.is_ascii_lowercase() || c == '_');
    valid.then(|| (key, &inner[end + 1..]))
}

#[cfg(test)]
mod tests;
