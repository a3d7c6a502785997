// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Where module source text comes from.
//!
//! ```text
//! ModuleSource
//!   locate("gallery") --> src/js/gallery.js
//!   read("gallery")   --> decoded text | ModuleError
//! ```

use std::path::{Path, PathBuf};

use crate::error::ModuleError;
use crate::utility::encoding::TextEncoding;

/// Resolves module names to source text.
pub trait ModuleSource {
    /// Path a module would be read from. Used in diagnostics.
    fn locate(&self, name: &str) -> PathBuf;

    /// Reads the full text of module `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError`] if the module is missing or unreadable.
    fn read(&self, name: &str) -> Result<String, ModuleError>;
}

/// Reads `<base_path>/<name>.<extension>` from disk.
#[derive(Debug, Clone)]
pub struct FsModuleSource {
    base_path: PathBuf,
    extension: String,
    encoding: TextEncoding,
}

impl FsModuleSource {
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            extension: extension.into(),
            encoding: TextEncoding::default(),
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl ModuleSource for FsModuleSource {
    fn locate(&self, name: &str) -> PathBuf {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            self.base_path.join(name)
        } else {
            self.base_path.join(format!("{name}.{ext}"))
        }
    }

    fn read(&self, name: &str) -> Result<String, ModuleError> {
        let path = self.locate(name);
        let bytes = std::fs::read(&path).map_err(|e| ModuleError::from_io(name, path.clone(), e))?;
        tracing::trace!(module = %name, path = %path.display(), bytes = bytes.len(), "read module");
        Ok(self.encoding.decode(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests;
