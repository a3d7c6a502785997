// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module assembly.
//!
//! ```text
//! BuildConfig
//!    |
//!    v
//! ExclusionSet::apply(modules)        exclude/
//!    |
//!    v
//! [core] + filtered (core exactly once, first)
//!    |
//!    v
//! banner
//! ;(function($) {                    wrapper/
//!   \n/*>>core*/\n  CORE  \n  \n/*>>core*/\n   marker/ + source/
//!   \n/*>>a*/\n     A     \n  \n/*>>a*/\n
//! })(window.jQuery || window.Zepto);
//!    |
//!    v
//! write_atomic(dest)                  utility::fs
//! ```
//!
//! Everything is built in memory first; a missing module aborts before the
//! destination is touched.

pub mod exclude;
pub mod marker;
pub mod source;
pub mod wrapper;


use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{info, warn};

use crate::error::ModcatResult;
use crate::utility::encoding::TextEncoding;
use crate::utility::fs::write_atomic;

use exclude::ExclusionSet;
use source::{FsModuleSource, ModuleSource};
use wrapper::Wrapper;

/// Name of the module that every build starts with.
pub const DEFAULT_CORE: &str = "core";

/// File extension of module sources.
pub const DEFAULT_EXTENSION: &str = "js";

/// Everything one build needs. Constructed per invocation, never mutated.
#[derive(Debug, Clone, Builder)]
pub struct BuildConfig {
    /// Feature modules in concatenation order, without the core module.
    #[builder(setters(name = with_modules), into)]
    modules: Vec<String>,
    /// Directory holding `<name>.<extension>` files.
    #[builder(setters(name = with_base_path), into)]
    base_path: PathBuf,
    /// Artifact path.
    #[builder(setters(name = with_dest), into)]
    dest: PathBuf,
    /// Already rendered banner text, emitted verbatim.
    #[builder(setters(name = with_banner), into, default)]
    banner: String,
    #[builder(setters(name = with_exclusions), default)]
    exclusions: ExclusionSet,
    #[builder(setters(name = with_core), into, default = DEFAULT_CORE.to_string())]
    core: String,
    #[builder(setters(name = with_extension), into, default = DEFAULT_EXTENSION.to_string())]
    extension: String,
    #[builder(setters(name = with_encoding), default)]
    encoding: TextEncoding,
    #[builder(setters(name = with_wrapper), default)]
    wrapper: Wrapper,
}

impl BuildConfig {
    #[must_use]
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    #[must_use]
    pub fn banner(&self) -> &str {
        &self.banner
    }

    #[must_use]
    pub const fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    #[must_use]
    pub fn core(&self) -> &str {
        &self.core
    }

    #[must_use]
    pub const fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    #[must_use]
    pub const fn wrapper(&self) -> &Wrapper {
        &self.wrapper
    }

    /// Filesystem source for this config's modules.
    #[must_use]
    pub fn source(&self) -> FsModuleSource {
        FsModuleSource::new(&self.base_path, &self.extension).with_encoding(self.encoding)
    }

    /// Configured modules after exclusions, without the core module.
    #[must_use]
    pub fn filtered_modules(&self) -> Vec<String> {
        if self.exclusions.contains(&self.core) {
            warn!(module = %self.core, "core module cannot be excluded, keeping it");
        }
        self.exclusions.apply(&self.modules)
    }
}

/// Assembled artifact text and the modules it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Module names in output order, core first.
    pub modules: Vec<String>,
    /// Full artifact text.
    pub text: String,
}

/// Returns `modules` with `core` at the front, exactly once.
#[must_use]
pub fn with_core(core: &str, modules: &[String]) -> Vec<String> {
    std::iter::once(core.to_string())
        .chain(modules.iter().filter(|m| *m != core).cloned())
        .collect()
}

/// Assembles `filtered` (core is prepended here) into artifact text.
///
/// Modules are read from `source` in list order. The first module that
/// cannot be read aborts assembly.
///
/// # Errors
///
/// Returns a module error naming the module and path that failed.
pub fn assemble(
    filtered: &[String],
    core: &str,
    source: &impl ModuleSource,
    banner: &str,
    wrapper: &Wrapper,
) -> ModcatResult<Artifact> {
    let modules = with_core(core, filtered);

    info!(modules = ?modules, "Your build is made of: {}", modules.join(","));

    let mut text = String::new();
    text.push_str(banner);
    text.push_str(&wrapper.opening());

    for name in &modules {
        let content = source.read(name)?;
        let boundary = marker::marker(name);
        text.reserve(content.len() + 2 * boundary.len() + 1);
        text.push_str(&boundary);
        text.push_str(&content);
        text.push('\n');
        text.push_str(&boundary);
    }

    text.push_str(&wrapper.closing());

    Ok(Artifact { modules, text })
}

/// Result of [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Artifact destination.
    pub dest: PathBuf,
    /// Modules in the artifact, core first.
    pub modules: Vec<String>,
    /// Size of the encoded artifact.
    pub bytes: usize,
    /// `false` for dry runs.
    pub written: bool,
}

/// Runs one build: exclude, assemble, encode and persist.
///
/// With `dry_run`, modules are still read (so missing files still fail) but
/// nothing is written.
///
/// # Errors
///
/// Returns an error if a module cannot be read or the artifact cannot be
/// written. On error the destination is left untouched.
pub fn build(config: &BuildConfig, dry_run: bool) -> ModcatResult<BuildReport> {
    let filtered = config.filtered_modules();
    let artifact = assemble(
        &filtered,
        &config.core,
        &config.source(),
        &config.banner,
        &config.wrapper,
    )?;

    let bytes = config.encoding.encode(&artifact.text);

    if dry_run {
        info!(
            path = %config.dest.display(),
            bytes = bytes.len(),
            "[DRY-RUN] would write artifact"
        );
    } else {
        write_atomic(&config.dest, &bytes)?;
        info!(path = %config.dest.display(), bytes = bytes.len(), "wrote artifact");
    }

    Ok(BuildReport {
        dest: config.dest.clone(),
        modules: artifact.modules,
        bytes: bytes.len(),
        written: !dry_run,
    })
}
