// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for modcat.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PackageConfig, BannerConfig, Wrapper,
//!         TargetDefaults, targets{name → TargetConfigOverride}
//! Aliases: alias name → [target list]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::banner::DEFAULT_TEMPLATE;
use crate::bundle::{DEFAULT_CORE, DEFAULT_EXTENSION};
use crate::logging::LogLevel;
use crate::utility::encoding::TextEncoding;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Assemble without writing artifacts.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// `[package]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageConfig {
    /// JSON manifest feeding the banner placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
}

/// `[banner]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BannerConfig {
    /// Template used by targets without their own `banner`.
    pub template: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

/// Target aliases mapping alias names to target patterns.
pub type Aliases = BTreeMap<String, Vec<String>>;

/// `[target]` section: defaults shared by every target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetDefaults {
    /// Whether targets are built when no target is named.
    pub enabled: bool,
    /// Module always placed first.
    pub core: String,
    /// Module file extension.
    pub extension: String,
    /// Directory holding module files.
    pub base_path: PathBuf,
    /// Encoding of module files and the artifact.
    pub encoding: TextEncoding,
}

impl Default for TargetDefaults {
    fn default() -> Self {
        Self {
            enabled: true,
            core: DEFAULT_CORE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            base_path: PathBuf::from("src/js"),
            encoding: TextEncoding::default(),
        }
    }
}

/// Fully resolved settings for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetConfig {
    pub name: String,
    pub enabled: bool,
    pub modules: Vec<String>,
    pub dest: PathBuf,
    pub core: String,
    pub extension: String,
    pub base_path: PathBuf,
    pub encoding: TextEncoding,
    /// Target-specific banner template, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}
