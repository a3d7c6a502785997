// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Target configuration merging.
//!
//! ```text
//! TargetDefaults + TargetConfigOverride --> TargetConfig
//! ```
//!
//! Only explicitly set fields (`Some`) in the override replace defaults.
//! `modules` and `dest` exist only per target.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::types::{TargetConfig, TargetDefaults};
use crate::error::ConfigError;
use crate::utility::encoding::TextEncoding;

/// One `[targets.<name>]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfigOverride {
    /// Feature modules in order, core excluded.
    pub modules: Vec<String>,
    /// Artifact path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<TextEncoding>,
    /// Banner template replacing `[banner] template` for this target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}

/// Merge a target table over the `[target]` defaults.
///
/// # Errors
///
/// Returns `ConfigError::MissingKey` if the target has no `dest`.
pub(super) fn merge_target_config(
    name: &str,
    defaults: &TargetDefaults,
    target: &TargetConfigOverride,
) -> Result<TargetConfig, ConfigError> {
    let dest = target.dest.clone().ok_or_else(|| ConfigError::MissingKey {
        section: format!("targets.{name}"),
        key: "dest".to_string(),
    })?;

    Ok(TargetConfig {
        name: name.to_string(),
        enabled: target.enabled.unwrap_or(defaults.enabled),
        modules: target.modules.clone(),
        dest,
        core: target
            .core
            .clone()
            .unwrap_or_else(|| defaults.core.clone()),
        extension: target
            .extension
            .clone()
            .unwrap_or_else(|| defaults.extension.clone()),
        base_path: target
            .base_path
            .clone()
            .unwrap_or_else(|| defaults.base_path.clone()),
        encoding: target.encoding.unwrap_or(defaults.encoding),
        banner: target.banner.clone(),
    })
}
