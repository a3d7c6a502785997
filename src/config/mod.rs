// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modcat.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ./modcat.toml (unless --no-default-inis)
//! 3. --ini files, in order
//! 4. MODCAT_* env vars
//! 5. --set overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODCAT_GLOBAL__DRY=true          → global.dry = true
//! MODCAT_TARGET__BASE_PATH=lib/js  → target.base_path = "lib/js"
//! MODCAT_WRAPPER__PARAM=jq         → wrapper.param = "jq"
//! ```
//!
//! # Target-Specific Overrides
//!
//! ```toml
//! [target]
//! base_path = "src/js"
//!
//! [targets.lite]
//! modules = ["inline", "image"]
//! dest = "dist/lite.js"
//! base_path = "vendor/js" # override for lite only
//! ```

pub mod loader;
pub mod merge;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::bundle::wrapper::Wrapper;
use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use merge::TargetConfigOverride;
use types::{Aliases, BannerConfig, GlobalConfig, PackageConfig, TargetConfig, TargetDefaults};

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "modcat.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "MODCAT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Package manifest location.
    pub package: PackageConfig,
    /// Default banner template.
    pub banner: BannerConfig,
    /// Closure wrapper around the module bodies.
    pub wrapper: Wrapper,
    /// Defaults shared by every target.
    pub target: TargetDefaults,
    /// Build targets (field-level merging over `target`).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub targets: BTreeMap<String, TargetConfigOverride>,
    /// Target aliases.
    pub aliases: Aliases,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modcat::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modcat.toml")
    ///     .add_toml_file("ci.toml")
    ///     .with_env_prefix("MODCAT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolved settings for the target `name`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownTarget` if there is no `[targets.<name>]`
    /// table and `ConfigError::MissingKey` if it has no `dest`.
    pub fn target_config(&self, name: &str) -> std::result::Result<TargetConfig, ConfigError> {
        let target = self
            .targets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownTarget(name.to_string()))?;
        merge::merge_target_config(name, &self.target, target)
    }

    /// Checks that every target resolves and no alias shadows a target.
    ///
    /// # Errors
    ///
    /// Returns the first target that cannot be resolved, or an alias that
    /// shadows a target name.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for alias in self.aliases.keys() {
            if self.targets.contains_key(alias) {
                return Err(ConfigError::InvalidValue {
                    section: "aliases".to_string(),
                    key: alias.clone(),
                    message: "alias has the same name as a target".to_string(),
                });
            }
        }

        for name in self.targets.keys() {
            self.target_config(name)?;
        }

        Ok(())
    }

    /// Warns about module lists that name the core module or repeat a
    /// module. Returns the number of warnings.
    pub fn lint_targets(&self) -> usize {
        let mut warnings = 0;

        for name in self.targets.keys() {
            let Ok(target) = self.target_config(name) else {
                continue;
            };

            let mut seen = BTreeSet::new();
            for module in &target.modules {
                if *module == target.core {
                    tracing::warn!(
                        target = %name,
                        module = %module,
                        "core module listed in modules; it is always placed first"
                    );
                    warnings += 1;
                } else if !seen.insert(module.as_str()) {
                    tracing::warn!(
                        target = %name,
                        module = %module,
                        "module listed more than once"
                    );
                    warnings += 1;
                }
            }
        }

        warnings
    }

    /// Format configuration options for display.
    ///
    /// Returns one `key = value` line per effective option, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_package_options(&mut options);
        self.format_wrapper_options(&mut options);
        self.format_target_options(&mut options);
        self.format_aliases(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_package_options(&self, options: &mut BTreeMap<String, String>) {
        if let Some(manifest) = &self.package.manifest {
            options.insert("package.manifest".into(), manifest.display().to_string());
        }
        options.insert(
            "banner.template".into(),
            format!("{:?}", self.banner.template),
        );
    }

    fn format_wrapper_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("wrapper.param".into(), self.wrapper.param.clone());
        options.insert("wrapper.primary".into(), self.wrapper.primary.clone());
        options.insert("wrapper.fallback".into(), self.wrapper.fallback.clone());
    }

    fn format_target_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("target.enabled".into(), self.target.enabled.to_string());
        options.insert("target.core".into(), self.target.core.clone());
        options.insert("target.extension".into(), self.target.extension.clone());
        options.insert(
            "target.base_path".into(),
            self.target.base_path.display().to_string(),
        );
        options.insert("target.encoding".into(), self.target.encoding.to_string());

        for name in self.targets.keys() {
            let Ok(target) = self.target_config(name) else {
                continue;
            };
            let key = |field: &str| format!("targets.{name}.{field}");

            options.insert(key("modules"), target.modules.join(", "));
            options.insert(key("dest"), target.dest.display().to_string());
            options.insert(key("enabled"), target.enabled.to_string());
            options.insert(key("core"), target.core);
            options.insert(key("extension"), target.extension);
            options.insert(key("base_path"), target.base_path.display().to_string());
            options.insert(key("encoding"), target.encoding.to_string());
            if let Some(banner) = target.banner {
                options.insert(key("banner"), format!("{banner:?}"));
            }
        }
    }

    fn format_aliases(&self, options: &mut BTreeMap<String, String>) {
        for (alias, targets) in &self.aliases {
            options.insert(format!("aliases.{alias}"), targets.join(", "));
        }
    }
}
