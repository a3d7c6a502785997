// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation for modcat.
//!
//! ```text
//! targets --registry--> names --target_config--> TargetConfig
//!                                                    |
//!   manifest (once) + banner template --render-->    |
//!                                                    v
//!                                     BuildConfig --bundle::build--> dest
//! ```

use anyhow::{Context, bail};

use crate::banner::{BannerContext, PackageManifest};
use crate::bundle::exclude::ExclusionSet;
use crate::bundle::{self, BuildConfig, BuildReport};
use crate::cli::build::BuildArgs;
use crate::config::Config;
use crate::config::types::TargetConfig;
use crate::error::{ConfigError, Result};
use crate::target::TargetRegistry;

/// Main handler for build command.
///
/// Targets are built one after another; the first failure stops the run.
///
/// # Errors
///
/// Returns an error if target resolution fails, `--output` is used with
/// more than one target, the manifest or banner is invalid, or a build
/// fails.
pub fn run_build_command(
    args: &BuildArgs,
    config: &Config,
    dry_run: bool,
) -> Result<Vec<BuildReport>> {
    let registry = TargetRegistry::from_config(config)?;
    let names = registry.select(&args.targets)?;

    if names.is_empty() {
        bail!("no targets to build; add a [targets.<name>] table or enable one");
    }

    if args.output.is_some() && names.len() != 1 {
        return Err(ConfigError::InvalidValue {
            section: "cli".to_string(),
            key: "--output".to_string(),
            message: format!("requires exactly one target, {} selected", names.len()),
        }
        .into());
    }

    let manifest = config
        .package
        .manifest
        .as_deref()
        .map(PackageManifest::load)
        .transpose()?;
    let banner = BannerContext::today(manifest);
    let exclusions = ExclusionSet::parse(args.exclude.as_deref());

    let mut reports = Vec::with_capacity(names.len());
    for name in &names {
        let target = config.target_config(name)?;
        let build_config = build_config_for(config, target, &banner, &exclusions, args)?;

        tracing::info!(target = %name, "building target");
        let report = bundle::build(&build_config, dry_run)
            .with_context(|| format!("failed to build target '{name}'"))?;
        reports.push(report);
    }

    tracing::info!(targets = names.len(), "Build completed successfully");
    Ok(reports)
}

fn build_config_for(
    config: &Config,
    target: TargetConfig,
    banner: &BannerContext,
    exclusions: &ExclusionSet,
    args: &BuildArgs,
) -> Result<BuildConfig> {
    let template = target
        .banner
        .as_deref()
        .unwrap_or(&config.banner.template);
    let rendered = banner
        .render(template)
        .with_context(|| format!("invalid banner for target '{}'", target.name))?;

    let dest = args.output.clone().unwrap_or(target.dest);

    Ok(BuildConfig::builder()
        .with_modules(target.modules)
        .with_base_path(target.base_path)
        .with_dest(dest)
        .with_banner(rendered)
        .with_exclusions(exclusions.clone())
        .with_core(target.core)
        .with_extension(target.extension)
        .with_encoding(target.encoding)
        .with_wrapper(config.wrapper.clone())
        .build())
}
