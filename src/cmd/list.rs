// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for modcat.

use std::path::Path;

use anyhow::Context;

use crate::bundle::{marker, with_core};
use crate::cli::build::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::target::TargetRegistry;

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if target resolution fails or the artifact cannot be
/// read or parsed.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    if let Some(artifact) = &args.artifact {
        for name in artifact_modules(artifact, config)? {
            println!("{name}");
        }
        return Ok(());
    }

    if args.aliases {
        if config.aliases.is_empty() {
            println!("No aliases defined");
        } else {
            for (name, targets) in &config.aliases {
                println!("{} = {}", name, targets.join(", "));
            }
        }
        return Ok(());
    }

    let registry = TargetRegistry::from_config(config)?;
    let names: Vec<String> = if args.targets.is_empty() {
        registry.names().map(str::to_string).collect()
    } else {
        registry.select(&args.targets)?
    };

    if names.is_empty() {
        println!("No targets found");
        return Ok(());
    }

    for name in &names {
        let target = config.target_config(name)?;
        let mut line = name.clone();
        if args.modules {
            line = format!("{line}: {}", with_core(&target.core, &target.modules).join(", "));
        }
        if !target.enabled {
            line.push_str(" (disabled)");
        }
        println!("{line}");
    }
    Ok(())
}

/// Module names recorded in an assembled artifact, in order.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its markers are
/// unbalanced.
pub fn artifact_modules(path: &Path, config: &Config) -> Result<Vec<String>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = config.target.encoding.decode(&bytes);
    let names = marker::segment_names(&text)
        .with_context(|| format!("malformed artifact {}", path.display()))?;
    Ok(names)
}
