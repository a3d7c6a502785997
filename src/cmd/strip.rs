// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Strip command implementation for modcat.

use anyhow::Context;

use crate::bundle::exclude::ExclusionSet;
use crate::bundle::marker::{self, Stripped};
use crate::cli::strip::StripArgs;
use crate::config::Config;
use crate::error::Result;
use crate::utility::encoding::TextEncoding;
use crate::utility::fs::write_atomic;

/// Removes module segments from an assembled artifact.
///
/// # Errors
///
/// Returns an error if the artifact cannot be read, its markers are
/// unbalanced, or the result cannot be written.
pub fn run_strip_command(args: &StripArgs, config: &Config, dry_run: bool) -> Result<Stripped> {
    let encoding = match &args.encoding {
        Some(label) => TextEncoding::for_label(label)?,
        None => config.target.encoding,
    };
    let core = args.core.as_deref().unwrap_or(&config.target.core);

    let bytes = std::fs::read(&args.artifact)
        .with_context(|| format!("failed to read {}", args.artifact.display()))?;
    let text = encoding.decode(&bytes);

    let exclusions = ExclusionSet::parse(Some(&args.exclude));
    let stripped = marker::strip(&text, &exclusions, core)
        .with_context(|| format!("malformed artifact {}", args.artifact.display()))?;

    let dest = args.output.as_ref().unwrap_or(&args.artifact);
    if dry_run {
        tracing::info!(
            path = %dest.display(),
            removed = ?stripped.removed,
            "[DRY-RUN] would write stripped artifact"
        );
    } else {
        write_atomic(dest, &encoding.encode(&stripped.text))?;
        tracing::info!(path = %dest.display(), removed = ?stripped.removed, "wrote stripped artifact");
    }

    Ok(stripped)
}
