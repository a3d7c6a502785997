// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Strip command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `strip` command.
#[derive(Debug, Clone, Args)]
pub struct StripArgs {
    /// Assembled artifact to read.
    #[arg(value_name = "ARTIFACT")]
    pub artifact: PathBuf,

    /// Modules to remove, separated by commas or whitespace.
    #[arg(short = 'x', long, value_name = "LIST")]
    pub exclude: String,

    /// Writes the result here instead of replacing ARTIFACT.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Name of the core module. Defaults to `target.core`.
    #[arg(long, value_name = "NAME")]
    pub core: Option<String>,

    /// Text encoding of the artifact. Defaults to `target.encoding`.
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,
}
