// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build and list command arguments.
//!
//! ```text
//! build [TARGET...]          nothing named → every enabled target
//!       -x "ajax,image"      tokens split on whitespace/commas
//!       -o FILE              only with exactly one selected target
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Modules to leave out, separated by commas or whitespace
    /// (e.g. --exclude=ajax,image). The core module cannot be excluded.
    #[arg(short = 'x', long, value_name = "LIST")]
    pub exclude: Option<String>,

    /// Writes the artifact here instead of the target's `dest`.
    /// Only valid when a single target is selected.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Targets to build. Aliases and globs like 'lite*' are supported.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Shows only aliases.
    #[arg(short = 'a', long)]
    pub aliases: bool,

    /// Shows the module list of each target, core first.
    #[arg(short = 'm', long)]
    pub modules: bool,

    /// Lists the module segments found in an assembled artifact.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["aliases", "modules"])]
    pub artifact: Option<PathBuf>,

    /// When given, acts like the targets given to `build` and shows only
    /// the targets that would be built.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,
}
