// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modcat using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modcat [global options] <command>
//! version
//! options
//! inis
//! build [targets...] [-x LIST] [-o FILE]
//! list [-a] [-m] [--artifact FILE] [targets...]
//! strip <ARTIFACT> -x LIST [-o FILE]
//! ```

pub mod build;
pub mod global;
pub mod strip;

#[cfg(test)]
mod tests;

use crate::cli::build::{BuildArgs, ListArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::strip::StripArgs;
use clap::{Parser, Subcommand};

/// Feature module assembler.
///
/// Concatenates a core module and a selectable set of feature modules into
/// one wrapped script.
#[derive(Debug, Parser)]
#[command(
    name = "modcat",
    author,
    version,
    about = "Feature Module Assembler",
    long_about = "modcat Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Assembles a core module and a list of feature modules into a\n\
                  single wrapped script with a license banner.\n\n\
                  Invoking `modcat build` builds every enabled target. Do\n\
                  `modcat build <target>... --exclude=ajax,image` to build\n\
                  specific targets without some modules. See\n\
                  `modcat <command> --help` for more information about a command.",
    after_help = "INI FILES:\n\n\
                  By default, modcat loads `modcat.toml` from the current\n\
                  directory. Additional files can be given with --ini; those are\n\
                  loaded afterwards and override earlier values. MODCAT_* environment\n\
                  variables and --set options override every file. Use\n\
                  --no-default-inis to only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by modcat.
    Inis,

    /// Assembles targets.
    Build(BuildArgs),

    /// Lists targets, aliases, or the modules of an assembled artifact.
    List(ListArgs),

    /// Removes module segments from an assembled artifact.
    Strip(StripArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
