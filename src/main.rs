// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> ConfigLoader --> Logging --> Command Dispatch
//!   Version | Options | Inis | Build | List | Strip
//! ```

use std::process::ExitCode;

use modcat::cli::global::GlobalOptions;
use modcat::cli::{self, Command};
use modcat::cmd::build::run_build_command;
use modcat::cmd::config::{run_inis_command, run_options_command};
use modcat::cmd::list::run_list_command;
use modcat::cmd::strip::run_strip_command;
use modcat::config::loader::ConfigLoader;
use modcat::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use modcat::error::Result;
use modcat::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return ExitCode::FAILURE;
    };

    match dispatch_command(command, &cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch_command(command: &Command, global: &GlobalOptions) -> Result<()> {
    if matches!(command, Command::Version) {
        handle_version_command();
        return Ok(());
    }

    let loader = build_config_loader(global)?;
    if matches!(command, Command::Inis) {
        run_inis_command(&loader.format_loaded_files());
        return Ok(());
    }

    let config = loader.build()?;
    let _log_guard = start_logging(&config)?;
    config.lint_targets();

    let dry_run = config.global.dry;
    match command {
        Command::Options => run_options_command(&config),
        Command::Build(args) => {
            run_build_command(args, &config, dry_run)?;
        }
        Command::List(args) => run_list_command(args, &config)?,
        Command::Strip(args) => {
            run_strip_command(args, &config, dry_run)?;
        }
        Command::Version | Command::Inis => {}
    }
    Ok(())
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn start_logging(config: &Config) -> Result<LogGuard> {
    let log_config = LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build();

    init_logging(&log_config)
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);

    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    Ok(loader)
}
