// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["modcat", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "modcat",
        "-l",
        "5",
        "-i",
        "a.toml",
        "-i",
        "b.toml",
        "--dry",
        "-s",
        "wrapper/param=jq",
        "build",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.inis,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(cli.global.dry);
    assert_eq!(
        cli.global.to_config_overrides(),
        vec![
            "wrapper/param=jq",
            "global/output_log_level=5",
            "global/file_log_level=5",
            "global/dry=true",
        ]
    );
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["modcat", "-l", "7", "build"]).is_err());
}

#[test]
fn test_parse_build_exclude() {
    let cli = Cli::try_parse_from(["modcat", "build", "--exclude=ajax,image", "all"]).unwrap();
    let Some(Command::Build(args)) = cli.command else {
        panic!("expected build");
    };

    assert_eq!(args.exclude.as_deref(), Some("ajax,image"));
    assert_eq!(args.targets, vec!["all"]);
    assert_eq!(args.output, None);
}

#[test]
fn test_parse_build_short_flags() {
    let cli =
        Cli::try_parse_from(["modcat", "build", "-x", "ajax image", "-o", "out.js"]).unwrap();
    let Some(Command::Build(args)) = cli.command else {
        panic!("expected build");
    };

    assert_eq!(args.exclude.as_deref(), Some("ajax image"));
    assert_eq!(args.output, Some(PathBuf::from("out.js")));
    assert!(args.targets.is_empty());
}

#[test]
fn test_parse_list_artifact_conflicts() {
    assert!(Cli::try_parse_from(["modcat", "list", "--artifact", "a.js", "-m"]).is_err());

    let cli = Cli::try_parse_from(["modcat", "list", "--artifact", "a.js"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list");
    };
    assert_eq!(args.artifact, Some(PathBuf::from("a.js")));
}

#[test]
fn test_parse_strip_requires_exclude() {
    assert!(Cli::try_parse_from(["modcat", "strip", "a.js"]).is_err());

    let cli = Cli::try_parse_from(["modcat", "strip", "a.js", "-x", "gallery"]).unwrap();
    let Some(Command::Strip(args)) = cli.command else {
        panic!("expected strip");
    };
    assert_eq!(args.exclude, "gallery");
    assert_eq!(args.core, None);
}
