// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use modcat::bundle::wrapper::Wrapper;
use modcat::config::Config;
use modcat::config::loader::ConfigLoader;
use modcat::error::ConfigError;
use std::path::PathBuf;

const MAGNIFIC: &str = r#"
[package]
manifest = "magnific-popup.jquery.json"

[targets.all]
modules = ["inline", "ajax", "image", "iframe", "gallery", "retina", "fastclick"]
dest = "dist/jquery.magnific-popup.js"

[targets.zepto]
modules = ["inline", "image"]
dest = "dist/zepto.magnific-popup.js"
enabled = false

[aliases]
default = ["all"]
"#;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let config = Config::parse("").unwrap();
    assert!(config.targets.is_empty());
    assert_eq!(config.wrapper, Wrapper::default());
}

#[test]
fn config_parse_wrapper_section() {
    let config = Config::parse(
        r#"
[wrapper]
param = "jq"
primary = "window.jQuery"
fallback = "window.ender"
"#,
    )
    .unwrap();

    assert_eq!(config.wrapper.opening(), ";(function(jq) {\n");
    assert_eq!(config.wrapper.closing(), "})(window.jQuery || window.ender);");
}

#[test]
fn config_parse_magnific_layout() {
    let config = Config::parse(MAGNIFIC).unwrap();

    let all = config.target_config("all").unwrap();
    assert_eq!(all.modules.first().map(String::as_str), Some("inline"));
    assert_eq!(all.base_path, PathBuf::from("src/js"));
    assert!(!config.target_config("zepto").unwrap().enabled);
}

#[test]
fn config_invalid_toml() {
    assert!(Config::parse("[targets.all\n").is_err());
}

#[test]
fn config_unknown_target_error_message() {
    let config = Config::parse(MAGNIFIC).unwrap();
    let err = config.target_config("light").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"target 'light' is not configured");
}

#[test]
fn config_missing_dest_is_config_error() {
    let err = Config::parse("[targets.all]\nmodules = []\n").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingKey { key, .. }) if key == "dest"
    ));
}

// =============================================================================
// Layered loading
// =============================================================================

#[test]
fn config_from_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("modcat.toml");
    std::fs::write(&path, MAGNIFIC).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.targets.len(), 2);
}

#[test]
fn config_ini_overrides_default_file() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("modcat.toml");
    let extra = temp.path().join("ci.toml");
    std::fs::write(&base, MAGNIFIC).unwrap();
    std::fs::write(
        &extra,
        "[target]\nbase_path = \"build/js\"\n[targets.zepto]\nenabled = true\n",
    )
    .unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&base)
        .add_toml_file(&extra);
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    let zepto = config.target_config("zepto").unwrap();
    assert!(zepto.enabled);
    assert_eq!(zepto.base_path, PathBuf::from("build/js"));
    assert_eq!(zepto.modules, vec!["inline", "image"]);
}

#[test]
fn config_set_beats_files() {
    let config = ConfigLoader::new()
        .add_toml_str(MAGNIFIC)
        .set_assignment("target/core=base")
        .unwrap()
        .set_assignment("wrapper/param=jq")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.target_config("all").unwrap().core, "base");
    assert_eq!(config.wrapper.param, "jq");
}

#[test]
fn config_bad_assignment() {
    assert!(ConfigLoader::new().set_assignment("missing-equals").is_err());
}

#[test]
fn config_options_listing() {
    let config = Config::parse(MAGNIFIC).unwrap();
    let options = config.format_options();

    assert!(options.iter().any(|l| l.starts_with("package.manifest")));
    assert!(options.iter().any(|l| l.starts_with("targets.zepto.enabled") && l.ends_with("false")));
    assert!(options.iter().any(|l| l.starts_with("wrapper.fallback") && l.ends_with("window.Zepto")));
}
