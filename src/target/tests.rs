// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use super::TargetRegistry;
use crate::config::Config;
use crate::config::types::Aliases;
use crate::error::ConfigError;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn create_test_registry() -> TargetRegistry {
    let mut aliases: Aliases = BTreeMap::new();
    aliases.insert("default".to_string(), strings(&["all"]));
    aliases.insert("small".to_string(), strings(&["lite", "lite-zepto"]));
    aliases.insert("nested".to_string(), strings(&["small", "all"]));
    aliases.insert("loop".to_string(), strings(&["loop", "all"]));

    let mut registry = TargetRegistry::new(aliases);
    registry.register("all", true);
    registry.register("lite", true);
    registry.register("lite-zepto", false);
    registry.register("debug", false);
    registry
}

#[test]
fn test_register_and_names() {
    let registry = create_test_registry();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec!["all", "debug", "lite", "lite-zepto"]);
}

#[test]
fn test_empty_selection_is_enabled_targets() {
    let registry = create_test_registry();
    assert_eq!(registry.select(&[]).unwrap(), strings(&["all", "lite"]));
}

#[test]
fn test_resolve_aliases_nested() {
    let registry = create_test_registry();
    assert_eq!(
        registry.resolve_aliases(&strings(&["nested"])),
        strings(&["lite", "lite-zepto", "all"])
    );
}

#[test]
fn test_resolve_aliases_self_reference() {
    let registry = create_test_registry();
    assert_eq!(registry.resolve_aliases(&strings(&["loop"])), strings(&["all"]));
}

#[test]
fn test_select_glob_and_dedupe() {
    let registry = create_test_registry();
    assert_eq!(
        registry.select(&strings(&["lite*", "small", "default"])).unwrap(),
        strings(&["lite", "lite-zepto", "all"])
    );
}

#[test]
fn test_select_disabled_by_name() {
    let registry = create_test_registry();
    assert_eq!(registry.select(&strings(&["debug"])).unwrap(), strings(&["debug"]));
}

#[test]
fn test_select_unknown_target() {
    let registry = create_test_registry();
    let err = registry.select(&strings(&["all", "nope*"])).unwrap_err();
    let err = err.downcast::<ConfigError>().unwrap();
    assert!(matches!(err, ConfigError::UnknownTarget(ref n) if n == "nope*"));
}

#[test]
fn test_match_pattern_invalid_glob() {
    let registry = create_test_registry();
    assert!(registry.match_pattern("lite[").is_err());
}

#[test]
fn test_from_config() {
    let config = Config::parse(
        r#"
[targets.all]
dest = "dist/all.js"

[targets.lite]
dest = "dist/lite.js"
enabled = false

[aliases]
default = ["all"]
"#,
    )
    .unwrap();

    let registry = TargetRegistry::from_config(&config).unwrap();
    assert_eq!(registry.enabled(), strings(&["all"]));
    assert_eq!(registry.aliases()["default"], strings(&["all"]));
}
