// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{FsModuleSource, ModuleSource};
use crate::error::ModuleError;
use crate::utility::encoding::TextEncoding;

#[test]
fn test_locate_joins_extension() {
    let source = FsModuleSource::new("src/js", "js");
    assert_eq!(source.locate("ajax"), PathBuf::from("src/js/ajax.js"));
}

#[test]
fn test_locate_tolerates_leading_dot_and_empty() {
    assert_eq!(
        FsModuleSource::new("lib", ".mjs").locate("core"),
        PathBuf::from("lib/core.mjs")
    );
    assert_eq!(
        FsModuleSource::new("lib", "").locate("core"),
        PathBuf::from("lib/core")
    );
}

#[test]
fn test_read_verbatim() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("a.js"), "var a = 1;\r\n// not even js {{{").unwrap();

    let source = FsModuleSource::new(temp.path(), "js");

    assert_eq!(source.read("a").unwrap(), "var a = 1;\r\n// not even js {{{");
}

#[test]
fn test_read_missing_reports_name_and_path() {
    let temp = tempfile::tempdir().unwrap();
    let source = FsModuleSource::new(temp.path(), "js");

    let err = source.read("ghost").unwrap_err();

    match err {
        ModuleError::Missing { name, path } => {
            assert_eq!(name, "ghost");
            assert_eq!(path, temp.path().join("ghost.js"));
        }
        other => panic!("expected Missing, got {other}"),
    }
}

#[test]
fn test_read_with_legacy_encoding() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("fr.js"), b"// caf\xe9").unwrap();

    let source = FsModuleSource::new(temp.path(), "js")
        .with_encoding(TextEncoding::for_label("windows-1252").unwrap());

    assert_eq!(source.read("fr").unwrap(), "// café");
}

#[test]
fn test_read_directory_is_unreadable() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("x.js")).unwrap();
    let source = FsModuleSource::new(temp.path(), "js");

    let err = source.read("x").unwrap_err();

    assert_eq!(err.module_name(), "x");
    match err {
        ModuleError::Unreadable { path, .. } => assert_eq!(path, temp.path().join("x.js")),
        other => panic!("expected Unreadable, got {other}"),
    }
}
