// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::write_atomic;
use crate::error::{ModcatError, PersistError};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_write_atomic_creates_parents() {
    let temp = temp_dir();
    let dest = temp.path().join("dist/js/out.js");

    write_atomic(&dest, b"hello").unwrap();

    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "hello");
}

#[test]
fn test_write_atomic_replaces_existing() {
    let temp = temp_dir();
    let dest = temp.path().join("out.js");
    std::fs::write(&dest, "old content that is longer").unwrap();

    write_atomic(&dest, b"new").unwrap();

    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "new");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = temp_dir();
    let dest = temp.path().join("out.js");

    write_atomic(&dest, b"x").unwrap();

    let entries: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("out.js")]);
}

#[test]
fn test_write_atomic_parent_is_file() {
    let temp = temp_dir();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let err = write_atomic(&blocker.join("out.js"), b"x").unwrap_err();

    match err {
        ModcatError::Persist(inner) => {
            assert!(matches!(*inner, PersistError::CreateDir { .. }));
        }
        other => panic!("expected persist error, got {other}"),
    }
}

#[cfg(unix)]
fn mode(path: &std::path::Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).unwrap().permissions().mode() & 0o777
}

#[cfg(unix)]
#[test]
fn test_write_atomic_new_file_is_world_readable() {
    let temp = temp_dir();
    let dest = temp.path().join("dist/out.js");

    write_atomic(&dest, b"x").unwrap();

    assert_eq!(mode(&dest), 0o644);
}

#[cfg(unix)]
#[test]
fn test_write_atomic_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    let dest = temp.path().join("out.js");
    std::fs::write(&dest, "old").unwrap();
    std::fs::set_permissions(&dest, std::fs::Permissions::from_mode(0o640)).unwrap();

    write_atomic(&dest, b"new").unwrap();

    assert_eq!(mode(&dest), 0o640);
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "new");
}
