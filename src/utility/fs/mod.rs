// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers.
//!
//! ```text
//! write_atomic(dest, bytes)
//!   create_dir_all(parent)
//!   NamedTempFile::new_in(parent) --write--> flush
//!   persist(dest)   rename over any existing file
//! ```
//!
//! The temporary file lives in the destination directory so the final
//! rename never crosses filesystems. If anything fails before `persist`,
//! the temporary file is removed on drop and `dest` is left as it was.
//!
//! Temporary files are created owner-only. Before the rename they take the
//! mode of the file being replaced, or `0644` for a new file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ModcatResult, PersistError};

/// Gives `file` the mode of the existing `dest`, or `0644` if there is none.
#[cfg(unix)]
fn copy_permissions(file: &File, dest: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = std::fs::metadata(dest)
        .map_or_else(|_| std::fs::Permissions::from_mode(0o644), |meta| meta.permissions());
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn copy_permissions(file: &File, dest: &Path) -> std::io::Result<()> {
    match std::fs::metadata(dest) {
        Ok(meta) => file.set_permissions(meta.permissions()),
        Err(_) => Ok(()),
    }
}

/// Writes `contents` to `dest` in one atomic replace.
///
/// Missing parent directories are created. An existing file at `dest` is
/// replaced unconditionally and its permissions are kept.
///
/// # Errors
///
/// Returns a [`PersistError`] naming the failing path if the directory,
/// temporary file, write or final rename fails.
pub fn write_atomic(dest: &Path, contents: &[u8]) -> ModcatResult<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir).map_err(|source| PersistError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut file = NamedTempFile::new_in(dir).map_err(|source| PersistError::TempFile {
        dir: dir.to_path_buf(),
        source,
    })?;

    file.write_all(contents)
        .and_then(|()| copy_permissions(file.as_file(), dest))
        .and_then(|()| file.as_file().sync_all())
        .map_err(|source| PersistError::Write {
            path: file.path().to_path_buf(),
            source,
        })?;

    file.persist(dest).map_err(|e| PersistError::Rename {
        path: dest.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!(path = %dest.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests;
