// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ModcatError (16 bytes)
//!                    |
//!   +-------+--------+--------+--------+
//!   |       |        |        |        |
//!   v       v        v        v        v
//! Config  Module  Persist  Banner  Artifact
//!  Box     Box      Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Config   ParseError, MissingKey, InvalidValue, UnknownTarget
//!   Module   Missing, Unreadable
//!   Persist  CreateDir, TempFile, Write, Rename
//!   Banner   ManifestRead, ManifestParse, UnknownPlaceholder, NoManifest
//!   Artifact UnbalancedMarker
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModcatError`].
pub type ModcatResult<T> = std::result::Result<T, ModcatError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum ModcatError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// A module source could not be loaded.
    #[error("module error: {0}")]
    Module(#[from] Box<ModuleError>),

    /// The artifact could not be written.
    #[error("persist error: {0}")]
    Persist(#[from] Box<PersistError>),

    /// Banner rendering failed.
    #[error("banner error: {0}")]
    Banner(#[from] Box<BannerError>),

    /// An assembled artifact is malformed.
    #[error("artifact error: {0}")]
    Artifact(#[from] Box<ArtifactError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModcatError {
                fn from(err: $error) -> Self {
                    ModcatError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ModuleError => Module,
    PersistError => Persist,
    BannerError => Banner,
    ArtifactError => Artifact,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A target name resolved to nothing in `[targets]`.
    #[error("target '{0}' is not configured")]
    UnknownTarget(String),
}

// --- Module Errors ---

/// Failures loading a module's source text.
///
/// Always fatal for the current build.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The module file does not exist.
    #[error("module '{name}' not found at {}", .path.display())]
    Missing { name: String, path: PathBuf },

    /// The module file exists but could not be read.
    #[error("failed to read module '{name}' from {}: {source}", .path.display())]
    Unreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ModuleError {
    /// Classifies an I/O failure for `name` at `path`.
    #[must_use]
    pub fn from_io(name: &str, path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::Missing {
                name: name.to_string(),
                path,
            }
        } else {
            Self::Unreadable {
                name: name.to_string(),
                path,
                source,
            }
        }
    }

    /// Name of the module that failed.
    #[must_use]
    pub fn module_name(&self) -> &str {
        match self {
            Self::Missing { name, .. } | Self::Unreadable { name, .. } => name,
        }
    }
}

// --- Persist Errors ---

/// Failures writing the artifact to its destination.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Parent directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temporary file next to the destination could not be created.
    #[error("failed to create temporary file in {}: {source}", .dir.display())]
    TempFile {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the content failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Moving the finished temporary file into place failed.
    #[error("failed to replace {}: {source}", .path.display())]
    Rename {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Banner Errors ---

/// Banner template and package manifest errors.
#[derive(Debug, Error)]
pub enum BannerError {
    /// Manifest file could not be read.
    #[error("failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not valid JSON.
    #[error("failed to parse manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Template references a placeholder that does not exist.
    #[error("unknown banner placeholder '{{{0}}}'")]
    UnknownPlaceholder(String),

    /// Template references manifest data but no manifest is configured.
    #[error("banner placeholder '{{{0}}}' requires package.manifest to be set")]
    NoManifest(String),
}

// --- Artifact Errors ---

/// Errors reading module segments back out of an assembled artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// A module's opening marker has no matching closing marker.
    #[error("module '{0}' has an opening boundary marker without a closing one")]
    UnbalancedMarker(String),
}
