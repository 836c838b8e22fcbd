//! Application layer errors.
//!
//! These errors represent failures in getting a manifest in or out, not in
//! its content. Content errors are `ManifestError` from `crate::domain`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorKind;

/// Errors that occur while reading, decoding, or writing a manifest.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Manifest bytes could not be obtained. `reason` is kept as context.
    #[error(
        "cannot read '{}'; make sure you are in the correct directory",
        .path.display()
    )]
    FileUnreadable { path: PathBuf, reason: String },

    /// Bytes could not be decoded into the manifest shape.
    #[error("cannot decode '{}' into the hoist.yml format: {reason}", .path.display())]
    DocumentUndecodable { path: PathBuf, reason: String },

    /// `init` refused to overwrite an existing manifest.
    #[error("manifest already exists at '{}'", .path.display())]
    ManifestExists { path: PathBuf },

    /// A template could not be serialized.
    #[error("could not encode template: {reason}")]
    EncodeFailed { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at '{}': {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Filesystem adapter state is unusable (lock poisoned).
    #[error("in-memory filesystem lock poisoned")]
    FilesystemLock,
}

/// Failure reported by a [`ManifestCodec`](crate::application::ports::ManifestCodec).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct CodecError {
    pub reason: String,
}

impl CodecError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileUnreadable { .. } => ErrorKind::FileUnreadable,
            Self::DocumentUndecodable { .. } => ErrorKind::DocumentUndecodable,
            Self::ManifestExists { .. } => ErrorKind::ManifestExists,
            Self::EncodeFailed { .. } => ErrorKind::EncodeFailed,
            Self::FilesystemError { .. } => ErrorKind::FilesystemError,
            Self::FilesystemLock => ErrorKind::FilesystemLock,
        }
    }

    pub fn context(&self) -> BTreeMap<&'static str, String> {
        let mut context = BTreeMap::new();
        match self {
            Self::FileUnreadable { path, reason }
            | Self::DocumentUndecodable { path, reason }
            | Self::FilesystemError { path, reason } => {
                context.insert("path", path.display().to_string());
                context.insert("reason", reason.clone());
            }
            Self::ManifestExists { path } => {
                context.insert("path", path.display().to_string());
            }
            Self::EncodeFailed { reason } => {
                context.insert("reason", reason.clone());
            }
            Self::FilesystemLock => {}
        }
        context
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileUnreadable { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Run hoist from the directory containing hoist.yml, or pass it as an argument"
                    .into(),
                "Create one with: hoist init --stack <name>".into(),
            ],
            Self::DocumentUndecodable { .. } => vec![
                "Check the YAML syntax of hoist.yml".into(),
                "Expected top-level keys: version, stack, services".into(),
            ],
            Self::ManifestExists { path } => vec![
                format!("Manifest already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::EncodeFailed { .. } | Self::FilesystemLock => {
                vec!["This appears to be a bug in hoist, please report it".into()]
            }
        }
    }
}
