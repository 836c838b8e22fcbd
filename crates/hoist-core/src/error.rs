//! Unified error handling for Hoist Core.
//!
//! Every failure carries a static [`ErrorKind`] plus a set of named context
//! values. Callers classify errors by kind (never by message text) and may
//! render them through any [`MessageCatalog`](crate::messages::MessageCatalog).

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::ManifestError;
use crate::messages::MessageCatalog;

/// Root error type for Hoist Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HoistError {
    /// The manifest was read and decoded but failed validation.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Reading, decoding, or writing the manifest failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl HoistError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Manifest(e) => e.kind(),
            Self::Application(e) => e.kind(),
        }
    }

    /// Named values describing the offending input (path, version, name...).
    pub fn context(&self) -> BTreeMap<&'static str, String> {
        match self {
            Self::Manifest(e) => e.context(),
            Self::Application(e) => e.context(),
        }
    }

    /// Classification by kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }

    /// True if this error or any wrapped leaf has `kind`.
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.is(kind) || self.leaves().iter().any(|leaf| leaf.is(kind))
    }

    /// Individual failures: the wrapped leaves of an aggregate, or `self`.
    pub fn leaves(&self) -> Vec<HoistError> {
        match self {
            Self::Manifest(e) => e.leaves().into_iter().cloned().map(Self::Manifest).collect(),
            Self::Application(_) => vec![self.clone()],
        }
    }

    /// Render the message through a custom catalog.
    pub fn render_with(&self, catalog: &dyn MessageCatalog) -> String {
        match self {
            Self::Manifest(e) => e.render_with(catalog),
            Self::Application(_) => catalog.render(self.kind(), &self.context()),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Manifest(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind().category()
    }
}

/// Static descriptor of every failure the core can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    FileUnreadable,
    DocumentUndecodable,
    VersionRequired,
    VersionUnsupported,
    StackMissingName,
    StackNameInvalid,
    ServiceNameInvalid,
    ServiceMissingType,
    ServiceMissingPath,
    ServicesInvalid,
    ManifestExists,
    EncodeFailed,
    FilesystemError,
    FilesystemLock,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 14] = [
        Self::FileUnreadable,
        Self::DocumentUndecodable,
        Self::VersionRequired,
        Self::VersionUnsupported,
        Self::StackMissingName,
        Self::StackNameInvalid,
        Self::ServiceNameInvalid,
        Self::ServiceMissingType,
        Self::ServiceMissingPath,
        Self::ServicesInvalid,
        Self::ManifestExists,
        Self::EncodeFailed,
        Self::FilesystemError,
        Self::FilesystemLock,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileUnreadable => "file_unreadable",
            Self::DocumentUndecodable => "document_undecodable",
            Self::VersionRequired => "version_required",
            Self::VersionUnsupported => "version_unsupported",
            Self::StackMissingName => "stack_missing_name",
            Self::StackNameInvalid => "stack_name_invalid",
            Self::ServiceNameInvalid => "service_name_invalid",
            Self::ServiceMissingType => "service_missing_type",
            Self::ServiceMissingPath => "service_missing_path",
            Self::ServicesInvalid => "services_invalid",
            Self::ManifestExists => "manifest_exists",
            Self::EncodeFailed => "encode_failed",
            Self::FilesystemError => "filesystem_error",
            Self::FilesystemLock => "filesystem_lock",
        }
    }

    /// Error category for CLI display styling and exit codes.
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::FileUnreadable => ErrorCategory::NotFound,
            Self::VersionUnsupported => ErrorCategory::Compatibility,
            Self::DocumentUndecodable
            | Self::VersionRequired
            | Self::StackMissingName
            | Self::StackNameInvalid
            | Self::ServiceNameInvalid
            | Self::ServiceMissingType
            | Self::ServiceMissingPath
            | Self::ServicesInvalid
            | Self::ManifestExists => ErrorCategory::Validation,
            Self::EncodeFailed | Self::FilesystemError | Self::FilesystemLock => {
                ErrorCategory::Internal
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type HoistResult<T> = Result<T, HoistError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn kind_names_are_unique() {
        let mut names: Vec<_> = ErrorKind::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&ErrorKind::ServiceMissingPath).unwrap();
        assert_eq!(json, "\"service_missing_path\"");
    }

    #[test]
    fn root_error_delegates_kind_and_context() {
        let err: HoistError = ManifestError::VersionUnsupported {
            version: "0.1.1".into(),
        }
        .into();
        assert!(err.is(ErrorKind::VersionUnsupported));
        assert_eq!(err.category(), ErrorCategory::Compatibility);
        assert_eq!(err.context().get("version").map(String::as_str), Some("0.1.1"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err: HoistError = ApplicationError::FileUnreadable {
            path: PathBuf::from("my/stack/hoist.yml"),
            reason: "not found".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.leaves().len(), 1);
    }

    #[test]
    fn aggregate_leaves_are_flattened() {
        let err: HoistError = ManifestError::ServicesInvalid {
            errors: vec![
                ManifestError::ServiceMissingType { name: "a".into() },
                ManifestError::ServiceMissingPath { name: "b".into() },
            ],
        }
        .into();
        let kinds: Vec<_> = err.leaves().iter().map(HoistError::kind).collect();
        assert_eq!(
            kinds,
            vec![ErrorKind::ServiceMissingType, ErrorKind::ServiceMissingPath]
        );

        assert!(err.contains(ErrorKind::ServicesInvalid));
        assert!(err.contains(ErrorKind::ServiceMissingPath));
        assert!(!err.contains(ErrorKind::ServiceNameInvalid));
        assert!(!err.is(ErrorKind::ServiceMissingPath));
    }
}
