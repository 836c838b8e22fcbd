// ============================================================================
// domain/error.rs - MANIFEST VALIDATION ERRORS
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::error::ErrorKind;
use crate::messages::MessageCatalog;

/// Validation failures for a decoded `hoist.yml`.
///
/// All errors are:
/// - Cloneable and comparable (tests match on whole values)
/// - Classifiable by [`ErrorKind`]
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManifestError {
    // ========================================================================
    // Version stage
    // ========================================================================
    #[error("hoist.yml version is required")]
    VersionRequired,

    #[error("only hoist.yml version 0.1.0 is supported, got '{version}'")]
    VersionUnsupported { version: String },

    // ========================================================================
    // Stack stage
    // ========================================================================
    #[error("hoist.yml stack name is required")]
    StackMissingName,

    #[error(
        "stack name '{name}' is invalid; use 1-63 lowercase letters, digits or '-', starting and ending with a letter or digit"
    )]
    StackNameInvalid { name: String },

    // ========================================================================
    // Services stage
    // ========================================================================
    #[error(
        "service name '{name}' is invalid; use 1-63 lowercase letters, digits or '-', starting and ending with a letter or digit"
    )]
    ServiceNameInvalid { name: String },

    #[error("service '{name}' missing type")]
    ServiceMissingType { name: String },

    #[error("service '{name}' missing path (use '.' for same directory)")]
    ServiceMissingPath { name: String },

    /// One leaf per invalid service, ordered by service name.
    #[error("hoist.yml services invalid ({}): {}", .errors.len(), join(.errors))]
    ServicesInvalid { errors: Vec<ManifestError> },
}

fn join(errors: &[ManifestError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ManifestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VersionRequired => ErrorKind::VersionRequired,
            Self::VersionUnsupported { .. } => ErrorKind::VersionUnsupported,
            Self::StackMissingName => ErrorKind::StackMissingName,
            Self::StackNameInvalid { .. } => ErrorKind::StackNameInvalid,
            Self::ServiceNameInvalid { .. } => ErrorKind::ServiceNameInvalid,
            Self::ServiceMissingType { .. } => ErrorKind::ServiceMissingType,
            Self::ServiceMissingPath { .. } => ErrorKind::ServiceMissingPath,
            Self::ServicesInvalid { .. } => ErrorKind::ServicesInvalid,
        }
    }

    pub fn context(&self) -> BTreeMap<&'static str, String> {
        let mut context = BTreeMap::new();
        match self {
            Self::VersionRequired | Self::StackMissingName => {}
            Self::VersionUnsupported { version } => {
                context.insert("version", version.clone());
            }
            Self::StackNameInvalid { name }
            | Self::ServiceNameInvalid { name }
            | Self::ServiceMissingType { name }
            | Self::ServiceMissingPath { name } => {
                context.insert("name", name.clone());
            }
            Self::ServicesInvalid { errors } => {
                context.insert("count", errors.len().to_string());
            }
        }
        context
    }

    /// Every underlying failure; a non-aggregate error is its own only leaf.
    pub fn leaves(&self) -> Vec<&ManifestError> {
        match self {
            Self::ServicesInvalid { errors } => errors.iter().flat_map(Self::leaves).collect(),
            _ => vec![self],
        }
    }

    pub fn render_with(&self, catalog: &dyn MessageCatalog) -> String {
        let head = catalog.render(self.kind(), &self.context());
        match self {
            Self::ServicesInvalid { errors } => {
                let leaves: Vec<_> = errors.iter().map(|e| e.render_with(catalog)).collect();
                format!("{head}: {}", leaves.join("; "))
            }
            _ => head,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::VersionRequired => vec!["Add `version: 0.1.0` at the top of hoist.yml".into()],
            Self::VersionUnsupported { version } => vec![
                format!("hoist.yml declares version '{version}'"),
                "Change it to `version: 0.1.0`".into(),
            ],
            Self::StackMissingName => vec!["Add a `stack:` section with a `name:`".into()],
            Self::StackNameInvalid { .. } | Self::ServiceNameInvalid { .. } => vec![
                "Names look like DNS labels: lowercase letters, digits and '-'".into(),
                "Examples: my-stack, api, worker-2".into(),
            ],
            Self::ServiceMissingType { name } => {
                vec![format!("Add `type:` under `services.{name}` (e.g. `type: go`)")]
            }
            Self::ServiceMissingPath { name } => vec![format!(
                "Add `path:` under `services.{name}`; use `path: .` for the manifest's directory"
            )],
            Self::ServicesInvalid { errors } => {
                errors.iter().flat_map(ManifestError::suggestions).collect()
            }
        }
    }
}
