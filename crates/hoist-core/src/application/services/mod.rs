//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "load a stack manifest".

pub mod manifest_service;
pub mod report;

pub use manifest_service::{InitOutcome, MANIFEST_FILE_NAME, ManifestService, manifest_path};
pub use report::{Issue, ValidationReport};
