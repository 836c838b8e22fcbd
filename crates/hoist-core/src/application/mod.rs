//! Application layer for Hoist.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ManifestService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    InitOutcome,
    Issue,
    MANIFEST_FILE_NAME,
    ManifestService,
    ValidationReport, // DTO for reporting
    manifest_path,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ManifestCodec};

pub use error::{ApplicationError, CodecError};
