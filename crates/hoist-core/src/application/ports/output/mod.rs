//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `hoist-adapters` crate provides implementations.

use std::path::Path;

use crate::application::error::CodecError;
use crate::domain::Template;
use crate::error::HoistResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hoist_adapters::filesystem::LocalFilesystem` (production)
/// - `hoist_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Adapters report failures as `ApplicationError::FilesystemError` carrying
/// the path; the service decides which manifest error that becomes.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read the whole file.
    fn read_file(&self, path: &Path) -> HoistResult<Vec<u8>>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> HoistResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HoistResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the manifest document format.
///
/// Implemented by:
/// - `hoist_adapters::codec::YamlCodec`
///
/// `decode` only maps the document onto [`Template`]; it never validates.
/// `encode` must be deterministic for equal templates.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Template, CodecError>;

    fn encode(&self, template: &Template) -> Result<String, CodecError>;
}
