//! Disk-backed [`Filesystem`].

use std::io;
use std::path::Path;

use hoist_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{HoistError, HoistResult},
};
use tracing::trace;

/// Reads and writes the real filesystem relative to the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> HoistResult<Vec<u8>> {
        trace!(path = %path.display(), "read");
        std::fs::read(path).map_err(|e| map_io_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> HoistResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> HoistResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Common I/O kinds get a short fixed reason; the rest keep the OS text.
fn map_io_error(path: &Path, e: io::Error) -> HoistError {
    let reason = match e.kind() {
        io::ErrorKind::NotFound => "file does not exist".to_string(),
        io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        _ => e.to_string(),
    };

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
