//! Command handlers, one module per subcommand.

use std::path::PathBuf;

use hoist_adapters::{LocalFilesystem, YamlCodec};
use hoist_core::application::ManifestService;

use crate::config::AppConfig;

pub mod completions;
pub mod config;
pub mod init;
pub mod show;
pub mod validate;

/// Manifest service wired to the local filesystem and the YAML codec.
fn manifest_service() -> ManifestService {
    ManifestService::new(Box::new(LocalFilesystem::new()), Box::new(YamlCodec::new()))
}

/// Directory given on the command line, else the configured default.
fn resolve_dir(dir: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    dir.unwrap_or_else(|| config.manifest.dir.clone())
}
