//! Manifest Service - main application orchestrator.
//!
//! This service coordinates the manifest workflow:
//! 1. Read `<dir>/hoist.yml` through the [`Filesystem`] port
//! 2. Decode it through the [`ManifestCodec`] port
//! 3. Validate it (version, stack, services)
//!
//! It also produces the canonical textual form of a template and writes new
//! manifests for `hoist init`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestCodec},
        services::report::ValidationReport,
    },
    domain::{ManifestValidator as validator, Template},
    error::{HoistError, HoistResult},
};

/// File name of the manifest inside a stack directory.
pub const MANIFEST_FILE_NAME: &str = "hoist.yml";

/// Location of the manifest for a stack directory.
pub fn manifest_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(MANIFEST_FILE_NAME)
}

/// Result of [`ManifestService::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    /// Where the manifest was written.
    pub path: PathBuf,
    /// A manifest already existed and `force` replaced it.
    pub replaced: bool,
}

/// Loads, validates, renders, and writes `hoist.yml` manifests.
pub struct ManifestService {
    filesystem: Box<dyn Filesystem>,
    codec: Box<dyn ManifestCodec>,
}

impl ManifestService {
    /// Create a new manifest service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use hoist_core::application::{ManifestService, ports::*};
    ///
    /// let service = ManifestService::new(
    ///     filesystem, // impl Filesystem
    ///     codec,      // impl ManifestCodec
    /// );
    /// let template = service.load("my/stack")?;
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, codec: Box<dyn ManifestCodec>) -> Self {
        Self { filesystem, codec }
    }

    /// Load and validate the manifest in `dir`.
    ///
    /// Returns the validated template, or exactly one error: unreadable file,
    /// undecodable document, or the first failing validation stage.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn load(&self, dir: impl AsRef<Path>) -> HoistResult<Template> {
        let path = manifest_path(dir);

        debug!(path = %path.display(), "Reading manifest");
        let bytes = self
            .filesystem
            .read_file(&path)
            .map_err(|e| unreadable(&path, e))?;

        let mut template =
            self.codec
                .decode(&bytes)
                .map_err(|e| ApplicationError::DocumentUndecodable {
                    path: path.clone(),
                    reason: e.reason,
                })?;

        if let Err(e) = validator::validate_template(&mut template) {
            warn!(kind = %e.kind(), issues = e.leaves().len(), "Manifest invalid");
            return Err(e.into());
        }

        info!(
            stack = %template.stack.name,
            services = template.services.len(),
            "Manifest loaded"
        );
        Ok(template)
    }

    /// Load the manifest in `dir` and summarize the outcome.
    pub fn check(&self, dir: impl AsRef<Path>) -> ValidationReport {
        let path = manifest_path(&dir);
        ValidationReport::from_result(path, &self.load(dir))
    }

    /// Canonical textual form of a template.
    ///
    /// Never fails: an encoding problem is described in the returned text.
    pub fn render(&self, template: &Template) -> String {
        self.codec.encode(template).unwrap_or_else(|e| {
            ApplicationError::EncodeFailed { reason: e.reason }.to_string()
        })
    }

    /// Write `template` as `<dir>/hoist.yml`.
    ///
    /// The template is validated first. An existing manifest is only replaced
    /// when `force` is set; [`InitOutcome::replaced`] reports whether it was.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display(), force = force))]
    pub fn init(
        &self,
        dir: impl AsRef<Path>,
        template: Template,
        force: bool,
    ) -> HoistResult<InitOutcome> {
        let dir = dir.as_ref();
        let path = manifest_path(dir);

        let template = template.into_validated()?;

        let replaced = self.filesystem.exists(&path);
        if replaced && !force {
            return Err(ApplicationError::ManifestExists { path }.into());
        }

        let content = self
            .codec
            .encode(&template)
            .map_err(|e| ApplicationError::EncodeFailed { reason: e.reason })?;

        if !dir.as_os_str().is_empty() {
            self.filesystem.create_dir_all(dir)?;
        }
        self.filesystem.write_file(&path, &content)?;

        info!(
            path = %path.display(),
            stack = %template.stack.name,
            replaced,
            "Manifest written"
        );
        Ok(InitOutcome { path, replaced })
    }
}

/// Wrap a read failure as [`ApplicationError::FileUnreadable`] for `path`.
fn unreadable(path: &Path, err: HoistError) -> HoistError {
    let reason = match err {
        HoistError::Application(ApplicationError::FilesystemError { reason, .. }) => reason,
        other => other.to_string(),
    };
    ApplicationError::FileUnreadable {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
