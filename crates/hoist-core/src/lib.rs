//! Core of `hoist`: the `hoist.yml` data model, its validation rules, and the
//! service that loads manifests through pluggable ports.
//!
//! Layers, outermost first:
//!
//! ```text
//!  hoist-cli            parses arguments, prints reports
//!     |
//!  ManifestService      read -> decode -> validate, render, init
//!     |
//!  ports                Filesystem, ManifestCodec
//!     |   (hoist-adapters: LocalFilesystem, MemoryFilesystem, YamlCodec)
//!  domain               Template { version, stack, services }
//! ```
//!
//! The domain layer has no I/O. Validation runs version, then stack, then
//! services; only the services stage reports more than one failure.
//!
//! ```rust,ignore
//! use hoist_core::application::ManifestService;
//!
//! let service = ManifestService::new(filesystem, codec);
//! let template = service.load("./my/stack")?;
//! print!("{}", service.render(&template));
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod messages;

/// Everything a port implementation or front end usually needs.
pub mod prelude {
    pub use crate::application::{
        ApplicationError, CodecError, InitOutcome, MANIFEST_FILE_NAME, ManifestService,
        ValidationReport,
        ports::{Filesystem, ManifestCodec},
    };
    pub use crate::domain::{
        ManifestError, SUPPORTED_VERSION, Service, Services, Stack, Template, is_valid_name,
    };
    pub use crate::error::{ErrorCategory, ErrorKind, HoistError, HoistResult};
    pub use crate::messages::{DefaultMessages, MessageCatalog};
}
