//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `hoist-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Manifest bytes in and out
//!   - `ManifestCodec`: Document format (YAML) decoding and encoding
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `ManifestService` is used directly by the CLI

pub mod output;

pub use output::{Filesystem, ManifestCodec};

#[cfg(test)]
pub use output::{MockFilesystem, MockManifestCodec};
