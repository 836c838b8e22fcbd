//! Infrastructure adapters for Hoist.
//!
//! This crate implements the ports defined in `hoist-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod codec;
pub mod filesystem;

// Re-export commonly used adapters
pub use codec::YamlCodec;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
