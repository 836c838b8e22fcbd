mod de;
pub mod service;
pub mod stack;
pub mod template;

pub use crate::domain::ManifestError;
pub use service::{Service, Services};
pub use stack::Stack;
pub use template::{SUPPORTED_VERSION, Template, validate_version};
