//! YAML codec for `hoist.yml` using `serde_yaml`.

use hoist_core::application::{CodecError, ports::ManifestCodec};
use hoist_core::domain::Template;
use tracing::debug;

/// Reads and writes manifests as YAML.
///
/// Decoding is lenient about absence: an empty document, a `null` document,
/// or a document made only of comments decodes to an empty [`Template`] and
/// is left for validation to reject. Type mismatches (a list where a mapping
/// is expected) are decode errors.
///
/// Encoding emits the canonical form: `version`, `stack`, then `services`
/// sorted by name, each service with `type` then `path`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl YamlCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestCodec for YamlCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Template, CodecError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| CodecError::new(format!("invalid UTF-8: {e}")))?;

        if is_blank(text) {
            debug!("Empty manifest document");
            return Ok(Template::default());
        }

        let template: Option<Template> =
            serde_yaml::from_str(text).map_err(|e| CodecError::new(e.to_string()))?;
        Ok(template.unwrap_or_default())
    }

    fn encode(&self, template: &Template) -> Result<String, CodecError> {
        serde_yaml::to_string(template).map_err(|e| CodecError::new(e.to_string()))
    }
}

/// True when a document holds nothing but whitespace, comments, and markers.
fn is_blank(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
