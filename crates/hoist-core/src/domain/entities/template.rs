//! `hoist.yml` aggregate root.
//!
//! A [`Template`] is the in-memory form of one manifest:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Template (Aggregate Root)                   │
//! │  ├── version   "0.1.0"                       │
//! │  ├── Stack     { name }                      │
//! │  └── Services  name -> Service               │
//! │                 └── { name*, type, path }    │
//! └──────────────────────────────────────────────┘
//!                       * stamped from the map key
//! ```
//!
//! ## Validation pipeline
//!
//! [`Template::validate`] runs three gates in a fixed order:
//!
//! 1. **Version**: fail-fast, exact match against [`SUPPORTED_VERSION`].
//! 2. **Stack**: fail-fast, the stack name must follow the name rule.
//! 3. **Services**: exhaustive. Every service is checked and every failure is
//!    collected into one [`ManifestError::ServicesInvalid`].
//!
//! A template is either fully valid or validation returns exactly one error.
//! Consumers must not trust a template that has not passed [`Template::validate`].
//!
//! ## Decoding
//!
//! Missing or `null` fields decode to empty values, so that absence is
//! reported by the validators with a precise error instead of surfacing as
//! an opaque decoder failure. Text fields keep the document's spelling:
//! `version: 0.10` is the string `"0.10"`, never a number. Unknown keys are
//! ignored.

use serde::{Deserialize, Serialize};

use super::de;
use super::{Services, Stack};
use crate::domain::error::ManifestError;

/// The only manifest schema version this crate understands.
pub const SUPPORTED_VERSION: &str = "0.1.0";

/// Template for the `hoist.yml` format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub stack: Stack,
    #[serde(default)]
    pub services: Services,
}

impl Template {
    pub fn new(version: impl Into<String>, stack: Stack, services: Services) -> Self {
        Self {
            version: version.into(),
            stack,
            services,
        }
    }

    /// Validate the template, stamping each service's name from its key.
    ///
    /// Version and stack errors stop validation immediately; service errors
    /// are aggregated.
    pub fn validate(&mut self) -> Result<(), ManifestError> {
        validate_version(&self.version)?;
        self.stack.validate()?;
        self.services.validate()
    }

    /// Consume and validate, returning the validated template.
    pub fn into_validated(mut self) -> Result<Self, ManifestError> {
        self.validate()?;
        Ok(self)
    }
}

/// Check that `version` is present and exactly [`SUPPORTED_VERSION`].
pub fn validate_version(version: &str) -> Result<(), ManifestError> {
    if version.is_empty() {
        Err(ManifestError::VersionRequired)
    } else if version != SUPPORTED_VERSION {
        Err(ManifestError::VersionUnsupported {
            version: version.to_owned(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::entities::Service;

    fn decode(doc: serde_json::Value) -> Template {
        serde_json::from_value(doc).expect("document shape")
    }

    #[test]
    fn version_exact_match() {
        assert_eq!(validate_version("0.1.0"), Ok(()));
        assert_eq!(validate_version(""), Err(ManifestError::VersionRequired));
        for bad in ["0.1", "0.1.0 ", " 0.1.0", "0.1.1", "v0.1.0"] {
            assert_eq!(
                validate_version(bad),
                Err(ManifestError::VersionUnsupported {
                    version: bad.into()
                }),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn decodes_missing_fields_as_empty() {
        let tmpl = decode(json!({}));
        assert_eq!(tmpl, Template::default());
    }

    #[test]
    fn decodes_null_fields_as_empty() {
        let tmpl = decode(json!({
            "version": null,
            "stack": null,
            "services": { "api": null }
        }));
        assert!(tmpl.version.is_empty());
        assert!(tmpl.stack.name.is_empty());
        assert_eq!(tmpl.services.get("api"), Some(&Service::default()));
    }

    #[test]
    fn text_fields_reject_typed_numbers() {
        // A number is not text; formats with untyped scalars (YAML) hand the
        // literal spelling to the string deserializer instead.
        assert!(serde_json::from_value::<Template>(json!({ "version": 0.1 })).is_err());
        assert!(
            serde_json::from_value::<Template>(json!({ "stack": { "name": 1000 } })).is_err()
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let tmpl = decode(json!({ "version": "0.1.0", "extra": { "a": 1 } }));
        assert_eq!(tmpl.version, "0.1.0");
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(serde_json::from_value::<Template>(json!({ "stack": "name" })).is_err());
        assert!(serde_json::from_value::<Template>(json!({ "services": ["a"] })).is_err());
        assert!(serde_json::from_value::<Template>(json!({ "version": ["0.1.0"] })).is_err());
    }

    #[test]
    fn serializes_without_service_names() {
        let mut tmpl = decode(json!({
            "version": "0.1.0",
            "stack": { "name": "my-stack" },
            "services": { "svc1": { "type": "go", "path": "my/svc1" } }
        }));
        tmpl.validate().unwrap();

        let value = serde_json::to_value(&tmpl).unwrap();
        assert_eq!(
            value,
            json!({
                "version": "0.1.0",
                "stack": { "name": "my-stack" },
                "services": { "svc1": { "type": "go", "path": "my/svc1" } }
            })
        );
    }

    #[test]
    fn into_validated_stamps_names() {
        let tmpl = decode(json!({
            "version": "0.1.0",
            "stack": { "name": "my-stack" },
            "services": { "my-service": { "type": "go", "path": "my/path" } }
        }))
        .into_validated()
        .unwrap();

        assert_eq!(tmpl.services.get("my-service").unwrap().name, "my-service");
    }
}
