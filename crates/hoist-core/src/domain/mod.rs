//! Core domain layer for Hoist.
//!
//! This module contains the `hoist.yml` model and its validation rules.
//! Reading bytes and decoding formats are handled via ports (traits) defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No format crates**: Only std + thiserror + serde derive
//! - **No shared state**: validating one template never touches another

// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod name;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    SUPPORTED_VERSION, Service, Services, Stack, Template, validate_version,
};
pub use error::ManifestError;
pub use name::{MAX_NAME_LEN, is_valid_name};
pub use validation::ManifestValidator;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;

    fn decode(doc: serde_json::Value) -> Template {
        serde_json::from_value(doc).expect("document shape")
    }

    // ========================================================================
    // Orchestration order
    // ========================================================================

    #[test]
    fn valid_manifest_passes_and_stamps_names() {
        let mut tmpl = decode(json!({
            "version": "0.1.0",
            "stack": { "name": "my-stack" },
            "services": { "my-service": { "type": "go", "path": "my/path" } }
        }));

        ManifestValidator::validate_template(&mut tmpl).unwrap();

        let service = tmpl.services.get("my-service").unwrap();
        assert_eq!(service.name, "my-service");
        assert_eq!(service.kind, "go");
        assert_eq!(service.path, "my/path");
    }

    #[test]
    fn missing_version_reports_only_version() {
        let mut tmpl = decode(json!({
            "stack": { "name": "-bad" },
            "services": { "-bad": {} }
        }));

        assert_eq!(tmpl.validate(), Err(ManifestError::VersionRequired));
    }

    #[test]
    fn bad_version_wins_over_bad_stack() {
        let mut tmpl = decode(json!({
            "version": "0.1.1",
            "stack": { "name": "-my-stack" }
        }));

        let err = tmpl.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::VersionUnsupported);
    }

    #[test]
    fn bad_stack_wins_over_bad_services() {
        let mut tmpl = decode(json!({
            "version": "0.1.0",
            "stack": { "name": "-my-stack" },
            "services": { "api": {} }
        }));

        assert_eq!(
            tmpl.validate(),
            Err(ManifestError::StackNameInvalid {
                name: "-my-stack".into()
            })
        );
    }

    #[test]
    fn missing_stack_section() {
        let mut tmpl = decode(json!({
            "version": "0.1.0",
            "services": { "api": { "type": "go", "path": "." } }
        }));

        assert_eq!(tmpl.validate(), Err(ManifestError::StackMissingName));
    }

    #[test]
    fn services_are_optional() {
        let mut tmpl = decode(json!({
            "version": "0.1.0",
            "stack": { "name": "solo" }
        }));

        assert_eq!(tmpl.validate(), Ok(()));
        assert!(tmpl.services.is_empty());
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    #[test]
    fn two_services_missing_type_and_path() {
        let mut tmpl = decode(json!({
            "version": "0.1.0",
            "stack": { "name": "my-stack" },
            "services": {
                "one": { "path": "one" },
                "two": { "type": "go" }
            }
        }));

        let err = tmpl.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServicesInvalid);

        let kinds: Vec<_> = err.leaves().iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![ErrorKind::ServiceMissingType, ErrorKind::ServiceMissingPath]
        );
    }

    #[test]
    fn aggregate_counts_invalid_services_not_fields() {
        for (total, invalid) in [(1, 1), (5, 0), (5, 3), (20, 7), (64, 64)] {
            let mut services = Services::new();
            for i in 0..total {
                let service = if i < invalid {
                    // Both fields missing, still one error for this service.
                    Service::default()
                } else {
                    Service::new("go", ".")
                };
                services.insert(format!("svc-{i:03}"), service);
            }
            let mut tmpl = Template::new(SUPPORTED_VERSION, Stack::new("s"), services);

            match tmpl.validate() {
                Ok(()) => assert_eq!(invalid, 0),
                Err(err) => assert_eq!(err.leaves().len(), invalid, "{total}/{invalid}"),
            }
        }
    }

    #[test]
    fn invalid_service_names_are_reported() {
        let mut tmpl = decode(json!({
            "version": "0.1.0",
            "stack": { "name": "my-stack" },
            "services": { "-service": { "type": "go", "path": "my/path" } }
        }));

        assert_eq!(
            tmpl.validate(),
            Err(ManifestError::ServicesInvalid {
                errors: vec![ManifestError::ServiceNameInvalid {
                    name: "-service".into()
                }]
            })
        );
    }

    // ========================================================================
    // Facade
    // ========================================================================

    #[test]
    fn validator_facade_delegates() {
        assert!(ManifestValidator::is_valid_name("api"));
        assert!(ManifestValidator::validate_version(SUPPORTED_VERSION).is_ok());
        assert!(ManifestValidator::validate_stack(&Stack::new("s")).is_ok());

        let mut services = Services::new().with_service("api", Service::new("go", ""));
        assert!(ManifestValidator::validate_services(&mut services).is_err());
        assert!(
            ManifestValidator::validate_service(services.get("api").unwrap()).is_err()
        );
    }
}
