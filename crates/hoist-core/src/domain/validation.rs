use crate::domain::{
    entities::{Service, Services, Stack, Template, validate_version},
    error::ManifestError,
    name::is_valid_name,
};

/// Centralized manifest validation.
///
/// One entry point per validator; the rules themselves live on the entities.
pub struct ManifestValidator;

impl ManifestValidator {
    pub fn is_valid_name(name: &str) -> bool {
        is_valid_name(name)
    }

    pub fn validate_version(version: &str) -> Result<(), ManifestError> {
        validate_version(version)
    }

    pub fn validate_stack(stack: &Stack) -> Result<(), ManifestError> {
        stack.validate()
    }

    pub fn validate_service(service: &Service) -> Result<(), ManifestError> {
        service.validate()
    }

    pub fn validate_services(services: &mut Services) -> Result<(), ManifestError> {
        services.validate()
    }

    pub fn validate_template(template: &mut Template) -> Result<(), ManifestError> {
        template.validate()
    }
}
