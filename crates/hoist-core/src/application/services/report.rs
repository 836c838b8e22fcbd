//! Validation report DTO for machine-readable output.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::Template;
use crate::error::{ErrorKind, HoistError, HoistResult};

/// Outcome of loading one manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub path: PathBuf,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Service names, sorted.
    pub services: Vec<String>,
    /// One entry per leaf failure; aggregates are flattened.
    pub issues: Vec<Issue>,
}

/// A single reported failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: ErrorKind,
    pub message: String,
    pub context: BTreeMap<&'static str, String>,
}

impl From<&HoistError> for Issue {
    fn from(err: &HoistError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            context: err.context(),
        }
    }
}

impl ValidationReport {
    pub fn from_result(path: PathBuf, result: &HoistResult<Template>) -> Self {
        match result {
            Ok(template) => Self {
                path,
                valid: true,
                stack: Some(template.stack.name.clone()),
                services: template.services.iter().map(|(name, _)| name.clone()).collect(),
                issues: Vec::new(),
            },
            Err(err) => Self {
                path,
                valid: false,
                stack: None,
                services: Vec::new(),
                issues: err.leaves().iter().map(Issue::from).collect(),
            },
        }
    }
}
