//! Services of a stack.
//!
//! [`Services`] is keyed by service name. Entries are validated independently
//! and exhaustively; the ordered map only makes reports and the canonical
//! form deterministic.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Deserializer, Serialize};

use super::de;
use crate::domain::{error::ManifestError, name::is_valid_name};

/// One deployable unit of the stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Stamped from the map key by [`Services::validate`]; never read from or
    /// written to the document.
    #[serde(skip)]
    pub name: String,

    /// Opaque build/runtime identifier consumed by external tooling.
    #[serde(rename = "type", default, deserialize_with = "de::null_as_default")]
    pub kind: String,

    /// Location relative to the manifest; `.` is the manifest's directory.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub path: String,
}

impl Service {
    pub fn new(kind: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            kind: kind.into(),
            path: path.into(),
        }
    }

    /// Report the first failing check: name, then type, then path.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if !is_valid_name(&self.name) {
            Err(ManifestError::ServiceNameInvalid {
                name: self.name.clone(),
            })
        } else if self.kind.is_empty() {
            Err(ManifestError::ServiceMissingType {
                name: self.name.clone(),
            })
        } else if self.path.is_empty() {
            Err(ManifestError::ServiceMissingPath {
                name: self.name.clone(),
            })
        } else {
            Ok(())
        }
    }
}

/// Services in the stack, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Services(BTreeMap<String, Service>);

impl Services {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a service under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, service: Service) -> Option<Service> {
        self.0.insert(name.into(), service)
    }

    pub fn with_service(mut self, name: impl Into<String>, service: Service) -> Self {
        self.insert(name, service);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Service> {
        self.0.get(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Service> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stamp every service's name from its key and validate all of them.
    ///
    /// Never stops at the first failure: one error per invalid service is
    /// collected into [`ManifestError::ServicesInvalid`], in key order.
    pub fn validate(&mut self) -> Result<(), ManifestError> {
        let errors: Vec<ManifestError> = self
            .0
            .iter_mut()
            .filter_map(|(name, service)| {
                service.name.clone_from(name);
                service.validate().err()
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ManifestError::ServicesInvalid { errors })
        }
    }
}

impl<'de> Deserialize<'de> for Services {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<BTreeMap<String, Option<Service>>> = Option::deserialize(deserializer)?;
        Ok(Self(
            raw.unwrap_or_default()
                .into_iter()
                .map(|(name, service)| (name, service.unwrap_or_default()))
                .collect(),
        ))
    }
}

impl<'a> IntoIterator for &'a Services {
    type Item = (&'a String, &'a Service);
    type IntoIter = btree_map::Iter<'a, String, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Service)> for Services {
    fn from_iter<I: IntoIterator<Item = (String, Service)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
