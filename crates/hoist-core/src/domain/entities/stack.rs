use serde::{Deserialize, Serialize};

use super::de;
use crate::domain::{error::ManifestError, name::is_valid_name};

/// Identity of the deployable unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
}

impl Stack {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.name.is_empty() {
            Err(ManifestError::StackMissingName)
        } else if !is_valid_name(&self.name) {
            Err(ManifestError::StackNameInvalid {
                name: self.name.clone(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_stack() {
        assert_eq!(Stack::new("my-stack").validate(), Ok(()));
    }

    #[test]
    fn missing_name() {
        assert_eq!(Stack::default().validate(), Err(ManifestError::StackMissingName));
    }

    #[test]
    fn invalid_name_carries_offender() {
        assert_eq!(
            Stack::new("-my-stack").validate(),
            Err(ManifestError::StackNameInvalid {
                name: "-my-stack".into()
            })
        );
    }
}
