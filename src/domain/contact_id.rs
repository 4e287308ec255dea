//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact IDs issued by the contacts service.
///
/// IDs end up in request paths (photo lookup), so they are validated at
/// construction time: they cannot be empty and cannot contain `/` or
/// control characters.
///
/// # Example
///
/// ```
/// use contacts_to_bbdb::domain::ContactId;
///
/// let id = ContactId::new("c_123").unwrap();
/// assert_eq!(id.as_str(), "c_123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the ID is empty and
    /// `ValidationError::InvalidId` if it contains `/` or control characters.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if id.chars().any(|c| c == '/' || c.is_control()) {
            return Err(ValidationError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_valid() {
        let id = ContactId::new("c_123").unwrap();
        assert_eq!(id.as_str(), "c_123");
        assert_eq!(format!("{}", id), "c_123");
    }

    #[test]
    fn test_contact_id_rejects_empty() {
        assert_eq!(ContactId::new(""), Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_contact_id_rejects_path_separators() {
        assert!(matches!(
            ContactId::new("../etc"),
            Err(ValidationError::InvalidId(_))
        ));
        assert!(ContactId::new("a\nb").is_err());
    }

    #[test]
    fn test_contact_id_deserialization() {
        let id: ContactId = serde_json::from_str("\"c_123\"").unwrap();
        assert_eq!(id.into_inner(), "c_123");

        let result: Result<ContactId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
