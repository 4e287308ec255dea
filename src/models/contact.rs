//! Contact record as delivered by the remote contacts service.

use crate::domain::{AddressKind, PhoneKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Email address entry for a contact (from API).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EmailEntry {
    /// The email address
    pub address: String,
}

/// Custom deserializer for emails that converts from API format to Vec<String>
fn deserialize_emails<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<EmailEntry>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.address)
        .collect())
}

/// Custom serializer mirroring `deserialize_emails`
fn serialize_emails<S>(emails: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let entries: Vec<EmailEntry> = emails
        .iter()
        .map(|address| EmailEntry {
            address: address.clone(),
        })
        .collect();
    entries.serialize(serializer)
}

/// A postal address attached to a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PostalAddress {
    /// Relation tag (work, home, ...)
    #[serde(rename = "rel")]
    pub kind: AddressKind,

    /// Newline-separated address text: street, "City[, State] PostalCode", country
    #[serde(rename = "formatted")]
    pub raw_text: String,
}

impl PostalAddress {
    /// Create a postal address from a kind and its raw text.
    pub fn new(kind: AddressKind, raw_text: impl Into<String>) -> Self {
        Self {
            kind,
            raw_text: raw_text.into(),
        }
    }
}

/// A phone number attached to a contact. The number is not validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PhoneNumber {
    /// Relation tag (work, home, mobile, ...)
    #[serde(rename = "rel")]
    pub kind: PhoneKind,

    /// The number as entered
    pub number: String,
}

impl PhoneNumber {
    /// Create a phone number entry.
    pub fn new(kind: PhoneKind, number: impl Into<String>) -> Self {
        Self {
            kind,
            number: number.into(),
        }
    }
}

/// One address-book entry from the contacts service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactRecord {
    /// Service identifier, used to look up the contact photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Full display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Nickname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// Organization the contact belongs to
    #[serde(rename = "organization", skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,

    /// Email addresses (from API as array of {address: string} objects)
    #[serde(
        deserialize_with = "deserialize_emails",
        serialize_with = "serialize_emails"
    )]
    pub emails: Vec<String>,

    /// Postal addresses, in service order
    pub postal_addresses: Vec<PostalAddress>,

    /// Phone numbers, in service order
    pub phone_numbers: Vec<PhoneNumber>,

    /// Free-text notes, possibly multi-line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ContactRecord {
    /// Create a contact with only a display name set.
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..Default::default()
        }
    }

    /// Human-readable identification for diagnostics.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.id.as_deref())
            .unwrap_or("<unnamed>")
    }
}
