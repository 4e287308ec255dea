//! Relation tags for postal addresses and phone numbers.
//!
//! The contacts service labels each address or number with a relation,
//! either a bare word (`"work"`) or a schema URI whose fragment carries the
//! word (`"http://schemas.google.com/g/2005#work"`). Unknown or missing
//! relations collapse to `Other`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Extract the relation word from a tag, lowercased.
fn relation_word(rel: &str) -> String {
    let word = match rel.rsplit_once('#') {
        Some((_, fragment)) => fragment,
        None => rel,
    };
    word.trim().to_ascii_lowercase()
}

/// Kind of a postal address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressKind {
    Work,
    Home,
    #[default]
    Other,
}

impl AddressKind {
    /// Resolve a relation tag. Anything but work/home is `Other`.
    pub fn from_rel(rel: &str) -> Self {
        match relation_word(rel).as_str() {
            "work" => Self::Work,
            "home" => Self::Home,
            _ => Self::Other,
        }
    }

    /// Label written into BBDB records.
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Home => "Home",
            Self::Other => "Other",
        }
    }
}

/// Kind of a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhoneKind {
    Work,
    Home,
    Mobile,
    #[default]
    Other,
}

impl PhoneKind {
    /// Resolve a relation tag. Anything but work/home/mobile is `Other`.
    pub fn from_rel(rel: &str) -> Self {
        match relation_word(rel).as_str() {
            "work" => Self::Work,
            "home" => Self::Home,
            "mobile" => Self::Mobile,
            _ => Self::Other,
        }
    }

    /// Label written into BBDB records.
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Home => "Home",
            Self::Mobile => "Mobile",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serde support - relation tags are plain strings on the wire. A null tag
// is treated like an unknown one.
impl<'de> Deserialize<'de> for AddressKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rel = Option::<String>::deserialize(deserializer)?;
        Ok(rel.map(|r| Self::from_rel(&r)).unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for PhoneKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rel = Option::<String>::deserialize(deserializer)?;
        Ok(rel.map(|r| Self::from_rel(&r)).unwrap_or_default())
    }
}

impl Serialize for AddressKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.label().to_ascii_lowercase())
    }
}

impl Serialize for PhoneKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.label().to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_kind_from_rel() {
        assert_eq!(AddressKind::from_rel("work"), AddressKind::Work);
        assert_eq!(AddressKind::from_rel("HOME"), AddressKind::Home);
        assert_eq!(
            AddressKind::from_rel("http://schemas.google.com/g/2005#work"),
            AddressKind::Work
        );
        assert_eq!(AddressKind::from_rel("mobile"), AddressKind::Other);
        assert_eq!(AddressKind::from_rel(""), AddressKind::Other);
    }

    #[test]
    fn test_phone_kind_from_rel() {
        assert_eq!(
            PhoneKind::from_rel("http://schemas.google.com/g/2005#mobile"),
            PhoneKind::Mobile
        );
        assert_eq!(PhoneKind::from_rel("Home"), PhoneKind::Home);
        assert_eq!(PhoneKind::from_rel("fax"), PhoneKind::Other);
    }

    #[test]
    fn test_labels() {
        assert_eq!(AddressKind::Work.label(), "Work");
        assert_eq!(PhoneKind::Mobile.to_string(), "Mobile");
    }

    #[test]
    fn test_kind_deserialization() {
        let kind: PhoneKind = serde_json::from_str("\"work\"").unwrap();
        assert_eq!(kind, PhoneKind::Work);

        let kind: AddressKind = serde_json::from_str("null").unwrap();
        assert_eq!(kind, AddressKind::Other);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&PhoneKind::Mobile).unwrap();
        assert_eq!(json, "\"mobile\"");
    }
}
