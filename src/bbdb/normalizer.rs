//! Record normalization: pull the BBDB-relevant fields out of a contact.
//!
//! Absence stays explicit here (`Option` / empty `Vec`). Choosing between
//! `nil` and an empty string is left to the formatter.

use super::address::{AddressParser, ParsedAddress};
use super::name::{NameParser, ParsedName};
use crate::domain::PhoneKind;
use crate::error::AddressError;
use crate::models::ContactRecord;
use std::fmt;

/// An address dropped while normalizing a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressDiagnostic {
    /// Display name (or id) of the contact the address belongs to
    pub contact: String,
    pub error: AddressError,
}

impl fmt::Display for AddressDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in record {}", self.error, self.contact)
    }
}

/// The fields of one contact, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedRecord {
    pub name: ParsedName,
    pub company: Option<String>,
    pub phones: Vec<(PhoneKind, String)>,
    pub addresses: Vec<ParsedAddress>,
    pub emails: Vec<String>,
    /// Notes with surrounding whitespace trimmed and lines joined by a space
    pub notes: Option<String>,
    pub diagnostics: Vec<AddressDiagnostic>,
}

/// Extracts and lightly validates contact fields.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    names: NameParser,
    addresses: AddressParser,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize one contact. Never fails; bad addresses become diagnostics.
    pub fn normalize(&self, contact: &ContactRecord) -> NormalizedRecord {
        let name = self
            .names
            .parse(contact.display_name.as_deref(), contact.nickname.as_deref());

        let company = contact
            .organization_name
            .clone()
            .filter(|org| !org.is_empty());

        let phones = contact
            .phone_numbers
            .iter()
            .map(|phone| (phone.kind, phone.number.clone()))
            .collect();

        let mut addresses = Vec::with_capacity(contact.postal_addresses.len());
        let mut diagnostics = Vec::new();
        for address in &contact.postal_addresses {
            match self.addresses.parse(address) {
                Ok(parsed) => addresses.push(parsed),
                Err(error) => diagnostics.push(AddressDiagnostic {
                    contact: contact.label().to_string(),
                    error,
                }),
            }
        }

        NormalizedRecord {
            name,
            company,
            phones,
            addresses,
            emails: contact.emails.clone(),
            notes: contact.notes.as_deref().and_then(join_notes),
            diagnostics,
        }
    }
}

/// Collapse multi-line notes onto one line. Only empty notes count as
/// absent; whitespace-only notes join to an empty string.
fn join_notes(notes: &str) -> Option<String> {
    if notes.is_empty() {
        return None;
    }
    Some(notes.trim().lines().collect::<Vec<_>>().join(" "))
}
