//! Rendering of normalized contacts as BBDB record lines.
//!
//! A record has the fixed shape
//!
//! ```text
//! [<first> <last> <nick> <company> <phones> <addresses> <emails> ( <notes> ) nil]
//! ```
//!
//! Missing scalars render as `nil`, empty lists as `nil`. Missing notes
//! render as the empty string inside their parentheses, so an empty contact
//! becomes `[nil nil nil nil nil nil nil (  ) nil]`. The trailing `nil` is a
//! reserved slot that stays unused.

use super::address::ParsedAddress;
use super::name::ParsedName;
use super::normalizer::{AddressDiagnostic, NormalizedRecord, Normalizer};
use super::sexp::{list_or_nil, quote, quote_or_nil};
use crate::domain::PhoneKind;
use crate::models::ContactRecord;
use std::fmt;

/// One finished BBDB line, without its newline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedRecord(String);

impl FormattedRecord {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A formatted record plus the addresses that had to be left out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOutcome {
    pub record: FormattedRecord,
    pub diagnostics: Vec<AddressDiagnostic>,
}

/// Converts contact records into BBDB lines.
///
/// The formatter is pure: formatting the same contact twice yields the same
/// bytes. It can be shared across records and built once per run.
#[derive(Debug, Clone, Default)]
pub struct RecordFormatter {
    normalizer: Normalizer,
}

impl RecordFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and render a contact.
    pub fn format(&self, contact: &ContactRecord) -> FormatOutcome {
        let normalized = self.normalizer.normalize(contact);
        let record = render(&normalized);
        FormatOutcome {
            record,
            diagnostics: normalized.diagnostics,
        }
    }

    /// Render a contact, discarding diagnostics.
    pub fn format_line(&self, contact: &ContactRecord) -> FormattedRecord {
        self.format(contact).record
    }
}

/// Render an already-normalized record.
pub fn render(record: &NormalizedRecord) -> FormattedRecord {
    FormattedRecord(format!(
        "[{} {} {} {} {} ( {} ) nil]",
        render_name(&record.name),
        quote_or_nil(record.company.as_deref()),
        render_phones(&record.phones),
        render_addresses(&record.addresses),
        render_emails(&record.emails),
        render_notes(record.notes.as_deref()),
    ))
}

fn render_name(name: &ParsedName) -> String {
    format!(
        "{} {} {}",
        quote_or_nil(name.first_name.as_deref()),
        quote_or_nil(name.last_name.as_deref()),
        quote_or_nil(name.nickname.as_deref()),
    )
}

fn render_phones(phones: &[(PhoneKind, String)]) -> String {
    let items: Vec<String> = phones
        .iter()
        .map(|(kind, number)| format!("[{} {}]", quote(kind.label()), quote(number)))
        .collect();
    list_or_nil(&items)
}

fn render_addresses(addresses: &[ParsedAddress]) -> String {
    let items: Vec<String> = addresses
        .iter()
        .map(|a| {
            format!(
                "[{} ({}) {} {} {} {}]",
                quote(a.kind.label()),
                quote(&a.street),
                quote(&a.city),
                quote(&a.state),
                quote(&a.postal_code),
                quote(&a.country),
            )
        })
        .collect();
    list_or_nil(&items)
}

fn render_emails(emails: &[String]) -> String {
    let items: Vec<String> = emails.iter().map(|email| quote(email)).collect();
    list_or_nil(&items)
}

// Absent notes are "", not nil.
fn render_notes(notes: Option<&str>) -> String {
    match notes {
        Some(joined) => format!("(notes . {})", quote(joined)),
        None => String::new(),
    }
}
