//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! contact IDs and the relation tags attached to addresses and phone
//! numbers. Relation tags are resolved once at deserialization time so
//! the formatter only ever sees a closed set of kinds.

pub mod contact_id;
pub mod errors;
pub mod kind;

pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use kind::{AddressKind, PhoneKind};
