//! Data models for the remote contacts service.
//!
//! This module contains the contact record as delivered by the service,
//! together with its postal-address and phone-number entries.

pub mod contact;

pub use contact::{ContactRecord, PhoneNumber, PostalAddress};
