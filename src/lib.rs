//! contacts-to-bbdb - export address-book contacts into a BBDB database.
//!
//! Contacts are pulled page by page from a remote contacts service and
//! written, one s-expression line per contact, into the flat-file database
//! used by the Emacs Insidious Big Brother Database.
//!
//! # Architecture
//!
//! - **bbdb**: the record engine (name/address parsing, normalization, formatting, file writer)
//! - **models**: contact records as delivered by the service
//! - **domain**: value objects (contact IDs, address and phone kinds)
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **client**: HTTP client for the contacts API
//! - **feed**: lazily paginated contact stream
//! - **services**: export and photo services
//! - **metrics**: counters for requests and export results

pub mod bbdb;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod metrics;
pub mod models;
pub mod services;

pub use bbdb::{BbdbWriter, FormattedRecord, RecordFormatter};
pub use client::{AsyncContactsClient, AsyncContactsClientImpl, ContactsClient, ContactsPage};
pub use config::Config;
pub use error::{AddressError, ConfigError, ContactsApiError, ExportError};
pub use feed::ContactFeed;
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ContactRecord, PhoneNumber, PostalAddress};
pub use services::{ExportService, ExportSummary, PhotoService};
