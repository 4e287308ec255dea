//! BBDB record engine.
//!
//! Turns contact records into lines of the BBDB flat-file database:
//!
//! - **name**: display-name splitting into first/last name
//! - **address**: multi-line postal address parsing
//! - **normalizer**: per-contact field extraction, collecting address diagnostics
//! - **formatter**: rendering of normalized fields as one s-expression line
//! - **writer**: the file header and sequential line output
//!
//! Everything here is synchronous and free of shared mutable state.

pub mod address;
pub mod formatter;
pub mod name;
pub mod normalizer;
pub mod sexp;
pub mod writer;

pub use address::{AddressParser, ParsedAddress};
pub use formatter::{FormatOutcome, FormattedRecord, RecordFormatter};
pub use name::{NameParser, ParsedName};
pub use normalizer::{AddressDiagnostic, NormalizedRecord, Normalizer};
pub use writer::{BbdbWriter, HEADER};
