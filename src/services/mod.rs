//! Application service layer.
//!
//! Services orchestrate the BBDB engine, the contact feed and the photo
//! store into complete export runs.

mod export_service;
mod photo_service;

pub use export_service::{export_records, ExportService, ExportSummary};
pub use photo_service::{photo_file_name, PhotoService};
