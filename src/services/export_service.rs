//! Export service: drives contacts from a feed into a BBDB file.
//!
//! Records are handled strictly one after another. Each is formatted,
//! its address diagnostics are logged, its line is written, and then its
//! photo is fetched before the next record is pulled from the feed.

use super::photo_service::PhotoService;
use crate::bbdb::{BbdbWriter, FormatOutcome, RecordFormatter};
use crate::error::{ContactsApiResult, ExportResult};
use crate::metrics::Metrics;
use crate::models::ContactRecord;
use chrono::{DateTime, Utc};
use futures::{pin_mut, Stream, StreamExt};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Outcome of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub records_written: usize,
    pub addresses_skipped: usize,
    pub photos_saved: usize,
}

/// Formats contacts and writes them out, optionally storing photos.
pub struct ExportService {
    formatter: RecordFormatter,
    photos: Option<PhotoService>,
    metrics: Metrics,
}

impl ExportService {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            formatter: RecordFormatter::new(),
            photos: None,
            metrics,
        }
    }

    /// Also download a photo for every exported contact.
    pub fn with_photos(mut self, photos: PhotoService) -> Self {
        self.photos = Some(photos);
        self
    }

    /// Format one contact and append it. Returns the number of addresses
    /// that were left out of the record.
    pub fn write_contact<W: Write>(
        &self,
        contact: &ContactRecord,
        writer: &mut BbdbWriter<W>,
    ) -> io::Result<usize> {
        let outcome = self.formatter.format(contact);
        log_diagnostics(&outcome);

        writer.write_record(&outcome.record)?;
        self.metrics.record_record_written();
        self.metrics
            .record_addresses_skipped(outcome.diagnostics.len());

        Ok(outcome.diagnostics.len())
    }

    /// Export every contact of a stream into `writer`.
    ///
    /// Stops at the first feed or write error. Records already written stay
    /// in the writer.
    pub async fn export<S, W>(
        &self,
        contacts: S,
        writer: &mut BbdbWriter<W>,
    ) -> ExportResult<ExportSummary>
    where
        S: Stream<Item = ContactsApiResult<ContactRecord>>,
        W: Write,
    {
        let started_at = Utc::now();
        let mut records_written = 0;
        let mut addresses_skipped = 0;
        let mut photos_saved = 0;

        if let Some(photos) = &self.photos {
            photos.prepare().await?;
        }

        pin_mut!(contacts);
        while let Some(contact) = contacts.next().await {
            let contact = contact?;

            addresses_skipped += self.write_contact(&contact, writer)?;
            records_written += 1;

            if let Some(photos) = &self.photos {
                if photos.store(&contact).await.is_some() {
                    photos_saved += 1;
                }
            }

            if records_written % 100 == 0 {
                tracing::info!(records_written, "Export progress");
            }
        }

        Ok(ExportSummary {
            started_at,
            finished_at: Utc::now(),
            records_written,
            addresses_skipped,
            photos_saved,
        })
    }

    /// Export a stream into the BBDB file at `path`.
    ///
    /// The file is written under a temporary name and renamed into place
    /// once the run completes, so a failed run leaves the previous database
    /// untouched.
    pub async fn export_to_file<S>(&self, contacts: S, path: &Path) -> ExportResult<ExportSummary>
    where
        S: Stream<Item = ContactsApiResult<ContactRecord>>,
    {
        let partial = partial_path(path);
        let file = File::create(&partial)?;
        let mut writer = BbdbWriter::new(BufWriter::new(file))?;

        let result = self.export(contacts, &mut writer).await;
        let result = result.and_then(|summary| {
            writer.finish()?;
            fs::rename(&partial, path)?;
            Ok(summary)
        });

        if result.is_err() {
            let _ = fs::remove_file(&partial);
        }
        result
    }
}

/// Export any in-memory sequence of contacts without a feed.
pub fn export_records<I, W>(
    formatter: &RecordFormatter,
    contacts: I,
    writer: &mut BbdbWriter<W>,
) -> io::Result<usize>
where
    I: IntoIterator<Item = ContactRecord>,
    W: Write,
{
    let mut written = 0;
    for contact in contacts {
        let outcome = formatter.format(&contact);
        log_diagnostics(&outcome);
        writer.write_record(&outcome.record)?;
        written += 1;
    }
    Ok(written)
}

fn log_diagnostics(outcome: &FormatOutcome) {
    for diagnostic in &outcome.diagnostics {
        tracing::warn!(contact = %diagnostic.contact, "Skipping address: {}", diagnostic.error);
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".partial");
    PathBuf::from(name)
}
