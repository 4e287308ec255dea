//! contacts-to-bbdb - Main entry point
//!
//! Pulls every contact from the configured contacts service and writes them
//! into a BBDB database file, or prints the records to stdout on a dry run.

use anyhow::Result;
use contacts_to_bbdb::bbdb::BbdbWriter;
use contacts_to_bbdb::client::{AsyncContactsClient, AsyncContactsClientImpl};
use contacts_to_bbdb::{Config, ContactFeed, ContactsClient, ExportService, Metrics, PhotoService};
use std::io::{self, BufWriter};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Logs go to stderr; stdout carries records on a dry run
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Exporting contacts from {} (page size {})",
        config.api_base_url, config.page_size
    );

    let metrics = Metrics::new();
    let sync_client = ContactsClient::new(&config, metrics.clone());
    let client = Arc::new(AsyncContactsClientImpl::new(sync_client)) as Arc<dyn AsyncContactsClient>;

    let contacts = ContactFeed::new(client.clone(), config.page_size).into_stream();
    let service = ExportService::new(metrics.clone());

    let summary = if config.dry_run {
        info!("Dry run: printing records to stdout");
        let mut writer = BbdbWriter::new(BufWriter::new(io::stdout().lock()))?;
        let summary = service.export(contacts, &mut writer).await?;
        writer.finish()?;
        summary
    } else {
        let service = if config.fetch_photos {
            info!("Saving contact photos to {}", config.image_dir.display());
            service.with_photos(PhotoService::new(
                client,
                config.image_dir.clone(),
                metrics.clone(),
            ))
        } else {
            service
        };

        let summary = service.export_to_file(contacts, &config.bbdb_file).await?;
        info!("Wrote {}", config.bbdb_file.display());
        summary
    };

    let elapsed = summary.finished_at - summary.started_at;
    info!(
        records = summary.records_written,
        addresses_skipped = summary.addresses_skipped,
        photos = summary.photos_saved,
        elapsed_ms = elapsed.num_milliseconds(),
        "Export complete"
    );

    let totals = metrics.summary();
    info!(
        requests = totals.http_requests_total,
        errors = totals.http_errors_total,
        avg_ms = totals.http_duration_avg_ms,
        "HTTP summary"
    );

    Ok(())
}
