//! Contact photo storage.
//!
//! Photos are saved next to the BBDB file as `<image dir>/<display name>.jpg`,
//! the layout BBDB's image support looks up by record name.

use crate::client::AsyncContactsClient;
use crate::domain::ContactId;
use crate::metrics::Metrics;
use crate::models::ContactRecord;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Downloads contact photos into an image directory.
pub struct PhotoService {
    client: Arc<dyn AsyncContactsClient>,
    image_dir: PathBuf,
    metrics: Metrics,
}

impl PhotoService {
    pub fn new(client: Arc<dyn AsyncContactsClient>, image_dir: PathBuf, metrics: Metrics) -> Self {
        Self {
            client,
            image_dir,
            metrics,
        }
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Create the image directory if needed.
    pub async fn prepare(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.image_dir).await
    }

    /// Fetch and store the photo of one contact.
    ///
    /// Returns the written path, or `None` when the contact has no id, no
    /// display name or no photo. Failures are logged and reported as `None`;
    /// a missing photo never stops an export.
    pub async fn store(&self, contact: &ContactRecord) -> Option<PathBuf> {
        let name = contact.display_name.as_deref().filter(|n| !n.is_empty())?;
        let raw_id = contact.id.as_deref()?;

        let contact_id = match ContactId::new(raw_id) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(contact = %name, "Skipping photo: {}", e);
                return None;
            }
        };

        let bytes = match self.client.get_photo(&contact_id).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(contact = %name, "Failed to fetch photo: {}", e);
                return None;
            }
        };

        let path = self.image_dir.join(photo_file_name(name));
        if let Err(e) = tokio::fs::write(&path, &bytes).await {
            tracing::warn!(contact = %name, path = %path.display(), "Failed to write photo: {}", e);
            return None;
        }

        self.metrics.record_photo_saved();
        tracing::debug!(contact = %name, path = %path.display(), "Saved photo");
        Some(path)
    }
}

/// File name for a contact photo. Path separators become `_` and a leading
/// dot is escaped so the file stays inside the image directory and visible.
pub fn photo_file_name(display_name: &str) -> String {
    let mut name: String = display_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();
    if name.starts_with('.') {
        name.insert(0, '_');
    }
    name.push_str(".jpg");
    name
}
