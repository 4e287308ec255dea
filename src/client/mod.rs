//! HTTP client for the remote contacts service.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication, error mapping,
//! and page-token pagination for the contacts API.

mod async_wrapper;
pub use async_wrapper::{AsyncContactsClient, AsyncContactsClientImpl};

use crate::config::Config;
use crate::domain::ContactId;
use crate::error::{ContactsApiError, ContactsApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::ContactRecord;
use serde::Deserialize;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

/// Photos larger than this are refused.
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;

/// One page of the contacts feed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactsPage {
    /// Contacts on this page, in feed order
    pub contacts: Vec<ContactRecord>,

    /// Token for the next page; absent on the last page
    pub next_page_token: Option<String>,
}

/// HTTP client for the contacts API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactsClient {
    /// Base URL for the contacts API
    base_url: String,

    /// Bearer token for authentication
    api_token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactsClient {
    /// Create a new ContactsClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            api_token: config.api_token.clone(),
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create a ContactsClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_token: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_token,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, ContactsApiError> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.api_token))
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(_) => timer.complete(),
            Err(e) => {
                tracing::debug!("GET {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a ContactsApiError.
    fn map_error(&self, error: ureq::Error) -> ContactsApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => ContactsApiError::Unauthorized,
                    404 => ContactsApiError::NotFound(message),
                    429 => ContactsApiError::RateLimitExceeded,
                    _ => ContactsApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ContactsApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ContactsApiError::Timeout
                } else {
                    ContactsApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Fetch one page of contacts.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of contacts on the page
    /// * `page_token` - Token from the previous page, `None` for the first page
    pub fn get_contacts_page(
        &self,
        limit: usize,
        page_token: Option<&str>,
    ) -> ContactsApiResult<ContactsPage> {
        let mut path = format!("/contacts?limit={}", limit);
        if let Some(token) = page_token {
            path.push_str("&page_token=");
            path.push_str(&urlencoding::encode(token));
        }

        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| ContactsApiError::HttpError(e.to_string()))?;

        let page: ContactsPage = serde_json::from_str(&body)?;
        self.metrics.record_contacts_fetched(page.contacts.len());
        Ok(page)
    }

    /// Fetch a contact's photo. Returns `None` when the contact has no photo.
    ///
    /// # Errors
    ///
    /// `ContactsApiError::ResponseTooLarge` when the photo exceeds
    /// [`MAX_PHOTO_BYTES`]; nothing is returned in that case.
    pub fn get_photo(&self, contact_id: &ContactId) -> ContactsApiResult<Option<Vec<u8>>> {
        let path = format!("/contacts/{}/photo", urlencoding::encode(contact_id.as_str()));

        let response = match self.get(&path) {
            Ok(response) => response,
            Err(ContactsApiError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        if response.status() == 204 {
            return Ok(None);
        }

        // One byte past the limit tells an oversized photo from one that fits
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_PHOTO_BYTES + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| ContactsApiError::HttpError(e.to_string()))?;

        if bytes.len() as u64 > MAX_PHOTO_BYTES {
            return Err(ContactsApiError::ResponseTooLarge {
                limit: MAX_PHOTO_BYTES,
            });
        }

        if bytes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(bytes))
        }
    }
}
