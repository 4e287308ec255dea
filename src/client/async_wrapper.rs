//! Async wrapper around the synchronous ContactsClient.
//!
//! This module provides an async interface to the synchronous ContactsClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use super::{ContactsClient, ContactsPage};
use crate::domain::ContactId;
use crate::error::{ContactsApiError, ContactsApiResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async contacts-service operations used by the feed and the photo store.
#[async_trait]
pub trait AsyncContactsClient: Send + Sync {
    async fn get_contacts_page(
        &self,
        limit: usize,
        page_token: Option<String>,
    ) -> ContactsApiResult<ContactsPage>;

    async fn get_photo(&self, contact_id: &ContactId) -> ContactsApiResult<Option<Vec<u8>>>;
}

/// Async wrapper around the synchronous ContactsClient.
#[derive(Clone)]
pub struct AsyncContactsClientImpl {
    client: Arc<ContactsClient>,
}

impl AsyncContactsClientImpl {
    pub fn new(client: ContactsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncContactsClient for AsyncContactsClientImpl {
    async fn get_contacts_page(
        &self,
        limit: usize,
        page_token: Option<String>,
    ) -> ContactsApiResult<ContactsPage> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_contacts_page(limit, page_token.as_deref()))
            .await
            .map_err(|e| ContactsApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_photo(&self, contact_id: &ContactId) -> ContactsApiResult<Option<Vec<u8>>> {
        let client = self.client.clone();
        let contact_id = contact_id.clone();

        tokio::task::spawn_blocking(move || client.get_photo(&contact_id))
            .await
            .map_err(|e| ContactsApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
