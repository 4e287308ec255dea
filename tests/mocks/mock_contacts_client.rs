use async_trait::async_trait;
use contacts_to_bbdb::client::{AsyncContactsClient, ContactsPage};
use contacts_to_bbdb::domain::ContactId;
use contacts_to_bbdb::error::{ContactsApiError, ContactsApiResult};
use contacts_to_bbdb::models::ContactRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contacts client for testing.
///
/// Serves a scripted sequence of pages, keyed by the page token that
/// requests them, plus an in-memory photo table. Requests are recorded so
/// tests can check how far a feed was pulled.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactsClient {
    pages: Arc<Mutex<HashMap<Option<String>, Result<ContactsPage, u16>>>>,
    photos: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    page_requests: Arc<Mutex<Vec<(usize, Option<String>)>>>,
    photo_requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockContactsClient {
    /// Create a mock with no pages and no photos.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `contacts` for the request carrying `token`, pointing at `next`.
    pub fn add_page(&self, token: Option<&str>, contacts: Vec<ContactRecord>, next: Option<&str>) {
        let page = ContactsPage {
            contacts,
            next_page_token: next.map(str::to_string),
        };
        self.pages
            .lock()
            .unwrap()
            .insert(token.map(str::to_string), Ok(page));
    }

    /// Answer the request carrying `token` with an HTTP status error.
    pub fn fail_page(&self, token: Option<&str>, status: u16) {
        self.pages
            .lock()
            .unwrap()
            .insert(token.map(str::to_string), Err(status));
    }

    pub fn add_photo(&self, contact_id: &str, bytes: Vec<u8>) {
        self.photos
            .lock()
            .unwrap()
            .insert(contact_id.to_string(), bytes);
    }

    /// Page requests made so far, as `(limit, token)` pairs.
    pub fn page_requests(&self) -> Vec<(usize, Option<String>)> {
        self.page_requests.lock().unwrap().clone()
    }

    /// Contact ids whose photo was requested.
    pub fn photo_requests(&self) -> Vec<String> {
        self.photo_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AsyncContactsClient for MockContactsClient {
    async fn get_contacts_page(
        &self,
        limit: usize,
        page_token: Option<String>,
    ) -> ContactsApiResult<ContactsPage> {
        self.page_requests
            .lock()
            .unwrap()
            .push((limit, page_token.clone()));

        let pages = self.pages.lock().unwrap();
        match pages.get(&page_token) {
            Some(Ok(page)) => Ok(ContactsPage {
                contacts: page.contacts.clone(),
                next_page_token: page.next_page_token.clone(),
            }),
            Some(Err(401)) => Err(ContactsApiError::Unauthorized),
            Some(Err(status)) => Err(ContactsApiError::ApiError {
                status: *status,
                message: "scripted failure".to_string(),
            }),
            None => Err(ContactsApiError::NotFound(format!(
                "no page for token {:?}",
                page_token
            ))),
        }
    }

    async fn get_photo(&self, contact_id: &ContactId) -> ContactsApiResult<Option<Vec<u8>>> {
        self.photo_requests
            .lock()
            .unwrap()
            .push(contact_id.as_str().to_string());

        Ok(self.photos.lock().unwrap().get(contact_id.as_str()).cloned())
    }
}
