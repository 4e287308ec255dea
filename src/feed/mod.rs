//! Lazily paginated contact feed.
//!
//! Pages are requested one at a time as the consumer pulls records, so the
//! feed never needs to know the total contact count up front. A page error
//! ends the stream with that error. A page token that was already followed
//! ends the stream, so a cycling service cannot page forever.

use crate::client::AsyncContactsClient;
use crate::error::{ContactsApiError, ContactsApiResult};
use crate::models::ContactRecord;
use futures::stream::{self, Stream, TryStreamExt};
use std::collections::HashSet;
use std::sync::Arc;

/// Where the next page request starts.
enum Cursor {
    First,
    Token(String),
    Exhausted,
}

/// A contact feed backed by the contacts API.
pub struct ContactFeed {
    client: Arc<dyn AsyncContactsClient>,
    page_size: usize,
}

impl ContactFeed {
    pub fn new(client: Arc<dyn AsyncContactsClient>, page_size: usize) -> Self {
        Self { client, page_size }
    }

    /// Turn the feed into a stream of contacts in feed order.
    pub fn into_stream(self) -> impl Stream<Item = ContactsApiResult<ContactRecord>> + Send {
        let Self { client, page_size } = self;

        let pages = stream::try_unfold(
            (Cursor::First, HashSet::new()),
            move |(cursor, mut seen): (Cursor, HashSet<String>)| {
                let client = client.clone();
                async move {
                    let token = match cursor {
                        Cursor::Exhausted => return Ok(None),
                        Cursor::First => None,
                        Cursor::Token(token) => Some(token),
                    };

                    let page = client.get_contacts_page(page_size, token).await?;
                    tracing::debug!(count = page.contacts.len(), "Fetched contacts page");

                    let next = match page.next_page_token {
                        Some(next) if next.is_empty() => Cursor::Exhausted,
                        Some(next) if !seen.insert(next.clone()) => {
                            tracing::warn!(token = %next, "Feed returned a page token it already served, stopping");
                            Cursor::Exhausted
                        }
                        Some(next) => Cursor::Token(next),
                        None => Cursor::Exhausted,
                    };

                    Ok::<_, ContactsApiError>(Some((page.contacts, (next, seen))))
                }
            },
        );

        pages
            .map_ok(|contacts| stream::iter(contacts.into_iter().map(Ok::<_, ContactsApiError>)))
            .try_flatten()
    }
}
