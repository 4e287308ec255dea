//! Test doubles shared by the integration tests.

pub mod mock_contacts_client;

#[allow(unused_imports)]
pub use mock_contacts_client::MockContactsClient;
