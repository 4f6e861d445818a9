//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

pub use mock_api::{character_payload, MockApi, MockResponse};

use mortui::api::{CharacterClient, CharacterRecord};
use mortui::config::ApiConfig;
use mortui::store::Store;

/// Api config pointed at a mock server.
pub fn test_api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// Build an isolated store against a mock server.
pub fn make_store(base_url: &str, initial_counter: u16) -> Store {
    let client = CharacterClient::new(&test_api_config(base_url));
    Store::new(client, initial_counter)
}

/// A record as the store would hold it after fetching `id` from the mock.
pub fn canned_record(id: u16) -> CharacterRecord {
    CharacterRecord::from_value(character_payload(id))
}
