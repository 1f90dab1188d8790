#![allow(dead_code)]

use std::sync::Arc;
use tinylink::api::routes::RESERVED_PATHS;
use tinylink::application::services::AllocationService;
use tinylink::domain::repositories::ShortLinkStore;
use tinylink::infrastructure::persistence::InMemoryShortLinkStore;
use tinylink::state::AppState;
use tinylink::utils::id_generator::{ALPHABET, Sha256IdGenerator};

pub const TEST_BASE_URL: &str = "https://s.test.com";

pub fn create_test_state(base_url: Option<&str>) -> (AppState, Arc<InMemoryShortLinkStore>) {
    create_test_state_with_length(base_url, 6)
}

pub fn create_test_state_with_length(
    base_url: Option<&str>,
    length: usize,
) -> (AppState, Arc<InMemoryShortLinkStore>) {
    let store = Arc::new(InMemoryShortLinkStore::new());
    let generator = Arc::new(Sha256IdGenerator::new(length));
    let service = Arc::new(
        AllocationService::new(store.clone(), generator)
            .with_reserved_ids(RESERVED_PATHS.iter().copied()),
    );

    let state = AppState::new(service, base_url.map(str::to_string));

    (state, store)
}

pub async fn create_test_link(store: &InMemoryShortLinkStore, id: &str, target: &str) {
    store.save(id, target).await;
}

/// Occupies every one-character id.
pub async fn fill_single_char_keyspace(store: &InMemoryShortLinkStore) {
    for &symbol in ALPHABET {
        store
            .save(&(symbol as char).to_string(), "https://taken.example.com")
            .await;
    }
}
