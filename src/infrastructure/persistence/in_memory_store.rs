use crate::domain::repositories::ShortLinkStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// In-process [`ShortLinkStore`] holding every mapping in a single table.
///
/// All reads and writes go through one mutex scoped to the whole table, so
/// [`ShortLinkStore::insert_if_absent`] checks and inserts inside a single
/// critical section. Entries live for the lifetime of the process.
///
/// Share it between callers by wrapping it in an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryShortLinkStore {
    links: Mutex<HashMap<String, String>>,
}

impl InMemoryShortLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortLinkStore for InMemoryShortLinkStore {
    async fn exists(&self, id: &str) -> bool {
        self.links.lock().await.contains_key(id)
    }

    async fn get(&self, id: &str) -> Option<String> {
        self.links.lock().await.get(id).cloned()
    }

    async fn save(&self, id: &str, target: &str) {
        self.links
            .lock()
            .await
            .insert(id.to_owned(), target.to_owned());
    }

    async fn insert_if_absent(&self, id: &str, target: &str) -> bool {
        let mut links = self.links.lock().await;

        if links.contains_key(id) {
            debug!(id, "Short id already taken");
            return false;
        }

        links.insert(id.to_owned(), target.to_owned());
        true
    }

    async fn count(&self) -> usize {
        self.links.lock().await.len()
    }
}
