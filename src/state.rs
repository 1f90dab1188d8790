//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::AllocationService;
use crate::infrastructure::persistence::InMemoryShortLinkStore;
use crate::utils::id_generator::Sha256IdGenerator;

/// Allocation service wired to the in-memory store and SHA-256 generator.
pub type LinkAllocator = AllocationService<InMemoryShortLinkStore, Sha256IdGenerator>;

/// Application state cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub allocation_service: Arc<LinkAllocator>,
    /// Public prefix for `short_url` in create responses.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(allocation_service: Arc<LinkAllocator>, base_url: Option<String>) -> Self {
        Self {
            allocation_service,
            base_url,
        }
    }
}
