//! Short id allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::generator::IdGenerator;
use crate::domain::repositories::ShortLinkStore;
use tracing::{debug, info, warn};

/// Default number of candidates tried before giving up.
pub const DEFAULT_MAX_RETRIES: usize = 5;

/// Errors raised while allocating a short id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    /// Every candidate within the retry budget collided with an existing id.
    #[error("Failed to generate unique short ID after {attempts} attempts")]
    RetriesExhausted { attempts: usize },
}

/// Service binding target URLs to freshly generated short ids.
///
/// Each allocation asks the generator for a candidate and reserves it with
/// [`ShortLinkStore::insert_if_absent`], so check and insert happen in one
/// critical section of the store. A collision costs one attempt; after
/// `max_retries` collisions the allocation fails. No state is shared between
/// calls other than the store.
///
/// Reserved ids (path segments claimed by other routes) count as collisions.
///
/// The same target may be allocated any number of times and receives an
/// independent id each time.
pub struct AllocationService<S: ShortLinkStore, G: IdGenerator> {
    store: Arc<S>,
    generator: Arc<G>,
    max_retries: usize,
    reserved_ids: Vec<String>,
}

impl<S: ShortLinkStore, G: IdGenerator> AllocationService<S, G> {
    /// Creates a service with the default retry budget.
    pub fn new(store: Arc<S>, generator: Arc<G>) -> Self {
        Self {
            store,
            generator,
            max_retries: DEFAULT_MAX_RETRIES,
            reserved_ids: Vec::new(),
        }
    }

    /// Ids the generator may produce but that must never be handed out.
    pub fn with_reserved_ids<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.reserved_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the retry budget.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Allocates a new short id for `target`.
    ///
    /// `target` is expected to be a validated absolute URL; validation is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::RetriesExhausted`] if every candidate within
    /// the retry budget was already taken.
    pub async fn allocate(&self, target: &str) -> Result<ShortLink, AllocationError> {
        for attempt in 1..=self.max_retries {
            let id = self.generator.generate(target);

            if self.reserved_ids.contains(&id) {
                debug!(%id, attempt, "Generated reserved id, retrying");
                continue;
            }

            if self.store.insert_if_absent(&id, target).await {
                info!(%id, attempt, "Allocated short id");
                return Ok(ShortLink::new(id, target));
            }

            debug!(%id, attempt, "Short id collision, retrying");
        }

        warn!(attempts = self.max_retries, "Short id allocation exhausted its retry budget");

        Err(AllocationError::RetriesExhausted {
            attempts: self.max_retries,
        })
    }

    /// Looks up the target for `id`.
    ///
    /// Returns `None` for ids that were never allocated.
    pub async fn resolve(&self, id: &str) -> Option<String> {
        self.store.get(id).await
    }

    /// Number of links currently held by the store.
    pub async fn link_count(&self) -> usize {
        self.store.count().await
    }
}
