//! Store trait for short id to target URL mappings.

use async_trait::async_trait;

/// Associative store mapping short ids to target URLs.
///
/// Every operation must be safe for any number of concurrent callers and must
/// not block indefinitely. Absence of a key is a normal outcome, never an
/// error.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryShortLinkStore`] - mutex-guarded table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkStore: Send + Sync {
    /// Returns `true` iff `id` is currently mapped.
    async fn exists(&self, id: &str) -> bool;

    /// Returns the target for `id`, or `None` if it was never allocated.
    async fn get(&self, id: &str) -> Option<String>;

    /// Inserts or overwrites the mapping for `id` unconditionally.
    async fn save(&self, id: &str, target: &str);

    /// Atomically maps `id` to `target` if `id` is free.
    ///
    /// Returns `true` when the mapping was created and `false` when `id` was
    /// already taken, in which case the existing target is left untouched.
    /// Two concurrent calls for the same free `id` never both return `true`.
    async fn insert_if_absent(&self, id: &str, target: &str) -> bool;

    /// Number of live mappings.
    async fn count(&self) -> usize;
}
