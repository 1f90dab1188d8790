//! Short id generation contract.

/// Produces candidate short ids for a target URL.
///
/// Implementations are pure generators that never consult storage; the
/// allocation service is responsible for detecting collisions. Each call must
/// draw fresh entropy so a retry after a collision yields a new candidate.
///
/// # Implementations
///
/// - [`crate::utils::id_generator::Sha256IdGenerator`] - salted SHA-256, base62 encoded
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns a candidate id for `url`.
    fn generate(&self, url: &str) -> String;
}
