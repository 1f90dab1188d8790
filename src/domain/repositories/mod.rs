//! Storage trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for service tests.

pub mod short_link_store;

pub use short_link_store::ShortLinkStore;

#[cfg(test)]
pub use short_link_store::MockShortLinkStore;
