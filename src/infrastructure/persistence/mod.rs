//! Store implementations.
//!
//! Concrete implementations of the domain storage traits.
//!
//! # Stores
//!
//! - [`InMemoryShortLinkStore`] - Process-lifetime table behind a single mutex

pub mod in_memory_store;

pub use in_memory_store::InMemoryShortLinkStore;
