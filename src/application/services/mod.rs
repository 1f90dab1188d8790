//! Business logic services for the application layer.

pub mod allocation_service;

pub use allocation_service::{AllocationError, AllocationService, DEFAULT_MAX_RETRIES};
