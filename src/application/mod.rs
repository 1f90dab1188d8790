//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::allocation_service::AllocationService`] - Short id allocation and resolution

pub mod services;
