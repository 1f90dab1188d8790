//! Domain layer containing the short link model and its collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`generator`] - Short id generation contract
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure and utils layers
//! - Allocation logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod generator;
pub mod repositories;
