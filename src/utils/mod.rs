//! Utility functions for short id generation and URL validation.
//!
//! - [`id_generator`] - Salted SHA-256 short id generation
//! - [`url_validator`] - Target URL validation

pub mod id_generator;
pub mod url_validator;
