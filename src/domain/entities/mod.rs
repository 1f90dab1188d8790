//! Core domain entities.
//!
//! - [`ShortLink`] - A short id bound to its target URL

pub mod short_link;

pub use short_link::ShortLink;
