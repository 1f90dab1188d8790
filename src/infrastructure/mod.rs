//! Infrastructure layer implementing interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Short link store implementations

pub mod persistence;
