//! # Geoblog Core
//!
//! The domain layer of the geoblog backend.
//! Locations, blog posts, and the repository ports the infrastructure implements.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
