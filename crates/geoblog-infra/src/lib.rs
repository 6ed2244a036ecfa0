//! # Geoblog Infrastructure
//!
//! Concrete implementations of the repository ports defined in `geoblog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM, schema managed by `migration`
//!
//! Without `postgres` only the in-memory repositories are built.

pub mod database;

pub use database::{InMemoryBlogPostRepository, InMemoryLocationRepository};

#[cfg(feature = "postgres")]
pub use database::{ConnectionError, DatabaseConfig, DatabaseConnections};
