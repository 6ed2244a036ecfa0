//! Database connection management and repositories.

mod memory;

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use memory::{InMemoryBlogPostRepository, InMemoryLocationRepository};

#[cfg(feature = "postgres")]
pub use connections::{ConnectionError, DatabaseConfig, DatabaseConnections};
#[cfg(feature = "postgres")]
pub use postgres_repo::{PostgresBlogPostRepository, PostgresLocationRepository};
