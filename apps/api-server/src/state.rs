//! Application state - shared across all handlers.

use std::sync::Arc;

use geoblog_core::ports::{BlogPostRepository, LocationRepository};
use geoblog_infra::database::{
    ConnectionError, DatabaseConfig, DatabaseConnections, PostgresBlogPostRepository,
    PostgresLocationRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub locations: Arc<dyn LocationRepository>,
    pub blog_posts: Arc<dyn BlogPostRepository>,
    /// `None` when the repositories are not database-backed.
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Connect to Postgres and build the database-backed repositories.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ConnectionError> {
        let connections = Arc::new(DatabaseConnections::init(config).await?);

        let locations = Arc::new(PostgresLocationRepository::new(connections.main.clone()));
        let blog_posts = Arc::new(PostgresBlogPostRepository::new(connections.main.clone()));

        tracing::info!("Application state initialized");

        Ok(Self {
            locations,
            blog_posts,
            db: Some(connections),
        })
    }

    /// State backed by in-memory repositories.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        use geoblog_infra::{InMemoryBlogPostRepository, InMemoryLocationRepository};

        Self {
            locations: Arc::new(InMemoryLocationRepository::new()),
            blog_posts: Arc::new(InMemoryBlogPostRepository::new()),
            db: None,
        }
    }

    /// Release the database pool. Call once the server has stopped.
    pub async fn shutdown(&self) {
        if let Some(db) = &self.db {
            if let Err(e) = db.close().await {
                tracing::error!("Failed to close database connections: {}", e);
            }
        }
    }
}
