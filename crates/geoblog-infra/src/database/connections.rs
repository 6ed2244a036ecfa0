use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};
use thiserror::Error;

/// Configuration for the database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Drop and recreate both tables on startup. Destroys all stored data.
    pub drop_existing: bool,
}

/// Startup-time database failures. Fatal: the server must not start.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Could not connect to database: {0}")]
    Connect(#[source] DbErr),

    #[error("Could not prepare database schema: {0}")]
    Schema(#[source] DbErr),
}

/// Owner of the connection pool.
pub struct DatabaseConnections {
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Connect and bring the schema up to date.
    ///
    /// With `drop_existing` the `locations` and `blog_posts` tables are
    /// dropped and recreated empty. Other tables in the schema are untouched.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, ConnectionError> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts)
            .await
            .map_err(ConnectionError::Connect)?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        if config.drop_existing {
            tracing::warn!("Dropping existing locations and blog_posts tables");
            Migrator::refresh(&main)
                .await
                .map_err(ConnectionError::Schema)?;
        } else {
            Migrator::up(&main, None)
                .await
                .map_err(ConnectionError::Schema)?;
        }

        Ok(Self { main })
    }

    /// Check that the database still answers.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }

    /// Close every connection in the pool.
    pub async fn close(&self) -> Result<(), DbErr> {
        tracing::info!("Closing database connections");
        self.main.close_by_ref().await
    }
}
