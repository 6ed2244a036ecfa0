use async_trait::async_trait;

use crate::domain::{BlogPost, Location};
use crate::error::RepoError;

/// Generic repository trait: the create/list pair every collection supports.
///
/// There are no update or delete operations.
#[async_trait]
pub trait BaseRepository<T>: Send + Sync {
    /// Persist a new entity and return it as stored.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Return every stored entity in storage order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;
}

/// Location repository.
pub trait LocationRepository: BaseRepository<Location> {}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost> {
    /// Find posts whose `location_id` exactly equals the given string.
    /// An empty result is not an error.
    async fn find_by_location_id(&self, location_id: &str) -> Result<Vec<BlogPost>, RepoError>;
}
