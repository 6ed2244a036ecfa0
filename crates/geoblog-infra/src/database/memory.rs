//! In-memory repositories - used when no database is attached, mainly in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use geoblog_core::domain::{BlogPost, Location};
use geoblog_core::error::RepoError;
use geoblog_core::ports::{BaseRepository, BlogPostRepository, LocationRepository};

/// Location store backed by a `Vec` behind an async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryLocationRepository {
    store: RwLock<Vec<Location>>,
}

impl InMemoryLocationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Location> for InMemoryLocationRepository {
    async fn create(&self, location: Location) -> Result<Location, RepoError> {
        self.store.write().await.push(location.clone());
        Ok(location)
    }

    async fn find_all(&self) -> Result<Vec<Location>, RepoError> {
        Ok(self.store.read().await.clone())
    }
}

impl LocationRepository for InMemoryLocationRepository {}

/// Blog post store backed by a `Vec` behind an async RwLock.
#[derive(Default)]
pub struct InMemoryBlogPostRepository {
    store: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<BlogPost> for InMemoryBlogPostRepository {
    async fn create(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        self.store.write().await.push(post.clone());
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.store.read().await.clone())
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn find_by_location_id(&self, location_id: &str) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|post| post.location_id == location_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(location_id: &str, text: &str) -> BlogPost {
        BlogPost::new(
            location_id.to_string(),
            "alice".to_string(),
            "2024-01-01".to_string(),
            "10:00".to_string(),
            text.to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_all_returns_insertion_order() {
        let repo = InMemoryLocationRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        let first = repo.create(Location::new(1.0, 2.0)).await.unwrap();
        let second = repo.create(Location::new(3.0, 4.0)).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_find_by_location_id_exact_match() {
        let repo = InMemoryBlogPostRepository::new();
        let kept = repo.create(post("loc-1", "kept")).await.unwrap();
        repo.create(post("loc-2", "other")).await.unwrap();
        repo.create(post("LOC-1", "case differs")).await.unwrap();

        let found = repo.find_by_location_id("loc-1").await.unwrap();
        assert_eq!(found, vec![kept]);

        assert!(repo.find_by_location_id("loc").await.unwrap().is_empty());
    }
}
