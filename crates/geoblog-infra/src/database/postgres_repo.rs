//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use geoblog_core::domain::BlogPost;
use geoblog_core::error::RepoError;
use geoblog_core::ports::{BlogPostRepository, LocationRepository};

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::entity::location::Entity as LocationEntity;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL location repository.
pub type PostgresLocationRepository = PostgresBaseRepository<LocationEntity>;

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

impl LocationRepository for PostgresLocationRepository {}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn find_by_location_id(&self, location_id: &str) -> Result<Vec<BlogPost>, RepoError> {
        tracing::debug!(location_id, "Finding blog posts by location");

        let result = BlogPostEntity::find()
            .filter(blog_post::Column::LocationId.eq(location_id))
            .order_by_asc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
