//! Schema migrations for the `locations` and `blog_posts` tables.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_locations;
mod m20240101_000002_create_blog_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_locations::Migration),
            Box::new(m20240101_000002_create_blog_posts::Migration),
        ]
    }
}
