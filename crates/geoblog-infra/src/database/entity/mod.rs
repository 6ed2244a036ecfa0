//! SeaORM entities, one per table.

pub mod blog_post;
pub mod location;
