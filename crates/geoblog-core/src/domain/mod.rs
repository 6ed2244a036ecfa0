//! Domain entities - the two stored document shapes.

mod blog_post;
mod location;

pub use blog_post::BlogPost;
pub use location::Location;
