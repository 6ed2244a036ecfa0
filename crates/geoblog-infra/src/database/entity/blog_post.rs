//! Blog post entity for SeaORM.
//!
//! `location_id` is a plain string column; there is no relation to `locations`.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub location_id: String,
    pub user: String,
    pub date: String,
    pub time: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for geoblog_core::domain::BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            location_id: model.location_id,
            user: model.user,
            date: model.date,
            time: model.time,
            text: model.text,
        }
    }
}

impl From<geoblog_core::domain::BlogPost> for ActiveModel {
    fn from(post: geoblog_core::domain::BlogPost) -> Self {
        Self {
            id: Set(post.id),
            location_id: Set(post.location_id),
            user: Set(post.user),
            date: Set(post.date),
            time: Set(post.time),
            text: Set(post.text),
        }
    }
}
