//! Location entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub lat: f64,
    pub long: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Location.
impl From<Model> for geoblog_core::domain::Location {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            lat: model.lat,
            long: model.long,
        }
    }
}

/// Conversion from Domain Location to SeaORM ActiveModel.
impl From<geoblog_core::domain::Location> for ActiveModel {
    fn from(location: geoblog_core::domain::Location) -> Self {
        Self {
            id: Set(location.id),
            lat: Set(location.lat),
            long: Set(location.long),
        }
    }
}
