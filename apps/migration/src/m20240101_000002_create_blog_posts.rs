use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// No foreign key to `locations`: `location_id` is a free-form string.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BlogPosts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(BlogPosts::LocationId).string().not_null())
                    .col(ColumnDef::new(BlogPosts::User).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Date).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Time).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Text).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    LocationId,
    User,
    Date,
    Time,
    Text,
}
