use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Semester::Table)
                    .if_not_exists()
                    .col(pk_auto(Semester::Id))
                    .col(string_uniq(Semester::Label))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Semester::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Semester {
    Table,
    Id,
    Label,
}
