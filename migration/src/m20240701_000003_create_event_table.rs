use sea_orm_migration::{prelude::*, schema::*};

use super::m20240701_000002_create_event_category_table::EventCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Name))
                    .col(integer(Event::CategoryId))
                    .col(string(Event::Location))
                    .col(date(Event::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_category_id")
                            .from(Event::Table, Event::CategoryId)
                            .to(EventCategory::Table, EventCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Name,
    CategoryId,
    Location,
    Date,
}
