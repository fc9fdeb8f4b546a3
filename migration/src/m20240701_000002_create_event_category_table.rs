use sea_orm_migration::{prelude::*, schema::*};

/// Categories available on a fresh install.
const DEFAULT_CATEGORIES: [&str; 4] = [
    "Brotherhood",
    "Professional Development",
    "Community Service",
    "Social",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(EventCategory::Id))
                    .col(string_uniq(EventCategory::Name))
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert()
            .into_table(EventCategory::Table)
            .columns([EventCategory::Name])
            .to_owned();
        for name in DEFAULT_CATEGORIES {
            seed.values_panic([name.into()]);
        }

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventCategory {
    Table,
    Id,
    Name,
}
