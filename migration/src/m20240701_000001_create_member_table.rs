use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(integer_uniq(Member::RollCall))
                    .col(string(Member::FirstName))
                    .col(string(Member::LastName))
                    .col(string_null(Member::Major))
                    .col(string(Member::Status))
                    .col(string_null(Member::ClassName))
                    .col(string_null(Member::Email))
                    .col(string_null(Member::PhoneNumber))
                    .col(integer(Member::BadStanding).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    RollCall,
    FirstName,
    LastName,
    Major,
    Status,
    ClassName,
    Email,
    PhoneNumber,
    BadStanding,
}
