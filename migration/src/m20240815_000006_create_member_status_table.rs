use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240701_000001_create_member_table::Member,
    m20240815_000005_create_semester_table::Semester,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberStatus::Table)
                    .if_not_exists()
                    .col(integer(MemberStatus::MemberId))
                    .col(integer(MemberStatus::SemesterId))
                    .col(string(MemberStatus::Status))
                    .primary_key(
                        Index::create()
                            .col(MemberStatus::MemberId)
                            .col(MemberStatus::SemesterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_status_member_id")
                            .from(MemberStatus::Table, MemberStatus::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_status_semester_id")
                            .from(MemberStatus::Table, MemberStatus::SemesterId)
                            .to(Semester::Table, Semester::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberStatus {
    Table,
    MemberId,
    SemesterId,
    Status,
}
