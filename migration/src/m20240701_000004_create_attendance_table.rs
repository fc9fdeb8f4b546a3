use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240701_000001_create_member_table::Member, m20240701_000003_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(integer(Attendance::MemberId))
                    .col(integer(Attendance::EventId))
                    .col(string(Attendance::Status))
                    .primary_key(
                        Index::create()
                            .col(Attendance::MemberId)
                            .col(Attendance::EventId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_member_id")
                            .from(Attendance::Table, Attendance::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_event_id")
                            .from(Attendance::Table, Attendance::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    MemberId,
    EventId,
    Status,
}
