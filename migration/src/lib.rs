pub use sea_orm_migration::prelude::*;

mod m20240701_000001_create_member_table;
mod m20240701_000002_create_event_category_table;
mod m20240701_000003_create_event_table;
mod m20240701_000004_create_attendance_table;
mod m20240815_000005_create_semester_table;
mod m20240815_000006_create_member_status_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240701_000001_create_member_table::Migration),
            Box::new(m20240701_000002_create_event_category_table::Migration),
            Box::new(m20240701_000003_create_event_table::Migration),
            Box::new(m20240701_000004_create_attendance_table::Migration),
            Box::new(m20240815_000005_create_semester_table::Migration),
            Box::new(m20240815_000006_create_member_status_table::Migration),
        ]
    }
}
