use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::model::attendance::{AttendanceParams, AttendanceRow, EventAttendanceRow};

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Selects attendance joined to member, event and category under the
    /// `AttendanceRow` column aliases.
    fn joined() -> Select<entity::prelude::Attendance> {
        use entity::{attendance, event, event_category, member};

        entity::prelude::Attendance::find()
            .select_only()
            .column_as(attendance::Column::MemberId, "member_id")
            .column_as(attendance::Column::EventId, "event_id")
            .column_as(attendance::Column::Status, "status")
            .column_as(member::Column::RollCall, "roll_call")
            .column_as(member::Column::FirstName, "first_name")
            .column_as(member::Column::LastName, "last_name")
            .column_as(event::Column::Name, "event_name")
            .column_as(event::Column::Location, "event_location")
            .column_as(event::Column::Date, "event_date")
            .column_as(event_category::Column::Name, "category_name")
            .join(JoinType::InnerJoin, attendance::Relation::Member.def())
            .join(JoinType::InnerJoin, attendance::Relation::Event.def())
            .join(JoinType::InnerJoin, event::Relation::EventCategory.def())
    }

    /// Gets every attendance record, ordered by event then roll call
    pub async fn get_all(&self) -> Result<Vec<AttendanceRow>, DbErr> {
        Self::joined()
            .order_by_asc(entity::attendance::Column::EventId)
            .order_by_asc(entity::member::Column::RollCall)
            .into_model::<AttendanceRow>()
            .all(self.db)
            .await
    }

    /// Gets the attendance records of one event, ordered by roll call
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<AttendanceRow>, DbErr> {
        Self::joined()
            .filter(entity::attendance::Column::EventId.eq(event_id))
            .order_by_asc(entity::member::Column::RollCall)
            .into_model::<AttendanceRow>()
            .all(self.db)
            .await
    }

    /// Gets one joined attendance record by its composite key
    pub async fn get_one(
        &self,
        member_id: i32,
        event_id: i32,
    ) -> Result<Option<AttendanceRow>, DbErr> {
        Self::joined()
            .filter(entity::attendance::Column::MemberId.eq(member_id))
            .filter(entity::attendance::Column::EventId.eq(event_id))
            .into_model::<AttendanceRow>()
            .one(self.db)
            .await
    }

    /// Gets the roster lines of one event joined to member names only
    pub async fn get_event_roster(&self, event_id: i32) -> Result<Vec<EventAttendanceRow>, DbErr> {
        use entity::{attendance, member};

        entity::prelude::Attendance::find()
            .select_only()
            .column_as(attendance::Column::MemberId, "member_id")
            .column_as(attendance::Column::EventId, "event_id")
            .column_as(attendance::Column::Status, "status")
            .column_as(member::Column::RollCall, "roll_call")
            .column_as(member::Column::FirstName, "first_name")
            .column_as(member::Column::LastName, "last_name")
            .join(JoinType::InnerJoin, attendance::Relation::Member.def())
            .filter(attendance::Column::EventId.eq(event_id))
            .order_by_asc(member::Column::RollCall)
            .into_model::<EventAttendanceRow>()
            .all(self.db)
            .await
    }

    pub async fn create(&self, params: AttendanceParams) -> Result<(), DbErr> {
        entity::attendance::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            event_id: ActiveValue::Set(params.event_id),
            status: ActiveValue::Set(params.status.as_str().to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Changes the status of an existing attendance row
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows updated, `0` when the pair has no row
    /// - `Err(DbErr)`: Database error
    pub async fn update_status(&self, params: AttendanceParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Attendance::update_many()
            .col_expr(
                entity::attendance::Column::Status,
                Expr::value(params.status.as_str()),
            )
            .filter(entity::attendance::Column::MemberId.eq(params.member_id))
            .filter(entity::attendance::Column::EventId.eq(params.event_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an attendance row by its composite key
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows deleted, `0` when the pair has no row
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, member_id: i32, event_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Attendance::delete_many()
            .filter(entity::attendance::Column::MemberId.eq(member_id))
            .filter(entity::attendance::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
