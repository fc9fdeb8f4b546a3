use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::model::{
    count::LabelCount,
    status::{MemberStatus, RosterEntry, SetStatusParams},
};

pub struct MemberStatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberStatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Selects status rows joined to their semester under the `MemberStatus` aliases.
    fn with_semester() -> Select<entity::prelude::MemberStatus> {
        use entity::{member_status, semester};

        entity::prelude::MemberStatus::find()
            .select_only()
            .column_as(member_status::Column::MemberId, "member_id")
            .column_as(member_status::Column::SemesterId, "semester_id")
            .column_as(semester::Column::Label, "semester_label")
            .column_as(member_status::Column::Status, "status")
            .join(JoinType::InnerJoin, member_status::Relation::Semester.def())
    }

    /// Gets every status recorded for a member, oldest semester first
    pub async fn get_history(&self, member_id: i32) -> Result<Vec<MemberStatus>, DbErr> {
        Self::with_semester()
            .filter(entity::member_status::Column::MemberId.eq(member_id))
            .order_by_asc(entity::member_status::Column::SemesterId)
            .into_model::<MemberStatus>()
            .all(self.db)
            .await
    }

    pub async fn get_one(
        &self,
        member_id: i32,
        semester_id: i32,
    ) -> Result<Option<MemberStatus>, DbErr> {
        Self::with_semester()
            .filter(entity::member_status::Column::MemberId.eq(member_id))
            .filter(entity::member_status::Column::SemesterId.eq(semester_id))
            .into_model::<MemberStatus>()
            .one(self.db)
            .await
    }

    /// Gets the roster of one semester, joined across member, status and semester
    ///
    /// # Arguments
    /// - `semester_id`: Semester to list
    /// - `status`: Only list members holding this status when provided
    pub async fn get_roster(
        &self,
        semester_id: i32,
        status: Option<&str>,
    ) -> Result<Vec<RosterEntry>, DbErr> {
        use entity::{member, member_status, semester};

        let mut query = entity::prelude::MemberStatus::find()
            .select_only()
            .column_as(member::Column::Id, "member_id")
            .column_as(member::Column::RollCall, "roll_call")
            .column_as(member::Column::FirstName, "first_name")
            .column_as(member::Column::LastName, "last_name")
            .column_as(member::Column::Major, "major")
            .column_as(member_status::Column::Status, "status")
            .column_as(semester::Column::Label, "semester_label")
            .join(JoinType::InnerJoin, member_status::Relation::Member.def())
            .join(JoinType::InnerJoin, member_status::Relation::Semester.def())
            .filter(member_status::Column::SemesterId.eq(semester_id));

        if let Some(status) = status {
            query = query.filter(member_status::Column::Status.eq(status));
        }

        query
            .order_by_asc(member::Column::RollCall)
            .into_model::<RosterEntry>()
            .all(self.db)
            .await
    }

    pub async fn create(&self, params: SetStatusParams) -> Result<(), DbErr> {
        entity::member_status::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            semester_id: ActiveValue::Set(params.semester_id),
            status: ActiveValue::Set(params.status),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Changes the status label of an existing row
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows updated, `0` when the pair has no row
    /// - `Err(DbErr)`: Database error
    pub async fn update_status(&self, params: SetStatusParams) -> Result<u64, DbErr> {
        let result = entity::prelude::MemberStatus::update_many()
            .col_expr(
                entity::member_status::Column::Status,
                Expr::value(params.status),
            )
            .filter(entity::member_status::Column::MemberId.eq(params.member_id))
            .filter(entity::member_status::Column::SemesterId.eq(params.semester_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, member_id: i32, semester_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MemberStatus::delete_many()
            .filter(entity::member_status::Column::MemberId.eq(member_id))
            .filter(entity::member_status::Column::SemesterId.eq(semester_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts status rows grouped by semester label
    ///
    /// # Arguments
    /// - `status`: Only count rows with this status label when provided
    /// - `semester`: Only count rows of the semester with this label when provided
    pub async fn count_by_semester(
        &self,
        status: Option<&str>,
        semester: Option<&str>,
    ) -> Result<Vec<LabelCount>, DbErr> {
        use entity::{member_status, semester as semester_entity};

        let mut query = entity::prelude::MemberStatus::find()
            .select_only()
            .column_as(semester_entity::Column::Label, "label")
            .column_as(member_status::Column::MemberId.count(), "count")
            .join(JoinType::InnerJoin, member_status::Relation::Semester.def());

        if let Some(status) = status {
            query = query.filter(member_status::Column::Status.eq(status));
        }
        if let Some(semester) = semester {
            query = query.filter(semester_entity::Column::Label.eq(semester));
        }

        query
            .group_by(semester_entity::Column::Label)
            .order_by_asc(semester_entity::Column::Label)
            .into_model::<LabelCount>()
            .all(self.db)
            .await
    }
}
