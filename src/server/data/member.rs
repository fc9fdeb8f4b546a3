use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    count::LabelCount,
    member::{CreateMemberParams, Member, MemberField, UpdateMemberParams},
};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every member ordered by roll call
    pub async fn get_all(&self) -> Result<Vec<Member>, DbErr> {
        let members = entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::RollCall)
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(Member::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let member = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(member.map(Member::from_entity))
    }

    pub async fn find_by_roll_call(&self, roll_call: i32) -> Result<Option<Member>, DbErr> {
        let member = entity::prelude::Member::find()
            .filter(entity::member::Column::RollCall.eq(roll_call))
            .one(self.db)
            .await?;

        Ok(member.map(Member::from_entity))
    }

    /// Inserts a new member
    ///
    /// # Returns
    /// - `Ok(Member)`: The created member with its generated id
    /// - `Err(DbErr)`: Database error, including a duplicate roll call
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, DbErr> {
        let member = entity::member::ActiveModel {
            roll_call: ActiveValue::Set(params.roll_call),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            major: ActiveValue::Set(params.major),
            status: ActiveValue::Set(params.status),
            class_name: ActiveValue::Set(params.class_name),
            email: ActiveValue::Set(params.email),
            phone_number: ActiveValue::Set(params.phone_number),
            bad_standing: ActiveValue::Set(params.bad_standing),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(member))
    }

    /// Applies a sparse update, writing only the columns present in the patch
    ///
    /// Every value is bound as a statement parameter.
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows updated, `0` when the member does not exist
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, params: UpdateMemberParams) -> Result<u64, DbErr> {
        use entity::member::Column;

        let mut update = entity::prelude::Member::update_many();
        for field in params.fields {
            update = match field {
                MemberField::RollCall(v) => update.col_expr(Column::RollCall, Expr::value(v)),
                MemberField::FirstName(v) => update.col_expr(Column::FirstName, Expr::value(v)),
                MemberField::LastName(v) => update.col_expr(Column::LastName, Expr::value(v)),
                MemberField::Major(v) => update.col_expr(Column::Major, Expr::value(v)),
                MemberField::Status(v) => update.col_expr(Column::Status, Expr::value(v)),
                MemberField::ClassName(v) => update.col_expr(Column::ClassName, Expr::value(v)),
                MemberField::Email(v) => update.col_expr(Column::Email, Expr::value(v)),
                MemberField::PhoneNumber(v) => {
                    update.col_expr(Column::PhoneNumber, Expr::value(v))
                }
                MemberField::BadStanding(v) => {
                    update.col_expr(Column::BadStanding, Expr::value(v))
                }
            };
        }

        let result = update
            .filter(Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the member holding the given roll call
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows deleted, `0` when no member holds the roll call
    /// - `Err(DbErr)`: Database error
    pub async fn delete_by_roll_call(&self, roll_call: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Member::delete_many()
            .filter(entity::member::Column::RollCall.eq(roll_call))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts members, optionally only those currently holding `status`
    pub async fn count(&self, status: Option<&str>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Member::find();
        if let Some(status) = status {
            query = query.filter(entity::member::Column::Status.eq(status));
        }

        query.count(self.db).await
    }

    /// Counts members grouped by major, skipping members without one
    pub async fn count_by_major(&self) -> Result<Vec<LabelCount>, DbErr> {
        use entity::member::Column;

        entity::prelude::Member::find()
            .select_only()
            .column_as(Column::Major, "label")
            .column_as(Column::Id.count(), "count")
            .filter(Column::Major.is_not_null())
            .group_by(Column::Major)
            .order_by_asc(Column::Major)
            .into_model::<LabelCount>()
            .all(self.db)
            .await
    }
}
