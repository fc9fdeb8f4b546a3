//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// Defaults come from `fixture::member` with a unique roll call and first name
/// so several members can be created in one test.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db)
///     .roll_call(7)
///     .status("Co-op")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::member::Model,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values from fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::member::entity_builder()
            .roll_call(1000 + id as i32)
            .first_name(format!("Member {}", id))
            .build();

        Self { db, entity }
    }

    pub fn roll_call(mut self, roll_call: i32) -> Self {
        self.entity.roll_call = roll_call;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    pub fn major(mut self, major: Option<&str>) -> Self {
        self.entity.major = major.map(str::to_string);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    pub fn email(mut self, email: Option<&str>) -> Self {
        self.entity.email = email.map(str::to_string);
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let entity = self.entity;
        entity::member::ActiveModel {
            roll_call: ActiveValue::Set(entity.roll_call),
            first_name: ActiveValue::Set(entity.first_name),
            last_name: ActiveValue::Set(entity.last_name),
            major: ActiveValue::Set(entity.major),
            status: ActiveValue::Set(entity.status),
            class_name: ActiveValue::Set(entity.class_name),
            email: ActiveValue::Set(entity.email),
            phone_number: ActiveValue::Set(entity.phone_number),
            bad_standing: ActiveValue::Set(entity.bad_standing),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
