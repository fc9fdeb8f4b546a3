use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::{
    config::StatusTaxonomy,
    data::member::MemberRepository,
    error::AppError,
    model::{
        count::LabelCount,
        member::{CreateMemberParams, Member, MemberField, UpdateMemberParams},
    },
    util::{deadline::with_deadline, parse::require_text},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
    statuses: &'a StatusTaxonomy,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration, statuses: &'a StatusTaxonomy) -> Self {
        Self {
            db,
            timeout,
            statuses,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        with_deadline(self.timeout, repo.get_all()).await
    }

    /// Gets a member by id
    ///
    /// # Returns
    /// - `Ok(Member)`: Member found
    /// - `Err(AppError::NotFound)`: No member with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        with_deadline(self.timeout, repo.get_by_id(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    /// Creates a member after checking required fields and the status label
    ///
    /// Nothing is written when validation fails.
    pub async fn create(&self, mut params: CreateMemberParams) -> Result<Member, AppError> {
        if params.roll_call <= 0 {
            return Err(AppError::BadRequest(
                "rollCall must be a positive number".to_string(),
            ));
        }
        params.first_name = require_text("firstName", params.first_name)?;
        params.last_name = require_text("lastName", params.last_name)?;
        self.statuses.validate(&params.status)?;

        let repo = MemberRepository::new(self.db);
        let member = with_deadline(self.timeout, repo.create(params)).await?;

        tracing::info!("Created member {} (roll call {})", member.id, member.roll_call);

        Ok(member)
    }

    /// Applies a partial update and returns the stored member
    ///
    /// # Returns
    /// - `Ok(Member)`: Member after the update
    /// - `Err(AppError::BadRequest)`: Empty patch, blank name or unknown status label
    /// - `Err(AppError::NotFound)`: No member with that id
    pub async fn update(&self, mut params: UpdateMemberParams) -> Result<Member, AppError> {
        if params.fields.is_empty() {
            return Err(AppError::BadRequest(
                "Request body contains no updatable member fields".to_string(),
            ));
        }
        let mut fields = Vec::with_capacity(params.fields.len());
        for field in params.fields {
            fields.push(match field {
                MemberField::FirstName(v) => MemberField::FirstName(require_text("firstName", v)?),
                MemberField::LastName(v) => MemberField::LastName(require_text("lastName", v)?),
                MemberField::RollCall(v) if v <= 0 => {
                    return Err(AppError::BadRequest(
                        "rollCall must be a positive number".to_string(),
                    ))
                }
                field => field,
            });
        }
        params.fields = fields;
        if let Some(status) = params.status() {
            self.statuses.validate(status)?;
        }

        let id = params.id;
        let repo = MemberRepository::new(self.db);

        let rows = with_deadline(self.timeout, repo.update(params)).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Removes the member holding a roll call; succeeds whether or not one existed
    pub async fn delete_by_roll_call(&self, roll_call: i32) -> Result<u64, AppError> {
        let repo = MemberRepository::new(self.db);

        let rows = with_deadline(self.timeout, repo.delete_by_roll_call(roll_call)).await?;
        if rows > 0 {
            tracing::info!("Removed member with roll call {}", roll_call);
        }

        Ok(rows)
    }

    /// Total number of members, narrowed to one current status when given
    pub async fn count(&self, status: Option<&str>) -> Result<u64, AppError> {
        let repo = MemberRepository::new(self.db);

        with_deadline(self.timeout, repo.count(status)).await
    }

    pub async fn count_by_major(&self) -> Result<Vec<LabelCount>, AppError> {
        let repo = MemberRepository::new(self.db);

        with_deadline(self.timeout, repo.count_by_major()).await
    }
}
