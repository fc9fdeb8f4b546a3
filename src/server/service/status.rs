use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::{
    config::StatusTaxonomy,
    data::member_status::MemberStatusRepository,
    error::AppError,
    model::{
        count::LabelCount,
        status::{MemberStatus, RosterEntry, SetStatusParams, StatusHistory},
    },
    service::{member::MemberService, semester::SemesterService},
    util::deadline::with_deadline,
};

/// Semester-scoped member statuses.
///
/// Every write validates the label against the configured taxonomy before touching the
/// database.
pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
    statuses: &'a StatusTaxonomy,
}

impl<'a> StatusService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration, statuses: &'a StatusTaxonomy) -> Self {
        Self {
            db,
            timeout,
            statuses,
        }
    }

    /// Configured status labels; never read from the database
    pub fn taxonomy(&self) -> Vec<String> {
        self.statuses.labels().to_vec()
    }

    /// Gets a member with their status in every recorded semester
    pub async fn history(&self, member_id: i32) -> Result<StatusHistory, AppError> {
        let member = self.members().get_by_id(member_id).await?;

        let repo = MemberStatusRepository::new(self.db);
        let statuses = with_deadline(self.timeout, repo.get_history(member_id)).await?;

        Ok(StatusHistory { member, statuses })
    }

    /// Records a member's status for a semester
    ///
    /// # Returns
    /// - `Ok(MemberStatus)`: The new row with its semester label
    /// - `Err(AppError::BadRequest)`: Label outside the taxonomy
    /// - `Err(AppError::NotFound)`: Unknown member or semester
    pub async fn create(&self, params: SetStatusParams) -> Result<MemberStatus, AppError> {
        self.statuses.validate(&params.status)?;
        self.members().get_by_id(params.member_id).await?;
        self.semesters().get_by_id(params.semester_id).await?;

        let (member_id, semester_id) = (params.member_id, params.semester_id);
        let repo = MemberStatusRepository::new(self.db);
        with_deadline(self.timeout, repo.create(params)).await?;

        self.get_one(member_id, semester_id).await
    }

    /// Changes the label of an existing status row
    ///
    /// # Returns
    /// - `Ok(MemberStatus)`: Row after the update
    /// - `Err(AppError::BadRequest)`: Label outside the taxonomy
    /// - `Err(AppError::NotFound)`: The pair has no row
    pub async fn update(&self, params: SetStatusParams) -> Result<MemberStatus, AppError> {
        self.statuses.validate(&params.status)?;

        let (member_id, semester_id) = (params.member_id, params.semester_id);
        let repo = MemberStatusRepository::new(self.db);
        let rows = with_deadline(self.timeout, repo.update_status(params)).await?;
        if rows == 0 {
            return Err(not_found(member_id, semester_id));
        }

        self.get_one(member_id, semester_id).await
    }

    /// Deletes a status row; succeeds whether or not the pair had one
    pub async fn delete(&self, member_id: i32, semester_id: i32) -> Result<u64, AppError> {
        let repo = MemberStatusRepository::new(self.db);

        with_deadline(self.timeout, repo.delete(member_id, semester_id)).await
    }

    /// Lists a semester's roster, optionally limited to one status
    pub async fn roster(
        &self,
        semester_label: &str,
        status: Option<&str>,
    ) -> Result<Vec<RosterEntry>, AppError> {
        let semester = self.semesters().resolve(semester_label).await?;

        let repo = MemberStatusRepository::new(self.db);
        with_deadline(self.timeout, repo.get_roster(semester.id, status)).await
    }

    pub async fn create_in_semester(
        &self,
        semester_label: &str,
        member_id: i32,
        status: String,
    ) -> Result<MemberStatus, AppError> {
        self.statuses.validate(&status)?;
        let semester = self.semesters().resolve(semester_label).await?;

        self.create(SetStatusParams {
            member_id,
            semester_id: semester.id,
            status,
        })
        .await
    }

    pub async fn update_in_semester(
        &self,
        semester_label: &str,
        member_id: i32,
        status: String,
    ) -> Result<MemberStatus, AppError> {
        self.statuses.validate(&status)?;
        let semester = self.semesters().resolve(semester_label).await?;

        self.update(SetStatusParams {
            member_id,
            semester_id: semester.id,
            status,
        })
        .await
    }

    pub async fn delete_in_semester(
        &self,
        semester_label: &str,
        member_id: i32,
    ) -> Result<u64, AppError> {
        let semester = self.semesters().resolve(semester_label).await?;

        self.delete(member_id, semester.id).await
    }

    /// Counts status rows per semester label
    pub async fn count(
        &self,
        status: Option<&str>,
        semester: Option<&str>,
    ) -> Result<Vec<LabelCount>, AppError> {
        let repo = MemberStatusRepository::new(self.db);

        with_deadline(self.timeout, repo.count_by_semester(status, semester)).await
    }

    async fn get_one(&self, member_id: i32, semester_id: i32) -> Result<MemberStatus, AppError> {
        let repo = MemberStatusRepository::new(self.db);

        with_deadline(self.timeout, repo.get_one(member_id, semester_id))
            .await?
            .ok_or_else(|| not_found(member_id, semester_id))
    }

    fn members(&self) -> MemberService<'a> {
        MemberService::new(self.db, self.timeout, self.statuses)
    }

    fn semesters(&self) -> SemesterService<'a> {
        SemesterService::new(self.db, self.timeout)
    }
}

fn not_found(member_id: i32, semester_id: i32) -> AppError {
    AppError::NotFound(format!(
        "No status for member {} in semester {}",
        member_id, semester_id
    ))
}
