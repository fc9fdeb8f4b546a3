use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::{
    model::attendance::AttendanceStatus,
    server::{
        data::{attendance::AttendanceRepository, event::EventRepository, member::MemberRepository},
        error::AppError,
        model::attendance::{AttendanceParams, AttendanceRecord, AttendanceRow},
        util::deadline::with_deadline,
    },
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    pub async fn get_all(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        let repo = AttendanceRepository::new(self.db);

        let rows = with_deadline(self.timeout, repo.get_all()).await?;

        into_records(rows)
    }

    /// Gets the records of one event; an event without records yields an empty list
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<AttendanceRecord>, AppError> {
        let repo = AttendanceRepository::new(self.db);

        let rows = with_deadline(self.timeout, repo.get_by_event(event_id)).await?;

        into_records(rows)
    }

    /// Records a member's attendance at an event
    ///
    /// # Returns
    /// - `Ok(AttendanceRecord)`: The new record joined to member and event
    /// - `Err(AppError::NotFound)`: Unknown member or event
    /// - `Err(AppError::DbErr)`: The pair already has a record
    pub async fn record(&self, params: AttendanceParams) -> Result<AttendanceRecord, AppError> {
        let member_repo = MemberRepository::new(self.db);
        if with_deadline(self.timeout, member_repo.get_by_id(params.member_id))
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Member {} not found",
                params.member_id
            )));
        }
        self.require_event(params.event_id).await?;

        let repo = AttendanceRepository::new(self.db);
        with_deadline(self.timeout, repo.create(params)).await?;

        self.get_one(params.member_id, params.event_id).await
    }

    /// Records attendance for the member holding a roll call
    pub async fn record_by_roll_call(
        &self,
        event_id: i32,
        roll_call: i32,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, AppError> {
        let member_repo = MemberRepository::new(self.db);
        let member = with_deadline(self.timeout, member_repo.find_by_roll_call(roll_call))
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No member with roll call {}", roll_call))
            })?;

        self.record(AttendanceParams {
            member_id: member.id,
            event_id,
            status,
        })
        .await
    }

    /// Changes the status of an existing record
    ///
    /// # Returns
    /// - `Ok(AttendanceRecord)`: Record after the update
    /// - `Err(AppError::NotFound)`: The pair has no record
    pub async fn update(&self, params: AttendanceParams) -> Result<AttendanceRecord, AppError> {
        let repo = AttendanceRepository::new(self.db);

        let rows = with_deadline(self.timeout, repo.update_status(params)).await?;
        if rows == 0 {
            return Err(not_found(params.member_id, params.event_id));
        }

        self.get_one(params.member_id, params.event_id).await
    }

    /// Deletes a record; succeeds whether or not the pair had one
    pub async fn delete(&self, member_id: i32, event_id: i32) -> Result<u64, AppError> {
        let repo = AttendanceRepository::new(self.db);

        with_deadline(self.timeout, repo.delete(member_id, event_id)).await
    }

    async fn get_one(&self, member_id: i32, event_id: i32) -> Result<AttendanceRecord, AppError> {
        let repo = AttendanceRepository::new(self.db);

        let row = with_deadline(self.timeout, repo.get_one(member_id, event_id))
            .await?
            .ok_or_else(|| not_found(member_id, event_id))?;

        AttendanceRecord::from_row(row)
    }

    async fn require_event(&self, event_id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        if with_deadline(self.timeout, repo.exists(event_id)).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Event {} not found", event_id)))
        }
    }
}

fn into_records(rows: Vec<AttendanceRow>) -> Result<Vec<AttendanceRecord>, AppError> {
    rows.into_iter().map(AttendanceRecord::from_row).collect()
}

fn not_found(member_id: i32, event_id: i32) -> AppError {
    AppError::NotFound(format!(
        "No attendance record for member {} at event {}",
        member_id, event_id
    ))
}
