//! Attendance domain models and parameters.
//!
//! Attendance rows store only the member id, event id and a status string. Every read
//! joins back to the member, event and category tables; the joined rows are mapped by
//! column alias into the `*Row` structs below and then converted into domain models,
//! which is where the stored status string is parsed.

use chrono::NaiveDate;
use sea_orm::FromQueryResult;

use crate::{
    model::attendance::{
        AttendanceDto, AttendanceRecordDto, AttendanceStatus, EventAttendanceDto,
    },
    server::{error::AppError, util::parse::parse_attendance_status},
};

/// Attendance row joined to member, event and category.
#[derive(Debug, Clone, FromQueryResult)]
pub struct AttendanceRow {
    pub member_id: i32,
    pub event_id: i32,
    pub status: String,
    pub roll_call: i32,
    pub first_name: String,
    pub last_name: String,
    pub event_name: String,
    pub event_location: String,
    pub event_date: NaiveDate,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub member_id: i32,
    pub event_id: i32,
    pub status: AttendanceStatus,
    pub roll_call: i32,
    pub first_name: String,
    pub last_name: String,
    pub event_name: String,
    pub event_location: String,
    pub event_date: NaiveDate,
    pub category_name: String,
}

impl AttendanceRecord {
    /// Converts a joined row, parsing the stored status.
    pub fn from_row(row: AttendanceRow) -> Result<Self, AppError> {
        let status = parse_attendance_status(row.status, row.member_id, row.event_id)?;

        Ok(Self {
            member_id: row.member_id,
            event_id: row.event_id,
            status,
            roll_call: row.roll_call,
            first_name: row.first_name,
            last_name: row.last_name,
            event_name: row.event_name,
            event_location: row.event_location,
            event_date: row.event_date,
            category_name: row.category_name,
        })
    }

    pub fn into_dto(self) -> AttendanceRecordDto {
        AttendanceRecordDto {
            brother_id: self.member_id,
            event_id: self.event_id,
            attendance_status: self.status,
            roll_call: self.roll_call,
            first_name: self.first_name,
            last_name: self.last_name,
            event_name: self.event_name,
            event_location: self.event_location,
            event_date: self.event_date,
            event_category: self.category_name,
        }
    }
}

/// Attendance row joined to its member only, used for event rosters.
#[derive(Debug, Clone, FromQueryResult)]
pub struct EventAttendanceRow {
    pub member_id: i32,
    pub event_id: i32,
    pub status: String,
    pub roll_call: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventAttendance {
    pub member_id: i32,
    pub event_id: i32,
    pub status: AttendanceStatus,
    pub roll_call: i32,
    pub first_name: String,
    pub last_name: String,
}

impl EventAttendance {
    pub fn from_row(row: EventAttendanceRow) -> Result<Self, AppError> {
        let status = parse_attendance_status(row.status, row.member_id, row.event_id)?;

        Ok(Self {
            member_id: row.member_id,
            event_id: row.event_id,
            status,
            roll_call: row.roll_call,
            first_name: row.first_name,
            last_name: row.last_name,
        })
    }

    pub fn into_dto(self) -> EventAttendanceDto {
        EventAttendanceDto {
            brother_id: self.member_id,
            first_name: self.first_name,
            last_name: self.last_name,
            roll_call: self.roll_call,
            attendance_status: self.status,
            event_id: self.event_id,
        }
    }
}

/// Key and status of one attendance row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceParams {
    pub member_id: i32,
    pub event_id: i32,
    pub status: AttendanceStatus,
}

impl AttendanceParams {
    pub fn from_dto(dto: AttendanceDto) -> Self {
        Self {
            member_id: dto.brother_id,
            event_id: dto.event_id,
            status: dto.attendance_status,
        }
    }
}
