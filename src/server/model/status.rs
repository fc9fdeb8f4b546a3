//! Semester status domain models and parameters.

use sea_orm::FromQueryResult;

use crate::{
    model::status::{MemberStatusDto, RosterEntryDto, SemesterStatusDto, StatusHistoryDto},
    server::model::member::Member,
};

/// A member's status for one semester, joined to the semester label.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct MemberStatus {
    pub member_id: i32,
    pub semester_id: i32,
    pub semester_label: String,
    pub status: String,
}

impl MemberStatus {
    pub fn into_dto(self) -> MemberStatusDto {
        MemberStatusDto {
            brother_id: self.member_id,
            semester_id: self.semester_id,
            semester_label: self.semester_label,
            status: self.status,
        }
    }

    pub fn into_history_dto(self) -> SemesterStatusDto {
        SemesterStatusDto {
            semester_id: self.semester_id,
            semester_label: self.semester_label,
            status: self.status,
        }
    }
}

/// A member with every semester status recorded for them.
#[derive(Debug, Clone)]
pub struct StatusHistory {
    pub member: Member,
    pub statuses: Vec<MemberStatus>,
}

impl StatusHistory {
    pub fn into_dto(self) -> StatusHistoryDto {
        StatusHistoryDto {
            brother: self.member.into_dto(),
            statuses: self
                .statuses
                .into_iter()
                .map(MemberStatus::into_history_dto)
                .collect(),
        }
    }
}

/// One member's line on a semester roster, joined across member, status and semester.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct RosterEntry {
    pub member_id: i32,
    pub roll_call: i32,
    pub first_name: String,
    pub last_name: String,
    pub major: Option<String>,
    pub status: String,
    pub semester_label: String,
}

impl RosterEntry {
    pub fn into_dto(self) -> RosterEntryDto {
        RosterEntryDto {
            brother_id: self.member_id,
            roll_call: self.roll_call,
            first_name: self.first_name,
            last_name: self.last_name,
            major: self.major,
            status: self.status,
            semester_label: self.semester_label,
        }
    }
}

/// Key and label of one status row.
#[derive(Debug, Clone, PartialEq)]
pub struct SetStatusParams {
    pub member_id: i32,
    pub semester_id: i32,
    pub status: String,
}
