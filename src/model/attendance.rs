use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Excused,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Excused => "Excused",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Present" => Some(Self::Present),
            "Absent" => Some(Self::Absent),
            "Excused" => Some(Self::Excused),
            _ => None,
        }
    }
}

/// Attendance row joined to its member, event and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordDto {
    #[serde(rename = "brotherID")]
    pub brother_id: i32,
    #[serde(rename = "eventID")]
    pub event_id: i32,
    pub attendance_status: AttendanceStatus,
    pub roll_call: i32,
    pub first_name: String,
    pub last_name: String,
    pub event_name: String,
    pub event_location: String,
    pub event_date: NaiveDate,
    pub event_category: String,
}

/// One member's line on an event roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendanceDto {
    #[serde(rename = "brotherID")]
    pub brother_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub roll_call: i32,
    pub attendance_status: AttendanceStatus,
    #[serde(rename = "eventID")]
    pub event_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    #[serde(rename = "brotherID")]
    pub brother_id: i32,
    #[serde(rename = "eventID")]
    pub event_id: i32,
    pub attendance_status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceKeyDto {
    #[serde(rename = "brotherID")]
    pub brother_id: i32,
    #[serde(rename = "eventID")]
    pub event_id: i32,
}

/// Body of `POST /api/events/{eventID}/attendance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RollCallAttendanceDto {
    pub roll_call: i32,
    pub attendance_status: AttendanceStatus,
}
