use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::member::MemberDto;

/// A member's status for one semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatusDto {
    #[serde(rename = "brotherID")]
    pub brother_id: i32,
    #[serde(rename = "semesterID")]
    pub semester_id: i32,
    pub semester_label: String,
    pub status: String,
}

/// One line of a member's status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SemesterStatusDto {
    #[serde(rename = "semesterID")]
    pub semester_id: i32,
    pub semester_label: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusHistoryDto {
    pub brother: MemberDto,
    pub statuses: Vec<SemesterStatusDto>,
}

/// One member's line on a semester roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntryDto {
    #[serde(rename = "brotherID")]
    pub brother_id: i32,
    pub roll_call: i32,
    pub first_name: String,
    pub last_name: String,
    pub major: Option<String>,
    pub status: String,
    pub semester_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateStatusDto {
    #[serde(rename = "brotherID")]
    pub brother_id: i32,
    #[serde(rename = "semesterID")]
    pub semester_id: i32,
    pub status: String,
}

/// Body naming a semester and status, used under `/api/brothers/{id}/statuses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SemesterStatusBodyDto {
    #[serde(rename = "semesterID")]
    pub semester_id: i32,
    pub status: String,
}

/// Body naming a member and status, used under `/api/semesters/{label}/statuses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberStatusBodyDto {
    #[serde(rename = "brotherID")]
    pub brother_id: i32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberRefDto {
    #[serde(rename = "brotherID")]
    pub brother_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusValueDto {
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RosterQuery {
    /// Only list members holding this status in the semester.
    pub status: Option<String>,
}
