use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SemesterDto {
    #[serde(rename = "semesterID")]
    pub semester_id: i32,
    pub semester_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateSemesterDto {
    /// Human-readable term label, e.g. `Fall 2023`.
    #[serde(alias = "semesterLabel")]
    pub semester: String,
}
