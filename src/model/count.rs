use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LabelCountDto {
    pub label: String,
    pub count: i64,
}

/// Single total, as returned by the member count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CountDto {
    pub count: u64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberCountQuery {
    /// Only count members currently holding this status.
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusCountQuery {
    /// Only count status rows with this label.
    pub status: Option<String>,
    /// Only count rows of the semester with this label.
    pub semester: Option<String>,
}
