use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        count::{CountDto, LabelCountDto, MemberCountQuery, StatusCountQuery},
    },
    server::{
        error::AppError,
        model::count::LabelCount,
        service::{member::MemberService, status::StatusService},
        state::AppState,
        util::{extract::ApiQuery, respond::ok},
    },
};

/// Tag for grouping aggregate endpoints in OpenAPI documentation
pub static COUNT_TAG: &str = "count";

/// Count members, optionally only those currently holding a status.
#[utoipa::path(
    get,
    path = "/api/brothers/count",
    tag = COUNT_TAG,
    params(MemberCountQuery),
    responses(
        (status = 200, description = "Total member count", body = ApiResponse<CountDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn count_members(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MemberCountQuery>,
) -> Result<impl IntoResponse, AppError> {
    let count = MemberService::new(&state.db, state.db_timeout, &state.statuses)
        .count(query.status.as_deref())
        .await?;

    Ok(ok(CountDto { count }))
}

/// Count members grouped by major. Members without a major are left out.
#[utoipa::path(
    get,
    path = "/api/brothers/majors/count",
    tag = COUNT_TAG,
    responses(
        (status = 200, description = "Member count per major", body = ApiResponse<Vec<LabelCountDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn count_majors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let counts = MemberService::new(&state.db, state.db_timeout, &state.statuses)
        .count_by_major()
        .await?;

    Ok(ok(into_dtos(counts)))
}

/// Count semester status rows grouped by semester label.
#[utoipa::path(
    get,
    path = "/api/statuses/count",
    tag = COUNT_TAG,
    params(StatusCountQuery),
    responses(
        (status = 200, description = "Status rows per semester", body = ApiResponse<Vec<LabelCountDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn count_statuses(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<StatusCountQuery>,
) -> Result<impl IntoResponse, AppError> {
    let counts = StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .count(query.status.as_deref(), query.semester.as_deref())
        .await?;

    Ok(ok(into_dtos(counts)))
}

fn into_dtos(counts: Vec<LabelCount>) -> Vec<LabelCountDto> {
    counts.into_iter().map(LabelCount::into_dto).collect()
}
