use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        status::{
            CreateStatusDto, MemberStatusDto, SemesterStatusBodyDto, StatusHistoryDto,
            StatusValueDto,
        },
    },
    server::{
        error::AppError,
        model::status::SetStatusParams,
        service::status::StatusService,
        state::AppState,
        util::{
            extract::{ApiJson, ApiPath},
            respond::{created, done, ok},
        },
    },
};

/// Tag for grouping member status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// List the configured member status labels.
///
/// The list comes from configuration and never from stored rows.
#[utoipa::path(
    get,
    path = "/api/statuses",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Configured status labels", body = ApiResponse<Vec<String>>)
    ),
)]
pub async fn get_statuses(State(state): State<AppState>) -> impl IntoResponse {
    ok(StatusService::new(&state.db, state.db_timeout, &state.statuses).taxonomy())
}

#[utoipa::path(
    post,
    path = "/api/statuses",
    tag = STATUS_TAG,
    request_body = CreateStatusDto,
    responses(
        (status = 201, description = "Status recorded", body = ApiResponse<MemberStatusDto>),
        (status = 400, description = "Unknown status label", body = MessageDto),
        (status = 404, description = "Unknown member or semester", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_status(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .create(SetStatusParams {
            member_id: payload.brother_id,
            semester_id: payload.semester_id,
            status: payload.status,
        })
        .await?;

    Ok(created(status.into_dto()))
}

/// Get a member together with their status in every recorded semester.
///
/// # Returns
/// - `200 OK` - `{brother, statuses}`
/// - `404 Not Found` - No member with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/brothers/{id}/statuses",
    tag = STATUS_TAG,
    params(
        ("id" = i32, Path, description = "Member id (brotherID)")
    ),
    responses(
        (status = 200, description = "Member and status history", body = ApiResponse<StatusHistoryDto>),
        (status = 404, description = "Member not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_member_statuses(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let history = StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .history(id)
        .await?;

    Ok(ok(history.into_dto()))
}

#[utoipa::path(
    post,
    path = "/api/brothers/{id}/statuses",
    tag = STATUS_TAG,
    params(
        ("id" = i32, Path, description = "Member id (brotherID)")
    ),
    request_body = SemesterStatusBodyDto,
    responses(
        (status = 201, description = "Status recorded", body = ApiResponse<MemberStatusDto>),
        (status = 400, description = "Unknown status label", body = MessageDto),
        (status = 404, description = "Unknown member or semester", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_member_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<SemesterStatusBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .create(SetStatusParams {
            member_id: id,
            semester_id: payload.semester_id,
            status: payload.status,
        })
        .await?;

    Ok(created(status.into_dto()))
}

/// Change a member's status for the semester named in the body.
#[utoipa::path(
    patch,
    path = "/api/brothers/{id}/statuses",
    tag = STATUS_TAG,
    params(
        ("id" = i32, Path, description = "Member id (brotherID)")
    ),
    request_body = SemesterStatusBodyDto,
    responses(
        (status = 200, description = "Status after the update", body = ApiResponse<MemberStatusDto>),
        (status = 400, description = "Unknown status label", body = MessageDto),
        (status = 404, description = "No status row for the pair", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_member_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<SemesterStatusBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .update(SetStatusParams {
            member_id: id,
            semester_id: payload.semester_id,
            status: payload.status,
        })
        .await?;

    Ok(ok(status.into_dto()))
}

/// Change a member's status for the semester named in the path.
#[utoipa::path(
    patch,
    path = "/api/brothers/{id}/statuses/{semester_id}",
    tag = STATUS_TAG,
    params(
        ("id" = i32, Path, description = "Member id (brotherID)"),
        ("semester_id" = i32, Path, description = "Semester id")
    ),
    request_body = StatusValueDto,
    responses(
        (status = 200, description = "Status after the update", body = ApiResponse<MemberStatusDto>),
        (status = 400, description = "Unknown status label", body = MessageDto),
        (status = 404, description = "No status row for the pair", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_member_semester_status(
    State(state): State<AppState>,
    ApiPath((id, semester_id)): ApiPath<(i32, i32)>,
    ApiJson(payload): ApiJson<StatusValueDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .update(SetStatusParams {
            member_id: id,
            semester_id,
            status: payload.status,
        })
        .await?;

    Ok(ok(status.into_dto()))
}

/// Remove a member's status for a semester. Succeeds whether or not one existed.
#[utoipa::path(
    delete,
    path = "/api/brothers/{id}/statuses/{semester_id}",
    tag = STATUS_TAG,
    params(
        ("id" = i32, Path, description = "Member id (brotherID)"),
        ("semester_id" = i32, Path, description = "Semester id")
    ),
    responses(
        (status = 200, description = "Status removed", body = MessageDto),
        (status = 400, description = "Malformed id", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_member_status(
    State(state): State<AppState>,
    ApiPath((id, semester_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .delete(id, semester_id)
        .await?;

    Ok(done(format!(
        "Status of member {} in semester {} removed",
        id, semester_id
    )))
}
