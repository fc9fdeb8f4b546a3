use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        semester::{CreateSemesterDto, SemesterDto},
        status::{MemberRefDto, MemberStatusBodyDto, MemberStatusDto, RosterEntryDto, RosterQuery},
    },
    server::{
        error::AppError,
        service::{semester::SemesterService, status::StatusService},
        state::AppState,
        util::{
            extract::{ApiJson, ApiPath, ApiQuery},
            respond::{created, done, ok},
        },
    },
};

/// Tag for grouping semester endpoints in OpenAPI documentation
pub static SEMESTER_TAG: &str = "semester";

#[utoipa::path(
    get,
    path = "/api/semesters",
    tag = SEMESTER_TAG,
    responses(
        (status = 200, description = "Every semester", body = ApiResponse<Vec<SemesterDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_semesters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let semesters = SemesterService::new(&state.db, state.db_timeout)
        .get_all()
        .await?;

    Ok(ok(semesters
        .into_iter()
        .map(|s| s.into_dto())
        .collect::<Vec<_>>()))
}

/// Create a semester from its label, e.g. `Fall 2023`.
#[utoipa::path(
    post,
    path = "/api/semesters",
    tag = SEMESTER_TAG,
    request_body = CreateSemesterDto,
    responses(
        (status = 201, description = "Semester created", body = ApiResponse<SemesterDto>),
        (status = 400, description = "Blank or missing label", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_semester(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateSemesterDto>,
) -> Result<impl IntoResponse, AppError> {
    let semester = SemesterService::new(&state.db, state.db_timeout)
        .create(payload.semester)
        .await?;

    Ok(created(semester.into_dto()))
}

/// List the roster of a semester, optionally limited to one status.
///
/// # Returns
/// - `200 OK` - Members with a status row in the semester
/// - `404 Not Found` - Unknown semester label
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/semesters/{label}/statuses",
    tag = SEMESTER_TAG,
    params(
        ("label" = String, Path, description = "Semester label"),
        RosterQuery
    ),
    responses(
        (status = 200, description = "Semester roster", body = ApiResponse<Vec<RosterEntryDto>>),
        (status = 404, description = "Unknown semester", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_semester_roster(
    State(state): State<AppState>,
    ApiPath(label): ApiPath<String>,
    ApiQuery(query): ApiQuery<RosterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let roster = StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .roster(&label, query.status.as_deref())
        .await?;

    Ok(ok(roster
        .into_iter()
        .map(|r| r.into_dto())
        .collect::<Vec<_>>()))
}

/// Record a member's status in the semester with this label.
///
/// # Returns
/// - `201 Created` - The new status row
/// - `400 Bad Request` - Status outside the configured labels
/// - `404 Not Found` - Unknown semester or member
/// - `500 Internal Server Error` - Database error, including a duplicate row
#[utoipa::path(
    post,
    path = "/api/semesters/{label}/statuses",
    tag = SEMESTER_TAG,
    params(
        ("label" = String, Path, description = "Semester label")
    ),
    request_body = MemberStatusBodyDto,
    responses(
        (status = 201, description = "Status recorded", body = ApiResponse<MemberStatusDto>),
        (status = 400, description = "Unknown status label", body = MessageDto),
        (status = 404, description = "Unknown semester or member", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_semester_status(
    State(state): State<AppState>,
    ApiPath(label): ApiPath<String>,
    ApiJson(payload): ApiJson<MemberStatusBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .create_in_semester(&label, payload.brother_id, payload.status)
        .await?;

    Ok(created(status.into_dto()))
}

#[utoipa::path(
    patch,
    path = "/api/semesters/{label}/statuses",
    tag = SEMESTER_TAG,
    params(
        ("label" = String, Path, description = "Semester label")
    ),
    request_body = MemberStatusBodyDto,
    responses(
        (status = 200, description = "Status after the update", body = ApiResponse<MemberStatusDto>),
        (status = 400, description = "Unknown status label", body = MessageDto),
        (status = 404, description = "Unknown semester or no status row", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_semester_status(
    State(state): State<AppState>,
    ApiPath(label): ApiPath<String>,
    ApiJson(payload): ApiJson<MemberStatusBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .update_in_semester(&label, payload.brother_id, payload.status)
        .await?;

    Ok(ok(status.into_dto()))
}

/// Remove a member's status row from the semester. Succeeds whether or not one existed.
#[utoipa::path(
    delete,
    path = "/api/semesters/{label}/statuses",
    tag = SEMESTER_TAG,
    params(
        ("label" = String, Path, description = "Semester label")
    ),
    request_body = MemberRefDto,
    responses(
        (status = 200, description = "Status removed", body = MessageDto),
        (status = 404, description = "Unknown semester", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_semester_status(
    State(state): State<AppState>,
    ApiPath(label): ApiPath<String>,
    ApiJson(payload): ApiJson<MemberRefDto>,
) -> Result<impl IntoResponse, AppError> {
    StatusService::new(&state.db, state.db_timeout, &state.statuses)
        .delete_in_semester(&label, payload.brother_id)
        .await?;

    Ok(done(format!(
        "Status of member {} in {} removed",
        payload.brother_id, label
    )))
}
