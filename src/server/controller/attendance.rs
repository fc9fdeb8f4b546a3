use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        attendance::{AttendanceDto, AttendanceKeyDto, AttendanceRecordDto},
    },
    server::{
        error::AppError,
        model::attendance::AttendanceParams,
        service::attendance::AttendanceService,
        state::AppState,
        util::{
            extract::{ApiJson, ApiPath},
            respond::{created, done, ok},
        },
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

/// List every attendance record joined to its member, event and category.
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    responses(
        (status = 200, description = "Every attendance record", body = ApiResponse<Vec<AttendanceRecordDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_attendance(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = AttendanceService::new(&state.db, state.db_timeout)
        .get_all()
        .await?;

    Ok(ok(records
        .into_iter()
        .map(|r| r.into_dto())
        .collect::<Vec<_>>()))
}

/// List the attendance records of one event. An event without records yields `[]`.
#[utoipa::path(
    get,
    path = "/api/attendance/{event_id}",
    tag = ATTENDANCE_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Records of the event", body = ApiResponse<Vec<AttendanceRecordDto>>),
        (status = 400, description = "Malformed event id", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_event_records(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let records = AttendanceService::new(&state.db, state.db_timeout)
        .get_by_event(event_id)
        .await?;

    Ok(ok(records
        .into_iter()
        .map(|r| r.into_dto())
        .collect::<Vec<_>>()))
}

/// Record a member's attendance at an event.
///
/// # Returns
/// - `201 Created` - The new record joined to member and event
/// - `400 Bad Request` - Malformed body or unknown attendance status
/// - `404 Not Found` - Unknown member or event
/// - `500 Internal Server Error` - Database error, including a duplicate record
#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    request_body = AttendanceDto,
    responses(
        (status = 201, description = "Attendance recorded", body = ApiResponse<AttendanceRecordDto>),
        (status = 400, description = "Malformed body", body = MessageDto),
        (status = 404, description = "Unknown member or event", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_attendance(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let record = AttendanceService::new(&state.db, state.db_timeout)
        .record(AttendanceParams::from_dto(payload))
        .await?;

    Ok(created(record.into_dto()))
}

/// Change the status of an existing attendance record.
///
/// # Returns
/// - `200 OK` - Record after the update
/// - `400 Bad Request` - Malformed body
/// - `404 Not Found` - The member has no record for the event
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    request_body = AttendanceDto,
    responses(
        (status = 200, description = "Record after the update", body = ApiResponse<AttendanceRecordDto>),
        (status = 400, description = "Malformed body", body = MessageDto),
        (status = 404, description = "No such record", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let record = AttendanceService::new(&state.db, state.db_timeout)
        .update(AttendanceParams::from_dto(payload))
        .await?;

    Ok(ok(record.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    request_body = AttendanceKeyDto,
    responses(
        (status = 200, description = "Record removed, or there was none", body = MessageDto),
        (status = 400, description = "Malformed body", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AttendanceKeyDto>,
) -> Result<impl IntoResponse, AppError> {
    AttendanceService::new(&state.db, state.db_timeout)
        .delete(payload.brother_id, payload.event_id)
        .await?;

    Ok(done(format!(
        "Attendance of member {} at event {} removed",
        payload.brother_id, payload.event_id
    )))
}
