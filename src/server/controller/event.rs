use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        attendance::{AttendanceRecordDto, RollCallAttendanceDto},
        event::{CreateEventDto, EventDto, EventPatchDto, EventRosterDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        model::event::{CreateEventParams, UpdateEventParams},
        service::{attendance::AttendanceService, event::EventService},
        state::AppState,
        util::{
            extract::{ApiJson, ApiPath},
            respond::{created, ok},
        },
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// List every event, most recent first.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Events with their category names", body = ApiResponse<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db, state.db_timeout)
        .get_all()
        .await?;

    Ok(ok(events
        .into_iter()
        .map(|e| e.into_dto())
        .collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "The event", body = ApiResponse<EventDto>),
        (status = 404, description = "Event not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db, state.db_timeout)
        .get_by_id(event_id)
        .await?;

    Ok(ok(event.into_dto()))
}

/// Create an event in an existing category.
///
/// The category is named, not referenced by id. An unknown category name answers 404
/// and no event is stored.
///
/// # Returns
/// - `201 Created` - The stored event
/// - `400 Bad Request` - Missing field or malformed date
/// - `404 Not Found` - Unknown category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = ApiResponse<EventDto>),
        (status = 400, description = "Missing field or malformed date", body = MessageDto),
        (status = 404, description = "Unknown category", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db, state.db_timeout)
        .create(CreateEventParams::from_dto(payload))
        .await?;

    Ok(created(event.into_dto()))
}

/// Partially update the event named by `eventID` in the body.
///
/// # Returns
/// - `200 OK` - Event after the update
/// - `400 Bad Request` - No updatable field in the body
/// - `404 Not Found` - Unknown event or category; nothing is changed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event after the update", body = ApiResponse<EventDto>),
        (status = 400, description = "No updatable field in the body", body = MessageDto),
        (status = 404, description = "Unknown event or category", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db, state.db_timeout)
        .update(UpdateEventParams::from_dto(payload.event_id, payload.patch))
        .await?;

    Ok(ok(event.into_dto()))
}

/// Partially update an event addressed by path.
#[utoipa::path(
    patch,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id")
    ),
    request_body = EventPatchDto,
    responses(
        (status = 200, description = "Event after the update", body = ApiResponse<EventDto>),
        (status = 400, description = "No updatable field in the body", body = MessageDto),
        (status = 404, description = "Unknown event or category", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn patch_event(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<EventPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db, state.db_timeout)
        .update(UpdateEventParams::from_dto(event_id, payload))
        .await?;

    Ok(ok(event.into_dto()))
}

/// Get an event together with every attendance record against it.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/attendance",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event and its attendance", body = ApiResponse<EventRosterDto>),
        (status = 404, description = "Event not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_event_attendance(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let roster = EventService::new(&state.db, state.db_timeout)
        .get_roster(event_id)
        .await?;

    Ok(ok(roster.into_dto()))
}

/// Record attendance at an event for the member holding a roll call.
///
/// # Returns
/// - `201 Created` - The new record joined to member and event
/// - `400 Bad Request` - Malformed body or unknown attendance status
/// - `404 Not Found` - Unknown event or roll call
/// - `500 Internal Server Error` - Database error, including a duplicate record
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/attendance",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id")
    ),
    request_body = RollCallAttendanceDto,
    responses(
        (status = 201, description = "Attendance recorded", body = ApiResponse<AttendanceRecordDto>),
        (status = 400, description = "Malformed body", body = MessageDto),
        (status = 404, description = "Unknown event or roll call", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn record_event_attendance(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<RollCallAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let record = AttendanceService::new(&state.db, state.db_timeout)
        .record_by_roll_call(event_id, payload.roll_call, payload.attendance_status)
        .await?;

    Ok(created(record.into_dto()))
}
