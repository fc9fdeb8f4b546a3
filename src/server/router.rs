use axum::{
    routing::{get, patch},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{MessageDto, ResponseStatus},
        attendance::{
            AttendanceDto, AttendanceKeyDto, AttendanceRecordDto, AttendanceStatus,
            EventAttendanceDto, RollCallAttendanceDto,
        },
        category::{CategoryDto, CreateCategoryDto},
        count::{CountDto, LabelCountDto},
        event::{CreateEventDto, EventDto, EventPatchDto, EventRosterDto, UpdateEventDto},
        member::{CreateMemberDto, DeleteMemberDto, MemberDto, UpdateMemberDto},
        semester::{CreateSemesterDto, SemesterDto},
        status::{
            CreateStatusDto, MemberRefDto, MemberStatusBodyDto, MemberStatusDto, RosterEntryDto,
            SemesterStatusBodyDto, SemesterStatusDto, StatusHistoryDto, StatusValueDto,
        },
    },
    server::{
        controller::{attendance, category, count, event, member, semester, status},
        error::AppError,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Chapter roster API"),
    paths(
        member::get_members,
        member::get_member,
        member::create_member,
        member::update_member,
        member::delete_member,
        status::get_statuses,
        status::create_status,
        status::get_member_statuses,
        status::create_member_status,
        status::update_member_status,
        status::update_member_semester_status,
        status::delete_member_status,
        event::get_events,
        event::get_event,
        event::create_event,
        event::update_event,
        event::patch_event,
        event::get_event_attendance,
        event::record_event_attendance,
        category::get_categories,
        category::create_category,
        attendance::get_attendance,
        attendance::get_event_records,
        attendance::create_attendance,
        attendance::update_attendance,
        attendance::delete_attendance,
        semester::get_semesters,
        semester::create_semester,
        semester::get_semester_roster,
        semester::create_semester_status,
        semester::update_semester_status,
        semester::delete_semester_status,
        count::count_members,
        count::count_majors,
        count::count_statuses,
    ),
    components(schemas(
        ResponseStatus,
        MessageDto,
        MemberDto,
        CreateMemberDto,
        UpdateMemberDto,
        DeleteMemberDto,
        EventDto,
        CreateEventDto,
        EventPatchDto,
        UpdateEventDto,
        EventRosterDto,
        CategoryDto,
        CreateCategoryDto,
        AttendanceStatus,
        AttendanceRecordDto,
        EventAttendanceDto,
        AttendanceDto,
        AttendanceKeyDto,
        RollCallAttendanceDto,
        SemesterDto,
        CreateSemesterDto,
        MemberStatusDto,
        SemesterStatusDto,
        StatusHistoryDto,
        RosterEntryDto,
        CreateStatusDto,
        SemesterStatusBodyDto,
        MemberStatusBodyDto,
        MemberRefDto,
        StatusValueDto,
        CountDto,
        LabelCountDto,
    )),
    tags(
        (name = "member", description = "Chapter members"),
        (name = "status", description = "Member status per semester"),
        (name = "event", description = "Chapter events"),
        (name = "category", description = "Event categories"),
        (name = "attendance", description = "Event attendance"),
        (name = "semester", description = "Semesters and their rosters"),
        (name = "count", description = "Aggregate counts"),
    )
)]
pub struct ApiDoc;

/// Builds the application router with every API route, tracing and CORS.
///
/// Unmatched paths answer 404 with a `fail` envelope.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/brothers",
            get(member::get_members)
                .post(member::create_member)
                .delete(member::delete_member),
        )
        .route("/api/brothers/count", get(count::count_members))
        .route("/api/brothers/majors/count", get(count::count_majors))
        .route(
            "/api/brothers/{id}",
            get(member::get_member)
                .patch(member::update_member)
                .put(member::update_member),
        )
        .route(
            "/api/brothers/{id}/statuses",
            get(status::get_member_statuses)
                .post(status::create_member_status)
                .patch(status::update_member_status),
        )
        .route(
            "/api/brothers/{id}/statuses/{semester_id}",
            patch(status::update_member_semester_status).delete(status::delete_member_status),
        )
        .route(
            "/api/events",
            get(event::get_events)
                .post(event::create_event)
                .put(event::update_event),
        )
        .route(
            "/api/events/{event_id}",
            get(event::get_event).patch(event::patch_event),
        )
        .route(
            "/api/events/{event_id}/attendance",
            get(event::get_event_attendance).post(event::record_event_attendance),
        )
        .route(
            "/api/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/api/attendance",
            get(attendance::get_attendance)
                .post(attendance::create_attendance)
                .put(attendance::update_attendance)
                .delete(attendance::delete_attendance),
        )
        .route(
            "/api/attendance/{event_id}",
            get(attendance::get_event_records),
        )
        .route(
            "/api/semesters",
            get(semester::get_semesters).post(semester::create_semester),
        )
        .route(
            "/api/semesters/{label}/statuses",
            get(semester::get_semester_roster)
                .post(semester::create_semester_status)
                .patch(semester::update_semester_status)
                .delete(semester::delete_semester_status),
        )
        .route(
            "/api/statuses",
            get(status::get_statuses).post(status::create_status),
        )
        .route("/api/statuses/count", get(count::count_statuses))
        .route("/api/openapi.json", get(openapi))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
