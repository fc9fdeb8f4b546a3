use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        member::{CreateMemberDto, DeleteMemberDto, MemberDto, UpdateMemberDto},
    },
    server::{
        error::AppError,
        model::member::{CreateMemberParams, UpdateMemberParams},
        service::member::MemberService,
        state::AppState,
        util::{
            extract::{ApiJson, ApiPath},
            respond::{created, done, ok},
        },
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// List every member.
///
/// # Returns
/// - `200 OK` - Members ordered by roll call
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/brothers",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Members ordered by roll call", body = ApiResponse<Vec<MemberDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = MemberService::new(&state.db, state.db_timeout, &state.statuses)
        .get_all()
        .await?;

    Ok(ok(members
        .into_iter()
        .map(|m| m.into_dto())
        .collect::<Vec<_>>()))
}

/// Get a single member by `brotherID`.
///
/// # Returns
/// - `200 OK` - The member
/// - `404 Not Found` - No member with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/brothers/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member id (brotherID)")
    ),
    responses(
        (status = 200, description = "The member", body = ApiResponse<MemberDto>),
        (status = 400, description = "Malformed id", body = MessageDto),
        (status = 404, description = "Member not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db, state.db_timeout, &state.statuses)
        .get_by_id(id)
        .await?;

    Ok(ok(member.into_dto()))
}

/// Create a member.
///
/// `rollCall` must be positive, both names non-blank and `status` one of the configured
/// labels. A roll call already in use is a constraint violation and answers 500.
///
/// # Returns
/// - `201 Created` - The stored member
/// - `400 Bad Request` - Missing or invalid field
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/brothers",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Member created", body = ApiResponse<MemberDto>),
        (status = 400, description = "Missing or invalid field", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db, state.db_timeout, &state.statuses)
        .create(CreateMemberParams::from_dto(payload))
        .await?;

    Ok(created(member.into_dto()))
}

/// Partially update a member.
///
/// Only keys present in the body are written. Nullable fields accept `null` to clear
/// the stored value. Served for both `PATCH` and `PUT`.
///
/// # Returns
/// - `200 OK` - Member after the update
/// - `400 Bad Request` - Empty body or invalid field
/// - `404 Not Found` - No member with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/brothers/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member id (brotherID)")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member after the update", body = ApiResponse<MemberDto>),
        (status = 400, description = "Empty body or invalid field", body = MessageDto),
        (status = 404, description = "Member not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db, state.db_timeout, &state.statuses)
        .update(UpdateMemberParams::from_dto(id, payload))
        .await?;

    Ok(ok(member.into_dto()))
}

/// Delete the member holding a roll call. Succeeds whether or not one existed.
#[utoipa::path(
    delete,
    path = "/api/brothers",
    tag = MEMBER_TAG,
    request_body = DeleteMemberDto,
    responses(
        (status = 200, description = "Member removed", body = MessageDto),
        (status = 400, description = "Malformed body", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DeleteMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    MemberService::new(&state.db, state.db_timeout, &state.statuses)
        .delete_by_roll_call(payload.roll_call)
        .await?;

    Ok(done(format!(
        "Member with roll call {} removed",
        payload.roll_call
    )))
}
