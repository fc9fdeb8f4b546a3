use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        category::{CategoryDto, CreateCategoryDto},
    },
    server::{
        error::AppError,
        service::category::CategoryService,
        state::AppState,
        util::{
            extract::ApiJson,
            respond::{created, ok},
        },
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Event categories ordered by name", body = ApiResponse<Vec<CategoryDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db, state.db_timeout)
        .get_all()
        .await?;

    Ok(ok(categories
        .into_iter()
        .map(|c| c.into_dto())
        .collect::<Vec<_>>()))
}

/// Create an event category.
///
/// # Returns
/// - `201 Created` - The stored category
/// - `400 Bad Request` - Blank or missing name
/// - `500 Internal Server Error` - Database error, including a duplicate name
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Blank or missing name", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db, state.db_timeout)
        .create(payload.category_name)
        .await?;

    Ok(created(category.into_dto()))
}
