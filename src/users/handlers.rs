use super::models::{CreateUserRequest, UpdateUserRequest};
use super::services::UsersService;
use super::validators;
use crate::common::validation::parse_id_param;
use crate::common::{ApiError, AppState, JsonBody};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// GET /api/users - List all users
pub async fn get_users(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    let users = users_service.list().await?;

    Ok(Json(users))
}

/// POST /api/users - Create a user (find-or-create keyed on email)
pub async fn create_user(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_user = validators::validate_create(request)?;

    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    let (user, created) = users_service.create(new_user).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(user)))
}

/// GET /api/users/:id - Get user by ID
pub async fn get_user_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;

    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    let user = users_service.get_by_id(id).await?;

    Ok(Json(user))
}

/// PUT /api/users/:id - Update user (partial)
pub async fn update_user(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;
    let changes = validators::validate_update(request)?;

    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    let user = users_service.update(id, changes).await?;

    Ok(Json(user))
}

/// DELETE /api/users/:id - Delete user
pub async fn delete_user(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;

    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    users_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
