use super::models::{CreateSessionRequest, ListSessionsQuery, UpdateSessionRequest};
use super::services::SessionsService;
use super::validators;
use crate::common::validation::parse_id_param;
use crate::common::{ApiError, AppState, JsonBody};
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// GET /api/sessions - List sessions scoped by project or user
pub async fn get_sessions(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Query(query): Query<ListSessionsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let params = validators::validate_list_query(&query)?;

    let app_state = state.read().await;
    let sessions_service = SessionsService::new(app_state.db.clone());

    let sessions = sessions_service.list(params).await?;

    Ok(Json(sessions))
}

/// POST /api/sessions - Create a session
pub async fn create_session(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    JsonBody(request): JsonBody<CreateSessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_session = validators::validate_create(request)?;

    let app_state = state.read().await;
    let sessions_service = SessionsService::new(app_state.db.clone());

    let session = sessions_service.create(new_session).await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/sessions/:id - Get session by ID
pub async fn get_session_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;

    let app_state = state.read().await;
    let sessions_service = SessionsService::new(app_state.db.clone());

    let session = sessions_service.get_by_id(id).await?;

    Ok(Json(session))
}

/// PUT /api/sessions/:id - Update session (partial)
pub async fn update_session(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateSessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;
    let changes = validators::validate_update(request)?;

    let app_state = state.read().await;
    let sessions_service = SessionsService::new(app_state.db.clone());

    let session = sessions_service.update(id, changes).await?;

    Ok(Json(session))
}

/// DELETE /api/sessions/:id - Delete session
pub async fn delete_session(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;

    let app_state = state.read().await;
    let sessions_service = SessionsService::new(app_state.db.clone());

    sessions_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
