use super::models::{CreateSessionGoalRequest, ListSessionGoalsQuery, UpdateSessionGoalRequest};
use super::services::SessionGoalsService;
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

/// GET /api/sessionGoals - List goals for a session
pub async fn get_session_goals(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Query(query): Query<ListSessionGoalsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let params = validators::validate_list_query(&query)?;

    let app_state = state.read().await;
    let goals_service = SessionGoalsService::new(app_state.db.clone());

    let goals = goals_service.list(params).await?;

    Ok(Json(goals))
}

/// POST /api/sessionGoals - Create a session goal
pub async fn create_session_goal(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    JsonBody(request): JsonBody<CreateSessionGoalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_goal = validators::validate_create(request)?;

    let app_state = state.read().await;
    let goals_service = SessionGoalsService::new(app_state.db.clone());

    let goal = goals_service.create(new_goal).await?;

    Ok((StatusCode::CREATED, Json(goal)))
}

/// GET /api/sessionGoals/:id - Get session goal by ID
pub async fn get_session_goal_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;

    let app_state = state.read().await;
    let goals_service = SessionGoalsService::new(app_state.db.clone());

    let goal = goals_service.get_by_id(id).await?;

    Ok(Json(goal))
}

/// PUT /api/sessionGoals/:id - Update session goal (partial)
pub async fn update_session_goal(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateSessionGoalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;
    let changes = validators::validate_update(request)?;

    let app_state = state.read().await;
    let goals_service = SessionGoalsService::new(app_state.db.clone());

    let goal = goals_service.update(id, changes).await?;

    Ok(Json(goal))
}

/// DELETE /api/sessionGoals/:id - Delete session goal
pub async fn delete_session_goal(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;

    let app_state = state.read().await;
    let goals_service = SessionGoalsService::new(app_state.db.clone());

    goals_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
