use super::models::{CreateProjectGoalRequest, ListProjectGoalsQuery, UpdateProjectGoalRequest};
use super::services::ProjectGoalsService;
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

/// GET /api/projectGoals - List goals for a project
pub async fn get_project_goals(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Query(query): Query<ListProjectGoalsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let params = validators::validate_list_query(&query)?;

    let app_state = state.read().await;
    let goals_service = ProjectGoalsService::new(app_state.db.clone());

    let goals = goals_service.list(params).await?;

    Ok(Json(goals))
}

/// POST /api/projectGoals - Create a project goal
pub async fn create_project_goal(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    JsonBody(request): JsonBody<CreateProjectGoalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_goal = validators::validate_create(request)?;

    let app_state = state.read().await;
    let goals_service = ProjectGoalsService::new(app_state.db.clone());

    let goal = goals_service.create(new_goal).await?;

    Ok((StatusCode::CREATED, Json(goal)))
}

/// GET /api/projectGoals/:id - Get project goal by ID
pub async fn get_project_goal_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;

    let app_state = state.read().await;
    let goals_service = ProjectGoalsService::new(app_state.db.clone());

    let goal = goals_service.get_by_id(id).await?;

    Ok(Json(goal))
}

/// PUT /api/projectGoals/:id - Update project goal (partial)
pub async fn update_project_goal(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateProjectGoalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;
    let changes = validators::validate_update(request)?;

    let app_state = state.read().await;
    let goals_service = ProjectGoalsService::new(app_state.db.clone());

    let goal = goals_service.update(id, changes).await?;

    Ok(Json(goal))
}

/// DELETE /api/projectGoals/:id - Delete project goal
pub async fn delete_project_goal(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;

    let app_state = state.read().await;
    let goals_service = ProjectGoalsService::new(app_state.db.clone());

    goals_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
