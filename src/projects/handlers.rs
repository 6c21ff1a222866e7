use super::models::{CreateProjectRequest, ListProjectsQuery, UpdateProjectRequest};
use super::services::ProjectsService;
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

/// GET /api/projects - List projects for a user, with filters
pub async fn get_projects(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let params = validators::validate_list_query(&query)?;

    let app_state = state.read().await;
    let projects_service = ProjectsService::new(app_state.db.clone());

    let projects = projects_service.list(params).await?;

    Ok(Json(projects))
}

/// POST /api/projects - Create a project (find-or-create keyed on name)
pub async fn create_project(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    JsonBody(request): JsonBody<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_project = validators::validate_create(request)?;

    let app_state = state.read().await;
    let projects_service = ProjectsService::new(app_state.db.clone());

    let (project, created) = projects_service.create(new_project).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(project)))
}

/// GET /api/projects/:id - Get project by ID
pub async fn get_project_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;

    let app_state = state.read().await;
    let projects_service = ProjectsService::new(app_state.db.clone());

    let project = projects_service.get_by_id(id).await?;

    Ok(Json(project))
}

/// PUT /api/projects/:id - Update project (partial)
pub async fn update_project(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;
    let changes = validators::validate_update(request)?;

    let app_state = state.read().await;
    let projects_service = ProjectsService::new(app_state.db.clone());

    let project = projects_service.update(id, changes).await?;

    Ok(Json(project))
}

/// DELETE /api/projects/:id - Delete project
pub async fn delete_project(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id_param(&id)?;

    let app_state = state.read().await;
    let projects_service = ProjectsService::new(app_state.db.clone());

    projects_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
