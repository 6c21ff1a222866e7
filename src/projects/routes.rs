use super::handlers;
use axum::{routing::get, Router};

/// Creates the projects router with all project-related routes
pub fn projects_routes() -> Router {
    Router::new()
        .route(
            "/api/projects",
            get(handlers::get_projects).post(handlers::create_project),
        )
        .route(
            "/api/projects/:id",
            get(handlers::get_project_by_id)
                .put(handlers::update_project)
                .delete(handlers::delete_project),
        )
}
