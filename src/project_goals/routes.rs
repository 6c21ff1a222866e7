use super::handlers;
use axum::{routing::get, Router};

/// Creates the project goals router with all project-goal routes
pub fn project_goals_routes() -> Router {
    Router::new()
        .route(
            "/api/projectGoals",
            get(handlers::get_project_goals).post(handlers::create_project_goal),
        )
        .route(
            "/api/projectGoals/:id",
            get(handlers::get_project_goal_by_id)
                .put(handlers::update_project_goal)
                .delete(handlers::delete_project_goal),
        )
}
