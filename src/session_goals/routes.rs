use super::handlers;
use axum::{routing::get, Router};

/// Creates the session goals router with all session-goal routes
pub fn session_goals_routes() -> Router {
    Router::new()
        .route(
            "/api/sessionGoals",
            get(handlers::get_session_goals).post(handlers::create_session_goal),
        )
        .route(
            "/api/sessionGoals/:id",
            get(handlers::get_session_goal_by_id)
                .put(handlers::update_session_goal)
                .delete(handlers::delete_session_goal),
        )
}
