use super::handlers;
use axum::{routing::get, Router};

/// Creates the sessions router with all session-related routes
pub fn sessions_routes() -> Router {
    Router::new()
        .route(
            "/api/sessions",
            get(handlers::get_sessions).post(handlers::create_session),
        )
        .route(
            "/api/sessions/:id",
            get(handlers::get_session_by_id)
                .put(handlers::update_session)
                .delete(handlers::delete_session),
        )
}
