// Application state shared across all modules

use sqlx::SqlitePool;

/// Application state containing the database pool
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}
