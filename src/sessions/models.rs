use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::ListParams;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub duration_minutes: i64,
    pub project_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSessionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub note: Option<String>,
    pub duration_minutes: Option<i64>,
    pub project_id: Option<i64>,
}

/// Validated create payload.
#[derive(Debug)]
pub struct NewSession {
    pub name: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub duration_minutes: i64,
    pub project_id: i64,
}

/// Partial patch; the owning project is not patchable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSessionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub note: Option<String>,
    pub duration_minutes: Option<i64>,
}

/// Raw query string for GET /api/sessions; coerced by the validators.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionsQuery {
    pub project_id: Option<String>,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub order_by: Option<String>,
    pub order: Option<String>,
}

/// Scoping key for the sessions collection. When both are sent, projectId
/// wins (the narrower scope).
#[derive(Debug, Clone, Copy)]
pub enum SessionScope {
    Project(i64),
    User(i64),
}

/// Normalized list parameters for the sessions collection.
#[derive(Debug)]
pub struct SessionListParams {
    pub scope: SessionScope,
    pub list: ListParams,
}
