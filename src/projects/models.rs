use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::ListParams;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
    pub track_time: bool,
    pub user_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
    pub track_time: Option<bool>,
    pub user_id: Option<i64>,
}

/// Validated create payload with defaults applied.
#[derive(Debug)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
    pub track_time: bool,
    pub user_id: i64,
}

/// Partial patch; the owning user is not patchable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
    pub track_time: Option<bool>,
}

/// Raw query string for GET /api/projects; coerced by the validators.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsQuery {
    pub user_id: Option<String>,
    pub is_active: Option<String>,
    pub track_time: Option<String>,
    pub name: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub order_by: Option<String>,
    pub order: Option<String>,
}

/// Normalized list parameters for the projects collection.
#[derive(Debug)]
pub struct ProjectListParams {
    pub user_id: i64,
    pub is_active: Option<bool>,
    pub track_time: Option<bool>,
    pub list: ListParams,
}
