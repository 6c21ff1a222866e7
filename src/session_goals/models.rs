use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::ListParams;

pub use crate::project_goals::models::GoalStatus;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SessionGoal {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: GoalStatus,
    pub session_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSessionGoalRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub session_id: Option<i64>,
}

/// Validated create payload with the status default applied.
#[derive(Debug)]
pub struct NewSessionGoal {
    pub name: String,
    pub description: Option<String>,
    pub status: GoalStatus,
    pub session_id: i64,
}

/// Partial patch; the owning session is not patchable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSessionGoalRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Validated patch with the status coerced to the enum.
#[derive(Debug)]
pub struct SessionGoalChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<GoalStatus>,
}

/// Raw query string for GET /api/sessionGoals; coerced by the validators.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionGoalsQuery {
    pub session_id: Option<String>,
    pub name: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub order_by: Option<String>,
    pub order: Option<String>,
}

/// Normalized list parameters for the session goals collection.
#[derive(Debug)]
pub struct SessionGoalListParams {
    pub session_id: i64,
    pub list: ListParams,
}
