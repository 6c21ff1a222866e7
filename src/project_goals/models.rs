use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::ListParams;

/// Workflow status for a goal. "on progress" is the historical wire value
/// and is kept for compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum GoalStatus {
    #[serde(rename = "pending")]
    #[sqlx(rename = "pending")]
    Pending,
    #[serde(rename = "on progress")]
    #[sqlx(rename = "on progress")]
    OnProgress,
    #[serde(rename = "completed")]
    #[sqlx(rename = "completed")]
    Completed,
}

impl GoalStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(GoalStatus::Pending),
            "on progress" => Some(GoalStatus::OnProgress),
            "completed" => Some(GoalStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GoalStatus::Pending => "pending",
            GoalStatus::OnProgress => "on progress",
            GoalStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGoal {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: GoalStatus,
    pub project_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProjectGoalRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub project_id: Option<i64>,
}

/// Validated create payload with the status default applied.
#[derive(Debug)]
pub struct NewProjectGoal {
    pub name: String,
    pub description: Option<String>,
    pub status: GoalStatus,
    pub project_id: i64,
}

/// Partial patch; the owning project is not patchable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProjectGoalRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Validated patch with the status coerced to the enum.
#[derive(Debug)]
pub struct ProjectGoalChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<GoalStatus>,
}

/// Raw query string for GET /api/projectGoals; coerced by the validators.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectGoalsQuery {
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub order_by: Option<String>,
    pub order: Option<String>,
}

/// Normalized list parameters for the project goals collection.
#[derive(Debug)]
pub struct ProjectGoalListParams {
    pub project_id: i64,
    pub list: ListParams,
}
