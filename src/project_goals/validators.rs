use super::models::{
    CreateProjectGoalRequest, GoalStatus, ListProjectGoalsQuery, NewProjectGoal,
    ProjectGoalChanges, ProjectGoalListParams, UpdateProjectGoalRequest,
};
use crate::common::validation::{
    check_limit, check_offset, check_order, check_order_by, check_required_id, ValidationResult,
};
use crate::common::{ApiError, ListParams};

/// orderBy wire names and the columns they resolve to.
const ORDER_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("status", "status"),
    ("createdAt", "created_at"),
    ("updatedAt", "updated_at"),
];

const STATUS_MESSAGE: &str = "Status must be one of: pending, on progress, completed";

fn check_status(
    raw: Option<&str>,
    result: &mut ValidationResult,
) -> Option<GoalStatus> {
    let value = raw?;
    match GoalStatus::parse(value) {
        Some(status) => Some(status),
        None => {
            result.add_error("body.status", STATUS_MESSAGE);
            None
        }
    }
}

pub fn validate_create(request: CreateProjectGoalRequest) -> Result<NewProjectGoal, ApiError> {
    let mut result = ValidationResult::new();

    let name = match &request.name {
        Some(name) if !name.trim().is_empty() => Some(name.clone()),
        Some(_) => {
            result.add_error("body.name", "Name must not be empty");
            None
        }
        None => {
            result.add_error("body.name", "Required");
            None
        }
    };

    let status = check_status(request.status.as_deref(), &mut result);

    let project_id = match request.project_id {
        Some(id) if id > 0 => Some(id),
        Some(_) => {
            result.add_error("body.projectId", "ProjectId must be a positive integer");
            None
        }
        None => {
            result.add_error("body.projectId", "Required");
            None
        }
    };

    match (name, project_id) {
        (Some(name), Some(project_id)) if result.is_valid => Ok(NewProjectGoal {
            name,
            description: request.description,
            status: status.unwrap_or(GoalStatus::Pending),
            project_id,
        }),
        _ => Err(ApiError::from(result)),
    }
}

pub fn validate_update(
    request: UpdateProjectGoalRequest,
) -> Result<ProjectGoalChanges, ApiError> {
    let mut result = ValidationResult::new();

    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            result.add_error("body.name", "Name must not be empty");
        }
    }

    let status = check_status(request.status.as_deref(), &mut result);

    if result.is_valid {
        Ok(ProjectGoalChanges {
            name: request.name,
            description: request.description,
            status,
        })
    } else {
        Err(ApiError::from(result))
    }
}

pub fn validate_list_query(
    query: &ListProjectGoalsQuery,
) -> Result<ProjectGoalListParams, ApiError> {
    let mut result = ValidationResult::new();

    let project_id = check_required_id(query.project_id.as_deref(), "query.projectId", &mut result);
    let limit = check_limit(query.limit.as_deref(), &mut result);
    let offset = check_offset(query.offset.as_deref(), &mut result);
    let order_by = check_order_by(query.order_by.as_deref(), ORDER_COLUMNS, &mut result);
    let order = check_order(query.order.as_deref(), &mut result);

    match project_id {
        Some(project_id) if result.is_valid => Ok(ProjectGoalListParams {
            project_id,
            list: ListParams {
                name: query.name.clone(),
                limit,
                offset,
                order_by,
                order,
            },
        }),
        _ => Err(ApiError::from(result)),
    }
}
