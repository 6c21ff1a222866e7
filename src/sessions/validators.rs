use super::models::{
    CreateSessionRequest, ListSessionsQuery, NewSession, SessionListParams, SessionScope,
    UpdateSessionRequest,
};
use crate::common::validation::{
    check_limit, check_offset, check_optional_id, check_order, check_order_by, ValidationResult,
};
use crate::common::{ApiError, ListParams};

/// orderBy wire names and the columns they resolve to.
const ORDER_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("durationMinutes", "duration_minutes"),
    ("createdAt", "created_at"),
    ("updatedAt", "updated_at"),
];

pub fn validate_create(request: CreateSessionRequest) -> Result<NewSession, ApiError> {
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

    let duration_minutes = match request.duration_minutes {
        Some(minutes) if minutes > 0 => Some(minutes),
        Some(_) => {
            result.add_error(
                "body.durationMinutes",
                "DurationMinutes must be a positive integer",
            );
            None
        }
        None => {
            result.add_error("body.durationMinutes", "Required");
            None
        }
    };

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

    match (name, duration_minutes, project_id) {
        (Some(name), Some(duration_minutes), Some(project_id)) if result.is_valid => {
            Ok(NewSession {
                name,
                description: request.description,
                note: request.note,
                duration_minutes,
                project_id,
            })
        }
        _ => Err(ApiError::from(result)),
    }
}

pub fn validate_update(request: UpdateSessionRequest) -> Result<UpdateSessionRequest, ApiError> {
    let mut result = ValidationResult::new();

    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            result.add_error("body.name", "Name must not be empty");
        }
    }

    if let Some(minutes) = request.duration_minutes {
        if minutes <= 0 {
            result.add_error(
                "body.durationMinutes",
                "DurationMinutes must be a positive integer",
            );
        }
    }

    if result.is_valid {
        Ok(request)
    } else {
        Err(ApiError::from(result))
    }
}

pub fn validate_list_query(query: &ListSessionsQuery) -> Result<SessionListParams, ApiError> {
    let mut result = ValidationResult::new();

    let project_id = check_optional_id(query.project_id.as_deref(), "query.projectId", &mut result);
    let user_id = check_optional_id(query.user_id.as_deref(), "query.userId", &mut result);

    if query.project_id.is_none() && query.user_id.is_none() {
        result.add_error("query", "Either projectId or userId must be provided");
    }

    let limit = check_limit(query.limit.as_deref(), &mut result);
    let offset = check_offset(query.offset.as_deref(), &mut result);
    let order_by = check_order_by(query.order_by.as_deref(), ORDER_COLUMNS, &mut result);
    let order = check_order(query.order.as_deref(), &mut result);

    // projectId is the narrower scope, so it wins when both keys were sent
    let scope = match (project_id, user_id) {
        (Some(project_id), _) => Some(SessionScope::Project(project_id)),
        (None, Some(user_id)) => Some(SessionScope::User(user_id)),
        (None, None) => None,
    };

    match scope {
        Some(scope) if result.is_valid => Ok(SessionListParams {
            scope,
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
