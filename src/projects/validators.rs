use super::models::{
    CreateProjectRequest, ListProjectsQuery, NewProject, ProjectListParams, UpdateProjectRequest,
};
use crate::common::validation::{
    check_limit, check_offset, check_optional_bool, check_order, check_order_by,
    check_required_id, is_hex_color, ValidationResult,
};
use crate::common::{ApiError, ListParams};

/// orderBy wire names and the columns they resolve to.
const ORDER_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("createdAt", "created_at"),
    ("updatedAt", "updated_at"),
];

const COLOR_MESSAGE: &str = "Color must be a valid hex color (e.g., #FF5733 or #F57)";

pub fn validate_create(request: CreateProjectRequest) -> Result<NewProject, ApiError> {
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

    if let Some(color) = &request.color {
        if !is_hex_color(color) {
            result.add_error("body.color", COLOR_MESSAGE);
        }
    }

    let user_id = match request.user_id {
        Some(id) if id > 0 => Some(id),
        Some(_) => {
            result.add_error("body.userId", "UserId must be a positive integer");
            None
        }
        None => {
            result.add_error("body.userId", "Required");
            None
        }
    };

    match (name, user_id) {
        (Some(name), Some(user_id)) if result.is_valid => Ok(NewProject {
            name,
            description: request.description,
            color: request.color,
            is_active: request.is_active.unwrap_or(true),
            track_time: request.track_time.unwrap_or(true),
            user_id,
        }),
        _ => Err(ApiError::from(result)),
    }
}

pub fn validate_update(request: UpdateProjectRequest) -> Result<UpdateProjectRequest, ApiError> {
    let mut result = ValidationResult::new();

    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            result.add_error("body.name", "Name must not be empty");
        }
    }

    if let Some(color) = &request.color {
        if !is_hex_color(color) {
            result.add_error("body.color", COLOR_MESSAGE);
        }
    }

    if result.is_valid {
        Ok(request)
    } else {
        Err(ApiError::from(result))
    }
}

pub fn validate_list_query(query: &ListProjectsQuery) -> Result<ProjectListParams, ApiError> {
    let mut result = ValidationResult::new();

    let user_id = check_required_id(query.user_id.as_deref(), "query.userId", &mut result);
    let is_active = check_optional_bool(query.is_active.as_deref(), "query.isActive", &mut result);
    let track_time =
        check_optional_bool(query.track_time.as_deref(), "query.trackTime", &mut result);
    let limit = check_limit(query.limit.as_deref(), &mut result);
    let offset = check_offset(query.offset.as_deref(), &mut result);
    let order_by = check_order_by(query.order_by.as_deref(), ORDER_COLUMNS, &mut result);
    let order = check_order(query.order.as_deref(), &mut result);

    match user_id {
        Some(user_id) if result.is_valid => Ok(ProjectListParams {
            user_id,
            is_active,
            track_time,
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
