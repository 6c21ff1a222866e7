use super::models::{CreateUserRequest, NewUser, UpdateUserRequest};
use crate::common::validation::{
    is_allowed_picture_url, is_auth0_subject, is_email, ValidationResult,
};
use crate::common::ApiError;

pub fn validate_create(request: CreateUserRequest) -> Result<NewUser, ApiError> {
    let mut result = ValidationResult::new();

    let nickname = match &request.nickname {
        Some(nickname) if !nickname.trim().is_empty() => Some(nickname.clone()),
        Some(_) => {
            result.add_error("body.nickname", "Nickname must not be empty");
            None
        }
        None => {
            result.add_error("body.nickname", "Required");
            None
        }
    };

    let email = match &request.email {
        Some(email) if is_email(email) => Some(email.clone()),
        Some(_) => {
            result.add_error("body.email", "Email must be a valid email address");
            None
        }
        None => {
            result.add_error("body.email", "Required");
            None
        }
    };

    let sub = match &request.sub {
        Some(sub) if is_auth0_subject(sub) => Some(sub.clone()),
        Some(_) => {
            result.add_error("body.sub", "Sub must match auth0|<alphanumeric>");
            None
        }
        None => {
            result.add_error("body.sub", "Required");
            None
        }
    };

    if let Some(picture) = &request.picture {
        if !is_allowed_picture_url(picture) {
            result.add_error("body.picture", "Picture must be a URL on an allowed photo host");
        }
    }

    match (nickname, email, sub) {
        (Some(nickname), Some(email), Some(sub)) if result.is_valid => Ok(NewUser {
            nickname,
            name: request.name,
            picture: request.picture,
            email,
            email_verified: request.email_verified.unwrap_or(false),
            sub,
        }),
        _ => Err(ApiError::from(result)),
    }
}

pub fn validate_update(request: UpdateUserRequest) -> Result<UpdateUserRequest, ApiError> {
    let mut result = ValidationResult::new();

    if let Some(nickname) = &request.nickname {
        if nickname.trim().is_empty() {
            result.add_error("body.nickname", "Nickname must not be empty");
        }
    }

    if let Some(email) = &request.email {
        if !is_email(email) {
            result.add_error("body.email", "Email must be a valid email address");
        }
    }

    if let Some(sub) = &request.sub {
        if !is_auth0_subject(sub) {
            result.add_error("body.sub", "Sub must match auth0|<alphanumeric>");
        }
    }

    if let Some(picture) = &request.picture {
        if !is_allowed_picture_url(picture) {
            result.add_error("body.picture", "Picture must be a URL on an allowed photo host");
        }
    }

    if result.is_valid {
        Ok(request)
    } else {
        Err(ApiError::from(result))
    }
}
