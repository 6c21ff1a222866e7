use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User row. Wire field names stay snake_case because the upstream
/// identity-provider payload uses them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub nickname: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub email: String,
    pub email_verified: bool,
    pub sub: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Create payload. `id`, `created_at` and `updated_at` are accepted because
/// the identity provider sends them, but they are server-managed and ignored.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub nickname: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub sub: Option<String>,
    pub id: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Validated create payload with defaults applied.
#[derive(Debug)]
pub struct NewUser {
    pub nickname: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub email: String,
    pub email_verified: bool,
    pub sub: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub nickname: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub sub: Option<String>,
}
