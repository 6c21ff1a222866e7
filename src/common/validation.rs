// Common validation types and coercion helpers

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::error::ApiError;
use super::query::SortOrder;

/// Field-level validation failure; `path` locates the offending field
/// (e.g. "body.name", "query.userId", "params.id").
#[derive(Debug, Serialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, path: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            path: path.to_string(),
            message: message.to_string(),
        });
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Pattern checks
// ============================================================================

static HEX_COLOR_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static AUTH0_SUB_RE: OnceLock<Regex> = OnceLock::new();
static PICTURE_URL_RE: OnceLock<Regex> = OnceLock::new();

/// 3- or 6-digit hex color, e.g. #FF5733 or #F57.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_RE
        .get_or_init(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").unwrap())
        .is_match(value)
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
        .is_match(value)
}

/// Identity-provider subject id, e.g. auth0|63fceee13df9151a2850b65c.
pub fn is_auth0_subject(value: &str) -> bool {
    AUTH0_SUB_RE
        .get_or_init(|| Regex::new(r"^auth0\|[a-zA-Z0-9]+$").unwrap())
        .is_match(value)
}

/// Profile pictures must live on one of the known photo hosts.
pub fn is_allowed_picture_url(value: &str) -> bool {
    PICTURE_URL_RE
        .get_or_init(|| {
            Regex::new(
                r"^https?://(s\.gravatar\.com|cdn\.auth0\.com|lh3\.googleusercontent\.com)/",
            )
            .unwrap()
        })
        .is_match(value)
}

// ============================================================================
// Query/path coercion helpers
// ============================================================================

/// Digit-only non-negative integer, the strictness the endpoint contracts use
/// (no signs, no whitespace).
fn parse_digits(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Coerces a `:id` path parameter; non-numeric ids are a client error.
pub fn parse_id_param(raw: &str) -> Result<i64, ApiError> {
    match parse_digits(raw) {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ApiError::validation(
            "params.id",
            "ID must be a positive integer",
        )),
    }
}

/// Mandatory scoping key (userId / projectId / sessionId).
pub fn check_required_id(
    raw: Option<&str>,
    path: &str,
    result: &mut ValidationResult,
) -> Option<i64> {
    match raw {
        None => {
            result.add_error(path, "Required");
            None
        }
        Some(value) => match parse_digits(value) {
            Some(id) if id > 0 => Some(id),
            _ => {
                result.add_error(path, "Must be a positive integer");
                None
            }
        },
    }
}

/// Scoping key that may be absent (sessions accept projectId or userId).
pub fn check_optional_id(
    raw: Option<&str>,
    path: &str,
    result: &mut ValidationResult,
) -> Option<i64> {
    match raw {
        None => None,
        Some(value) => match parse_digits(value) {
            Some(id) if id > 0 => Some(id),
            _ => {
                result.add_error(path, "Must be a positive integer");
                None
            }
        },
    }
}

/// Boolean filters are applied only when explicitly provided, so absence must
/// stay distinguishable from `false`.
pub fn check_optional_bool(
    raw: Option<&str>,
    path: &str,
    result: &mut ValidationResult,
) -> Option<bool> {
    match raw {
        None => None,
        Some("true") => Some(true),
        Some("false") => Some(false),
        Some(_) => {
            result.add_error(path, "Must be 'true' or 'false'");
            None
        }
    }
}

pub fn check_limit(raw: Option<&str>, result: &mut ValidationResult) -> Option<i64> {
    match raw {
        None => None,
        Some(value) => match parse_digits(value) {
            Some(limit) if limit > 0 => Some(limit),
            _ => {
                result.add_error("query.limit", "Limit must be a positive integer");
                None
            }
        },
    }
}

pub fn check_offset(raw: Option<&str>, result: &mut ValidationResult) -> Option<i64> {
    match raw {
        None => None,
        Some(value) => match parse_digits(value) {
            Some(offset) => Some(offset),
            None => {
                result.add_error("query.offset", "Offset must be a non-negative integer");
                None
            }
        },
    }
}

/// Resolves an orderBy wire name against the resource's allow-list of
/// (wire name, column) pairs. Only allow-listed columns ever reach SQL.
pub fn check_order_by(
    raw: Option<&str>,
    allowed: &[(&str, &'static str)],
    result: &mut ValidationResult,
) -> Option<&'static str> {
    let value = raw?;
    match allowed.iter().find(|(name, _)| *name == value) {
        Some((_, column)) => Some(column),
        None => {
            let names: Vec<&str> = allowed.iter().map(|(name, _)| *name).collect();
            result.add_error(
                "query.orderBy",
                &format!("OrderBy must be one of: {}", names.join(", ")),
            );
            None
        }
    }
}

pub fn check_order(raw: Option<&str>, result: &mut ValidationResult) -> SortOrder {
    match raw {
        None => SortOrder::Desc,
        Some("ASC") => SortOrder::Asc,
        Some("DESC") => SortOrder::Desc,
        Some(_) => {
            result.add_error("query.order", "Order must be ASC or DESC");
            SortOrder::Desc
        }
    }
}
