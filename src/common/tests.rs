//! Tests for the shared validation helpers, the list-query builder, and the
//! JSON body extractor

use super::extract::JsonBody;
use super::query::{ListQuery, SortOrder};
use super::testing::setup_test_db;
use super::validation::{
    check_limit, check_optional_bool, check_order, check_order_by, check_required_id, is_email,
    is_hex_color, parse_id_param, ValidationResult,
};
use super::ApiError;
use axum::extract::FromRequest;

#[test]
fn test_parse_id_param_accepts_digits() {
    assert_eq!(parse_id_param("42").unwrap(), 42);
}

#[test]
fn test_parse_id_param_rejects_non_numeric() {
    for raw in ["abc", "-1", "1.5", "", " 1", "1a"] {
        let err = parse_id_param(raw).unwrap_err();
        match err {
            ApiError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].path, "params.id");
                assert_eq!(errors[0].message, "ID must be a positive integer");
            }
            other => panic!("expected validation error, got {}", other),
        }
    }
}

#[test]
fn test_parse_id_param_rejects_zero() {
    assert!(parse_id_param("0").is_err());
}

#[test]
fn test_check_required_id_missing() {
    let mut result = ValidationResult::new();
    assert!(check_required_id(None, "query.userId", &mut result).is_none());
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].path, "query.userId");
}

#[test]
fn test_check_optional_bool_distinguishes_absent_from_false() {
    let mut result = ValidationResult::new();
    assert_eq!(check_optional_bool(None, "query.isActive", &mut result), None);
    assert_eq!(
        check_optional_bool(Some("false"), "query.isActive", &mut result),
        Some(false)
    );
    assert!(result.is_valid);

    assert_eq!(
        check_optional_bool(Some("yes"), "query.isActive", &mut result),
        None
    );
    assert!(!result.is_valid);
}

#[test]
fn test_check_limit_rejects_non_numeric() {
    let mut result = ValidationResult::new();
    assert_eq!(check_limit(Some("ten"), &mut result), None);
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].message, "Limit must be a positive integer");
}

#[test]
fn test_check_limit_rejects_zero() {
    let mut result = ValidationResult::new();
    assert_eq!(check_limit(Some("0"), &mut result), None);
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].message, "Limit must be a positive integer");
}

#[test]
fn test_check_order_by_resolves_allow_listed_column() {
    let allowed = &[("name", "name"), ("createdAt", "created_at")];
    let mut result = ValidationResult::new();

    assert_eq!(
        check_order_by(Some("createdAt"), allowed, &mut result),
        Some("created_at")
    );
    assert!(result.is_valid);

    assert_eq!(check_order_by(Some("id"), allowed, &mut result), None);
    assert!(!result.is_valid);
}

#[test]
fn test_check_order_defaults_to_desc() {
    let mut result = ValidationResult::new();
    assert_eq!(check_order(None, &mut result), SortOrder::Desc);
    assert_eq!(check_order(Some("ASC"), &mut result), SortOrder::Asc);
    assert!(result.is_valid);

    // lowercase is not part of the contract
    check_order(Some("asc"), &mut result);
    assert!(!result.is_valid);
}

#[test]
fn test_patterns() {
    assert!(is_hex_color("#FF5733"));
    assert!(is_hex_color("#f57"));
    assert!(!is_hex_color("FF5733"));
    assert!(!is_hex_color("#ff57333"));

    assert!(is_email("user@example.com"));
    assert!(!is_email("not-an-email"));
}

#[test]
fn test_list_query_sql_shape() {
    let sql = ListQuery::new("SELECT id, name FROM projects")
        .scope("user_id", 1)
        .filter_bool("is_active", Some(true))
        .filter_contains("name", Some("Coding"))
        .order_by("name", SortOrder::Asc)
        .paginate(Some(1), Some(1))
        .to_sql();

    assert_eq!(
        sql,
        "SELECT id, name FROM projects WHERE user_id = ? AND is_active = ? AND name LIKE ? \
         ORDER BY name ASC, id ASC LIMIT 1 OFFSET 1"
    );
}

#[test]
fn test_list_query_absent_filters_do_not_constrain() {
    let sql = ListQuery::new("SELECT id FROM projects")
        .scope("user_id", 1)
        .filter_bool("is_active", None)
        .filter_contains("name", None)
        .to_sql();

    assert_eq!(
        sql,
        "SELECT id FROM projects WHERE user_id = ? ORDER BY created_at DESC, id DESC"
    );
}

#[test]
fn test_list_query_offset_without_limit() {
    let sql = ListQuery::new("SELECT id FROM sessions")
        .scope("project_id", 3)
        .paginate(None, Some(2))
        .to_sql();

    assert!(sql.ends_with("LIMIT -1 OFFSET 2"));
}

#[tokio::test]
async fn test_fetch_all_applies_typed_binds() {
    #[derive(sqlx::FromRow)]
    struct Row {
        name: String,
    }

    let pool = setup_test_db().await;

    sqlx::query("INSERT INTO users (nickname, email, sub) VALUES ('n', 'a@example.com', 'auth0|x')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO projects (name, is_active, track_time, user_id) \
         VALUES ('Alpha', 1, 1, 1), ('Beta', 0, 1, 1)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let rows: Vec<Row> = ListQuery::new("SELECT name FROM projects")
        .scope("user_id", 1)
        .filter_bool("is_active", Some(true))
        .filter_contains("name", Some("alp"))
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Alpha");
}

fn json_request(body: &str) -> axum::extract::Request {
    axum::http::Request::builder()
        .method("POST")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct Payload {
    duration_minutes: Option<i64>,
}

#[tokio::test]
async fn test_json_body_maps_type_mismatch_to_field_error() {
    let err = JsonBody::<Payload>::from_request(json_request(r#"{"durationMinutes": "30"}"#), &())
        .await
        .unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].path, "body");
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[tokio::test]
async fn test_json_body_maps_unknown_field_to_field_error() {
    let err = JsonBody::<Payload>::from_request(json_request(r#"{"durationMins": 30}"#), &())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_json_body_accepts_well_typed_body() {
    let JsonBody(payload) =
        JsonBody::<Payload>::from_request(json_request(r#"{"durationMinutes": 30}"#), &())
            .await
            .unwrap();

    assert_eq!(payload.duration_minutes, Some(30));
}
