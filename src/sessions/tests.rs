//! Tests for the sessions module: validator contracts, scoped listing
//! (including the by-user join), and cascade deletes from the project.

use super::models::{
    CreateSessionRequest, ListSessionsQuery, NewSession, SessionScope, UpdateSessionRequest,
};
use super::services::SessionsService;
use super::validators;
use crate::common::testing::setup_test_db;
use crate::common::ApiError;
use crate::projects::models::NewProject;
use crate::projects::services::ProjectsService;
use crate::users::models::NewUser;
use crate::users::services::UsersService;
use sqlx::SqlitePool;

async fn seed_user(pool: &SqlitePool, email: &str, sub: &str) -> i64 {
    let (user, _) = UsersService::new(pool.clone())
        .create(NewUser {
            nickname: "owner".to_string(),
            name: None,
            picture: None,
            email: email.to_string(),
            email_verified: false,
            sub: sub.to_string(),
        })
        .await
        .unwrap();
    user.id
}

async fn seed_project(pool: &SqlitePool, name: &str, user_id: i64) -> i64 {
    let (project, _) = ProjectsService::new(pool.clone())
        .create(NewProject {
            name: name.to_string(),
            description: None,
            color: None,
            is_active: true,
            track_time: true,
            user_id,
        })
        .await
        .unwrap();
    project.id
}

fn new_session(name: &str, project_id: i64) -> NewSession {
    NewSession {
        name: name.to_string(),
        description: None,
        note: None,
        duration_minutes: 25,
        project_id,
    }
}

fn service(pool: &SqlitePool) -> SessionsService {
    SessionsService::new(pool.clone())
}

#[test]
fn test_validate_create_collects_all_missing_fields() {
    let err = validators::validate_create(CreateSessionRequest {
        name: None,
        description: None,
        note: None,
        duration_minutes: None,
        project_id: None,
    })
    .unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
            assert!(paths.contains(&"body.name"));
            assert!(paths.contains(&"body.durationMinutes"));
            assert!(paths.contains(&"body.projectId"));
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[tokio::test]
async fn test_wrong_typed_body_is_a_field_error_not_422() {
    use axum::extract::FromRequest;
    use axum::response::IntoResponse;
    use crate::common::JsonBody;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/sessions")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            r#"{"name": "Pomodoro", "durationMinutes": "30", "projectId": 1}"#,
        ))
        .unwrap();

    let err = JsonBody::<CreateSessionRequest>::from_request(request, &())
        .await
        .unwrap_err();

    match &err {
        ApiError::Validation(errors) => assert_eq!(errors[0].path, "body"),
        other => panic!("expected validation error, got {}", other),
    }
    assert_eq!(
        err.into_response().status(),
        axum::http::StatusCode::BAD_REQUEST
    );
}

#[test]
fn test_validate_create_rejects_non_positive_duration() {
    let err = validators::validate_create(CreateSessionRequest {
        name: Some("Pomodoro".to_string()),
        description: None,
        note: None,
        duration_minutes: Some(0),
        project_id: Some(1),
    })
    .unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors[0].path, "body.durationMinutes");
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[test]
fn test_validate_list_query_requires_a_scope() {
    let err = validators::validate_list_query(&ListSessionsQuery::default()).unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors[0].path, "query");
            assert_eq!(errors[0].message, "Either projectId or userId must be provided");
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[test]
fn test_validate_list_query_project_id_wins() {
    let query = ListSessionsQuery {
        project_id: Some("3".to_string()),
        user_id: Some("7".to_string()),
        ..ListSessionsQuery::default()
    };

    let params = validators::validate_list_query(&query).unwrap();
    assert!(matches!(params.scope, SessionScope::Project(3)));
}

#[test]
fn test_validate_list_query_rejects_bad_scope_value() {
    let query = ListSessionsQuery {
        project_id: Some("abc".to_string()),
        ..ListSessionsQuery::default()
    };

    let err = validators::validate_list_query(&query).unwrap_err();
    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors[0].path, "query.projectId");
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[tokio::test]
async fn test_create_allows_duplicate_names() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool, "a@example.com", "auth0|aaa").await;
    let project_id = seed_project(&pool, "Deep Work", user_id).await;
    let sessions = service(&pool);

    let first = sessions.create(new_session("Pomodoro", project_id)).await.unwrap();
    let second = sessions.create(new_session("Pomodoro", project_id)).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, second.name);
}

#[tokio::test]
async fn test_create_with_missing_project_is_rejected() {
    let pool = setup_test_db().await;
    let sessions = service(&pool);

    let err = sessions.create(new_session("Orphan", 999)).await.unwrap_err();

    match err {
        ApiError::Validation(errors) => assert_eq!(errors[0].path, "body.projectId"),
        other => panic!("expected validation error, got {}", other),
    }
}

#[tokio::test]
async fn test_list_by_project() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool, "a@example.com", "auth0|aaa").await;
    let project_a = seed_project(&pool, "A", user_id).await;
    let project_b = seed_project(&pool, "B", user_id).await;
    let sessions = service(&pool);

    sessions.create(new_session("In A", project_a)).await.unwrap();
    sessions.create(new_session("In B", project_b)).await.unwrap();

    let query = ListSessionsQuery {
        project_id: Some(project_a.to_string()),
        ..ListSessionsQuery::default()
    };
    let found = sessions
        .list(validators::validate_list_query(&query).unwrap())
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "In A");
}

#[tokio::test]
async fn test_list_by_user_spans_projects() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool, "a@example.com", "auth0|aaa").await;
    let other_id = seed_user(&pool, "b@example.com", "auth0|bbb").await;
    let project_a = seed_project(&pool, "A", user_id).await;
    let project_b = seed_project(&pool, "B", user_id).await;
    let project_other = seed_project(&pool, "Other", other_id).await;
    let sessions = service(&pool);

    sessions.create(new_session("In A", project_a)).await.unwrap();
    sessions.create(new_session("In B", project_b)).await.unwrap();
    sessions.create(new_session("Not mine", project_other)).await.unwrap();

    let query = ListSessionsQuery {
        user_id: Some(user_id.to_string()),
        ..ListSessionsQuery::default()
    };
    let found = sessions
        .list(validators::validate_list_query(&query).unwrap())
        .await
        .unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|s| s.name != "Not mine"));
}

#[tokio::test]
async fn test_list_orders_by_duration() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool, "a@example.com", "auth0|aaa").await;
    let project_id = seed_project(&pool, "A", user_id).await;
    let sessions = service(&pool);

    for (name, minutes) in [("short", 10), ("long", 90), ("medium", 45)] {
        sessions
            .create(NewSession {
                duration_minutes: minutes,
                ..new_session(name, project_id)
            })
            .await
            .unwrap();
    }

    let query = ListSessionsQuery {
        project_id: Some(project_id.to_string()),
        order_by: Some("durationMinutes".to_string()),
        order: Some("ASC".to_string()),
        ..ListSessionsQuery::default()
    };
    let found = sessions
        .list(validators::validate_list_query(&query).unwrap())
        .await
        .unwrap();

    let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["short", "medium", "long"]);
}

#[tokio::test]
async fn test_update_is_partial() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool, "a@example.com", "auth0|aaa").await;
    let project_id = seed_project(&pool, "A", user_id).await;
    let sessions = service(&pool);

    let session = sessions.create(new_session("Pomodoro", project_id)).await.unwrap();

    let updated = sessions
        .update(
            session.id,
            UpdateSessionRequest {
                name: None,
                description: None,
                note: Some("went well".to_string()),
                duration_minutes: Some(30),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.note.as_deref(), Some("went well"));
    assert_eq!(updated.duration_minutes, 30);
    assert_eq!(updated.name, session.name);
    assert_eq!(updated.project_id, project_id);
}

#[tokio::test]
async fn test_get_missing_session_is_not_found() {
    let pool = setup_test_db().await;
    let sessions = service(&pool);

    assert!(matches!(
        sessions.get_by_id(999).await.unwrap_err(),
        ApiError::NotFound("Session not found")
    ));
}

#[tokio::test]
async fn test_deleting_project_cascades_to_sessions() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool, "a@example.com", "auth0|aaa").await;
    let project_id = seed_project(&pool, "Doomed", user_id).await;
    let sessions = service(&pool);

    let session = sessions.create(new_session("Pomodoro", project_id)).await.unwrap();

    ProjectsService::new(pool.clone()).delete(project_id).await.unwrap();

    assert!(matches!(
        sessions.get_by_id(session.id).await.unwrap_err(),
        ApiError::NotFound("Session not found")
    ));
}
