//! Tests for the projects module: validator contracts, find-or-create on
//! name, filtered listing, and cascade deletes from the owning user.

use super::models::{CreateProjectRequest, ListProjectsQuery, NewProject, UpdateProjectRequest};
use super::services::ProjectsService;
use super::validators;
use crate::common::testing::setup_test_db;
use crate::common::ApiError;
use crate::users::models::NewUser;
use crate::users::services::UsersService;
use sqlx::SqlitePool;

async fn seed_user(pool: &SqlitePool) -> i64 {
    let (user, _) = UsersService::new(pool.clone())
        .create(NewUser {
            nickname: "owner".to_string(),
            name: None,
            picture: None,
            email: "owner@example.com".to_string(),
            email_verified: false,
            sub: "auth0|owner".to_string(),
        })
        .await
        .unwrap();
    user.id
}

fn new_project(name: &str, user_id: i64) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: None,
        color: Some("#FF5733".to_string()),
        is_active: true,
        track_time: true,
        user_id,
    }
}

fn service(pool: &SqlitePool) -> ProjectsService {
    ProjectsService::new(pool.clone())
}

fn list_query(user_id: i64) -> ListProjectsQuery {
    ListProjectsQuery {
        user_id: Some(user_id.to_string()),
        ..ListProjectsQuery::default()
    }
}

#[test]
fn test_validate_create_collects_all_missing_fields() {
    let err = validators::validate_create(CreateProjectRequest {
        name: None,
        description: None,
        color: None,
        is_active: None,
        track_time: None,
        user_id: None,
    })
    .unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
            assert!(paths.contains(&"body.name"));
            assert!(paths.contains(&"body.userId"));
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[test]
fn test_validate_create_rejects_bad_color() {
    let err = validators::validate_create(CreateProjectRequest {
        name: Some("Deep Work".to_string()),
        description: None,
        color: Some("red".to_string()),
        is_active: None,
        track_time: None,
        user_id: Some(1),
    })
    .unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].path, "body.color");
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[test]
fn test_validate_create_defaults_flags_to_true() {
    let new_project = validators::validate_create(CreateProjectRequest {
        name: Some("Deep Work".to_string()),
        description: None,
        color: Some("#F57".to_string()),
        is_active: None,
        track_time: None,
        user_id: Some(1),
    })
    .unwrap();

    assert!(new_project.is_active);
    assert!(new_project.track_time);
}

#[test]
fn test_validate_list_query_requires_user_id() {
    let err = validators::validate_list_query(&ListProjectsQuery::default()).unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors[0].path, "query.userId");
            assert_eq!(errors[0].message, "Required");
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[test]
fn test_validate_list_query_rejects_unknown_order_by() {
    let query = ListProjectsQuery {
        user_id: Some("1".to_string()),
        order_by: Some("color".to_string()),
        ..ListProjectsQuery::default()
    };

    let err = validators::validate_list_query(&query).unwrap_err();
    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors[0].path, "query.orderBy");
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[tokio::test]
async fn test_create_is_idempotent_on_name() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool).await;
    let projects = service(&pool);

    let (first, created_first) = projects
        .create(new_project("Deep Work", user_id))
        .await
        .unwrap();
    let (second, created_second) = projects
        .create(new_project("Deep Work", user_id))
        .await
        .unwrap();

    assert!(created_first);
    assert!(!created_second);
    assert_eq!(first.id, second.id);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_create_with_missing_user_is_rejected() {
    let pool = setup_test_db().await;
    let projects = service(&pool);

    let err = projects.create(new_project("Orphan", 999)).await.unwrap_err();

    match err {
        ApiError::Validation(errors) => assert_eq!(errors[0].path, "body.userId"),
        other => panic!("expected validation error, got {}", other),
    }
}

#[tokio::test]
async fn test_list_filters_by_name_substring() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool).await;
    let projects = service(&pool);

    for name in ["Morning Coding", "Afternoon Meeting", "Evening Coding"] {
        projects.create(new_project(name, user_id)).await.unwrap();
    }

    let query = ListProjectsQuery {
        name: Some("coding".to_string()),
        ..list_query(user_id)
    };
    let params = validators::validate_list_query(&query).unwrap();

    let matches = projects.list(params).await.unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|p| p.name.contains("Coding")));
}

#[tokio::test]
async fn test_list_distinguishes_false_filter_from_absent() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool).await;
    let projects = service(&pool);

    projects.create(new_project("Active", user_id)).await.unwrap();
    let (inactive, _) = projects.create(new_project("Inactive", user_id)).await.unwrap();
    projects
        .update(
            inactive.id,
            UpdateProjectRequest {
                name: None,
                description: None,
                color: None,
                is_active: Some(false),
                track_time: None,
            },
        )
        .await
        .unwrap();

    let all = projects
        .list(validators::validate_list_query(&list_query(user_id)).unwrap())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let query = ListProjectsQuery {
        is_active: Some("false".to_string()),
        ..list_query(user_id)
    };
    let inactive_only = projects
        .list(validators::validate_list_query(&query).unwrap())
        .await
        .unwrap();
    assert_eq!(inactive_only.len(), 1);
    assert_eq!(inactive_only[0].name, "Inactive");
}

#[tokio::test]
async fn test_list_defaults_to_created_at_desc() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool).await;
    let projects = service(&pool);

    projects.create(new_project("A", user_id)).await.unwrap();
    projects.create(new_project("B", user_id)).await.unwrap();

    let all = projects
        .list(validators::validate_list_query(&list_query(user_id)).unwrap())
        .await
        .unwrap();

    assert_eq!(all[0].name, "B");
    assert_eq!(all[1].name, "A");
}

#[tokio::test]
async fn test_list_paginates() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool).await;
    let projects = service(&pool);

    for name in ["A", "B", "C"] {
        projects.create(new_project(name, user_id)).await.unwrap();
    }

    let query = ListProjectsQuery {
        limit: Some("1".to_string()),
        offset: Some("1".to_string()),
        order_by: Some("name".to_string()),
        order: Some("ASC".to_string()),
        ..list_query(user_id)
    };
    let page = projects
        .list(validators::validate_list_query(&query).unwrap())
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "B");
}

#[tokio::test]
async fn test_list_scopes_to_user() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool).await;
    let (other, _) = UsersService::new(pool.clone())
        .create(NewUser {
            nickname: "other".to_string(),
            name: None,
            picture: None,
            email: "other@example.com".to_string(),
            email_verified: false,
            sub: "auth0|other".to_string(),
        })
        .await
        .unwrap();

    let projects = service(&pool);
    projects.create(new_project("Mine", user_id)).await.unwrap();
    projects.create(new_project("Theirs", other.id)).await.unwrap();

    let mine = projects
        .list(validators::validate_list_query(&list_query(user_id)).unwrap())
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Mine");
}

#[tokio::test]
async fn test_update_is_partial() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool).await;
    let projects = service(&pool);

    let (project, _) = projects.create(new_project("Deep Work", user_id)).await.unwrap();

    let updated = projects
        .update(
            project.id,
            UpdateProjectRequest {
                name: None,
                description: Some("focused blocks".to_string()),
                color: None,
                is_active: None,
                track_time: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.description.as_deref(), Some("focused blocks"));
    assert_eq!(updated.name, project.name);
    assert_eq!(updated.color, project.color);
    assert!(updated.is_active);
}

#[tokio::test]
async fn test_update_rename_conflict_is_rejected() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool).await;
    let projects = service(&pool);

    projects.create(new_project("Taken", user_id)).await.unwrap();
    let (project, _) = projects.create(new_project("Mine", user_id)).await.unwrap();

    let err = projects
        .update(
            project.id,
            UpdateProjectRequest {
                name: Some("Taken".to_string()),
                description: None,
                color: None,
                is_active: None,
                track_time: None,
            },
        )
        .await
        .unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors[0].path, "body.name");
            assert_eq!(errors[0].message, "Project name already exists");
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[tokio::test]
async fn test_delete_missing_project_is_not_found() {
    let pool = setup_test_db().await;
    let projects = service(&pool);

    assert!(matches!(
        projects.delete(42).await.unwrap_err(),
        ApiError::NotFound("Project not found")
    ));
}

#[tokio::test]
async fn test_deleting_user_cascades_to_projects() {
    let pool = setup_test_db().await;
    let user_id = seed_user(&pool).await;
    let projects = service(&pool);

    let (project, _) = projects.create(new_project("Doomed", user_id)).await.unwrap();

    UsersService::new(pool.clone()).delete(user_id).await.unwrap();

    assert!(matches!(
        projects.get_by_id(project.id).await.unwrap_err(),
        ApiError::NotFound("Project not found")
    ));
}
