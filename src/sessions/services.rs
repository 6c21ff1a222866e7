use super::models::{NewSession, Session, SessionListParams, SessionScope, UpdateSessionRequest};
use crate::common::{ApiError, BindValue, ListQuery};
use sqlx::SqlitePool;
use tracing::info;

const SELECT_SESSION: &str = "SELECT id, name, description, note, duration_minutes, project_id, created_at, updated_at FROM sessions";

// Listing by user goes through the owning projects, so columns must be
// qualified to stay unambiguous after the join.
const SELECT_SESSION_BY_USER: &str = "SELECT sessions.id, sessions.name, sessions.description, sessions.note, sessions.duration_minutes, sessions.project_id, sessions.created_at, sessions.updated_at FROM sessions JOIN projects ON projects.id = sessions.project_id";

pub struct SessionsService {
    db: SqlitePool,
}

impl SessionsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Sessions are not deduplicated; every create inserts a new row.
    pub async fn create(&self, session: NewSession) -> Result<Session, ApiError> {
        let now = chrono::Utc::now().to_rfc3339();

        let insert = sqlx::query(
            r#"
            INSERT INTO sessions (name, description, note, duration_minutes, project_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&session.name)
        .bind(&session.description)
        .bind(&session.note)
        .bind(session.duration_minutes)
        .bind(session.project_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await;

        match insert {
            Ok(done) => {
                let id = done.last_insert_rowid();
                info!("Created session {} ({})", session.name, id);
                self.get_by_id(id).await
            }
            Err(e) if is_foreign_key_violation(&e) => Err(ApiError::validation(
                "body.projectId",
                "Project does not exist",
            )),
            Err(e) => Err(ApiError::Database(e)),
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Session, ApiError> {
        sqlx::query_as::<_, Session>(&format!("{} WHERE id = ?", SELECT_SESSION))
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::Database)?
            .ok_or(ApiError::NotFound("Session not found"))
    }

    /// Lists sessions under the validated scope with filters, ordering and
    /// pagination applied.
    pub async fn list(&self, params: SessionListParams) -> Result<Vec<Session>, ApiError> {
        let mut query = match params.scope {
            SessionScope::Project(project_id) => {
                ListQuery::new(SELECT_SESSION).scope("project_id", project_id)
            }
            SessionScope::User(user_id) => ListQuery::new(SELECT_SESSION_BY_USER)
                .scope("projects.user_id", user_id)
                .tie_break("sessions.id"),
        };

        let qualify = matches!(params.scope, SessionScope::User(_));
        let column = params.list.order_by.unwrap_or("created_at");
        let column = if qualify {
            format!("sessions.{}", column)
        } else {
            column.to_string()
        };
        query = query.order_by(&column, params.list.order);

        let name_column = if qualify { "sessions.name" } else { "name" };
        query = query
            .filter_contains(name_column, params.list.name.as_deref())
            .paginate(params.list.limit, params.list.offset);

        query
            .fetch_all::<Session>(&self.db)
            .await
            .map_err(ApiError::Database)
    }

    /// Partial patch; absent fields keep their prior values.
    pub async fn update(
        &self,
        id: i64,
        changes: UpdateSessionRequest,
    ) -> Result<Session, ApiError> {
        self.get_by_id(id).await?;

        let mut sets: Vec<&str> = Vec::new();
        let mut binds: Vec<BindValue> = Vec::new();

        if let Some(name) = changes.name {
            sets.push("name = ?");
            binds.push(BindValue::Text(name));
        }
        if let Some(description) = changes.description {
            sets.push("description = ?");
            binds.push(BindValue::Text(description));
        }
        if let Some(note) = changes.note {
            sets.push("note = ?");
            binds.push(BindValue::Text(note));
        }
        if let Some(duration_minutes) = changes.duration_minutes {
            sets.push("duration_minutes = ?");
            binds.push(BindValue::Int(duration_minutes));
        }

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        sets.push("updated_at = ?");
        binds.push(BindValue::Text(chrono::Utc::now().to_rfc3339()));

        let sql = format!("UPDATE sessions SET {} WHERE id = ?", sets.join(", "));

        let mut query = sqlx::query(&sql);
        for bind in binds {
            query = bind.bind_to(query);
        }

        query
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(ApiError::Database)?;

        info!("Updated session {}", id);

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(ApiError::Database)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Session not found"));
        }

        info!("Deleted session {}", id);

        Ok(())
    }
}

fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    error.to_string().contains("FOREIGN KEY constraint failed")
}
