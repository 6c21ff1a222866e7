use super::models::{NewProject, Project, ProjectListParams, UpdateProjectRequest};
use crate::common::{ApiError, BindValue, ListQuery};
use sqlx::SqlitePool;
use tracing::info;

const SELECT_PROJECT: &str = "SELECT id, name, description, color, is_active, track_time, user_id, created_at, updated_at FROM projects";

pub struct ProjectsService {
    db: SqlitePool,
}

impl ProjectsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Find-or-create keyed on the globally unique name. Returns the row and
    /// whether it was inserted; callers map that to 201/200.
    pub async fn create(&self, project: NewProject) -> Result<(Project, bool), ApiError> {
        if let Some(existing) = self.find_by_name(&project.name).await? {
            return Ok((existing, false));
        }

        let now = chrono::Utc::now().to_rfc3339();

        let insert = sqlx::query(
            r#"
            INSERT INTO projects (name, description, color, is_active, track_time, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.color)
        .bind(project.is_active)
        .bind(project.track_time)
        .bind(project.user_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await;

        match insert {
            Ok(done) => {
                let id = done.last_insert_rowid();
                info!("Created project {} ({})", project.name, id);
                Ok((self.get_by_id(id).await?, true))
            }
            // A concurrent create on the same name loses the race to the
            // unique constraint; return the row that won.
            Err(e) if is_unique_violation(&e, "projects.name") => {
                match self.find_by_name(&project.name).await? {
                    Some(existing) => Ok((existing, false)),
                    None => Err(ApiError::Database(e)),
                }
            }
            Err(e) if is_foreign_key_violation(&e) => Err(ApiError::validation(
                "body.userId",
                "User does not exist",
            )),
            Err(e) => Err(ApiError::Database(e)),
        }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Project>, ApiError> {
        sqlx::query_as::<_, Project>(&format!("{} WHERE name = ?", SELECT_PROJECT))
            .bind(name)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::Database)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Project, ApiError> {
        sqlx::query_as::<_, Project>(&format!("{} WHERE id = ?", SELECT_PROJECT))
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::Database)?
            .ok_or(ApiError::NotFound("Project not found"))
    }

    /// Lists the user's projects with the validated filters, ordering and
    /// pagination applied.
    pub async fn list(&self, params: ProjectListParams) -> Result<Vec<Project>, ApiError> {
        let mut query = ListQuery::new(SELECT_PROJECT)
            .scope("user_id", params.user_id)
            .filter_bool("is_active", params.is_active)
            .filter_bool("track_time", params.track_time)
            .filter_contains("name", params.list.name.as_deref())
            .paginate(params.list.limit, params.list.offset);

        if let Some(column) = params.list.order_by {
            query = query.order_by(column, params.list.order);
        } else {
            query = query.order_by("created_at", params.list.order);
        }

        query
            .fetch_all::<Project>(&self.db)
            .await
            .map_err(ApiError::Database)
    }

    /// Partial patch; absent fields keep their prior values.
    pub async fn update(
        &self,
        id: i64,
        changes: UpdateProjectRequest,
    ) -> Result<Project, ApiError> {
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
        if let Some(color) = changes.color {
            sets.push("color = ?");
            binds.push(BindValue::Text(color));
        }
        if let Some(is_active) = changes.is_active {
            sets.push("is_active = ?");
            binds.push(BindValue::Bool(is_active));
        }
        if let Some(track_time) = changes.track_time {
            sets.push("track_time = ?");
            binds.push(BindValue::Bool(track_time));
        }

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        sets.push("updated_at = ?");
        binds.push(BindValue::Text(chrono::Utc::now().to_rfc3339()));

        let sql = format!("UPDATE projects SET {} WHERE id = ?", sets.join(", "));

        let mut query = sqlx::query(&sql);
        for bind in binds {
            query = bind.bind_to(query);
        }

        query.bind(id).execute(&self.db).await.map_err(|e| {
            if is_unique_violation(&e, "projects.name") {
                ApiError::validation("body.name", "Project name already exists")
            } else {
                ApiError::Database(e)
            }
        })?;

        info!("Updated project {}", id);

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(ApiError::Database)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Project not found"));
        }

        info!("Deleted project {}", id);

        Ok(())
    }
}

fn is_unique_violation(error: &sqlx::Error, column: &str) -> bool {
    let text = error.to_string();
    text.contains("UNIQUE constraint failed") && text.contains(column)
}

fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    error.to_string().contains("FOREIGN KEY constraint failed")
}
