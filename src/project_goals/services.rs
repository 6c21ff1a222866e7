use super::models::{NewProjectGoal, ProjectGoal, ProjectGoalChanges, ProjectGoalListParams};
use crate::common::{ApiError, BindValue, ListQuery};
use sqlx::SqlitePool;
use tracing::info;

const SELECT_GOAL: &str = "SELECT id, name, description, status, project_id, created_at, updated_at FROM project_goals";

pub struct ProjectGoalsService {
    db: SqlitePool,
}

impl ProjectGoalsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Goals are not deduplicated; every create inserts a new row.
    pub async fn create(&self, goal: NewProjectGoal) -> Result<ProjectGoal, ApiError> {
        let now = chrono::Utc::now().to_rfc3339();

        let insert = sqlx::query(
            r#"
            INSERT INTO project_goals (name, description, status, project_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&goal.name)
        .bind(&goal.description)
        .bind(goal.status.as_str())
        .bind(goal.project_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await;

        match insert {
            Ok(done) => {
                let id = done.last_insert_rowid();
                info!("Created project goal {} ({})", goal.name, id);
                self.get_by_id(id).await
            }
            Err(e) if is_foreign_key_violation(&e) => Err(ApiError::validation(
                "body.projectId",
                "Project does not exist",
            )),
            Err(e) => Err(ApiError::Database(e)),
        }
    }

    /// Multi-row insert used for seeding; all rows share one timestamp.
    pub async fn bulk_create(&self, goals: Vec<NewProjectGoal>) -> Result<u64, ApiError> {
        if goals.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().to_rfc3339();

        let placeholders = vec!["(?, ?, ?, ?, ?, ?)"; goals.len()].join(", ");
        let sql = format!(
            "INSERT INTO project_goals (name, description, status, project_id, created_at, updated_at) VALUES {}",
            placeholders
        );

        let mut query = sqlx::query(&sql);
        for goal in &goals {
            query = query
                .bind(&goal.name)
                .bind(&goal.description)
                .bind(goal.status.as_str())
                .bind(goal.project_id)
                .bind(&now)
                .bind(&now);
        }

        let result = query.execute(&self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                ApiError::validation("body.projectId", "Project does not exist")
            } else {
                ApiError::Database(e)
            }
        })?;

        info!("Bulk-created {} project goals", result.rows_affected());

        Ok(result.rows_affected())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ProjectGoal, ApiError> {
        sqlx::query_as::<_, ProjectGoal>(&format!("{} WHERE id = ?", SELECT_GOAL))
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::Database)?
            .ok_or(ApiError::NotFound("Project Goal not found"))
    }

    /// Lists the project's goals with filters, ordering and pagination applied.
    pub async fn list(&self, params: ProjectGoalListParams) -> Result<Vec<ProjectGoal>, ApiError> {
        let column = params.list.order_by.unwrap_or("created_at");

        ListQuery::new(SELECT_GOAL)
            .scope("project_id", params.project_id)
            .filter_contains("name", params.list.name.as_deref())
            .order_by(column, params.list.order)
            .paginate(params.list.limit, params.list.offset)
            .fetch_all::<ProjectGoal>(&self.db)
            .await
            .map_err(ApiError::Database)
    }

    /// Partial patch; absent fields keep their prior values.
    pub async fn update(&self, id: i64, changes: ProjectGoalChanges) -> Result<ProjectGoal, ApiError> {
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
        if let Some(status) = changes.status {
            sets.push("status = ?");
            binds.push(BindValue::Text(status.as_str().to_string()));
        }

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        sets.push("updated_at = ?");
        binds.push(BindValue::Text(chrono::Utc::now().to_rfc3339()));

        let sql = format!("UPDATE project_goals SET {} WHERE id = ?", sets.join(", "));

        let mut query = sqlx::query(&sql);
        for bind in binds {
            query = bind.bind_to(query);
        }

        query
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(ApiError::Database)?;

        info!("Updated project goal {}", id);

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM project_goals WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(ApiError::Database)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Project Goal not found"));
        }

        info!("Deleted project goal {}", id);

        Ok(())
    }
}

fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    error.to_string().contains("FOREIGN KEY constraint failed")
}
