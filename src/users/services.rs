use super::models::{NewUser, UpdateUserRequest, User};
use crate::common::{ApiError, BindValue, ListQuery};
use sqlx::SqlitePool;
use tracing::info;

pub struct UsersService {
    db: SqlitePool,
}

impl UsersService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Find-or-create keyed on email. Returns the row and whether it was
    /// inserted; callers map that to 201/200.
    pub async fn create(&self, user: NewUser) -> Result<(User, bool), ApiError> {
        if let Some(existing) = self.find_by_email(&user.email).await? {
            return Ok((existing, false));
        }

        let now = chrono::Utc::now().to_rfc3339();

        let insert = sqlx::query(
            r#"
            INSERT INTO users (nickname, name, picture, email, email_verified, sub, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.nickname)
        .bind(&user.name)
        .bind(&user.picture)
        .bind(&user.email)
        .bind(user.email_verified)
        .bind(&user.sub)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await;

        match insert {
            Ok(done) => {
                let id = done.last_insert_rowid();
                info!("Created user {} ({})", user.email, id);
                Ok((self.get_by_id(id).await?, true))
            }
            // A concurrent create on the same email loses the race to the
            // unique constraint; return the row that won.
            Err(e) if is_unique_violation(&e, "users.email") => {
                match self.find_by_email(&user.email).await? {
                    Some(existing) => Ok((existing, false)),
                    None => Err(ApiError::Database(e)),
                }
            }
            Err(e) if is_unique_violation(&e, "users.sub") => {
                Err(ApiError::validation("body.sub", "Sub already in use"))
            }
            Err(e) => Err(ApiError::Database(e)),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, nickname, name, picture, email, email_verified, sub, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::Database)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, nickname, name, picture, email, email_verified, sub, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound("User not found"))
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        ListQuery::new(
            "SELECT id, nickname, name, picture, email, email_verified, sub, created_at, updated_at FROM users",
        )
        .fetch_all::<User>(&self.db)
        .await
        .map_err(ApiError::Database)
    }

    /// Partial patch; absent fields keep their prior values.
    pub async fn update(&self, id: i64, changes: UpdateUserRequest) -> Result<User, ApiError> {
        self.get_by_id(id).await?;

        let mut sets: Vec<&str> = Vec::new();
        let mut binds: Vec<BindValue> = Vec::new();

        if let Some(nickname) = changes.nickname {
            sets.push("nickname = ?");
            binds.push(BindValue::Text(nickname));
        }
        if let Some(name) = changes.name {
            sets.push("name = ?");
            binds.push(BindValue::Text(name));
        }
        if let Some(picture) = changes.picture {
            sets.push("picture = ?");
            binds.push(BindValue::Text(picture));
        }
        if let Some(email) = changes.email {
            sets.push("email = ?");
            binds.push(BindValue::Text(email));
        }
        if let Some(email_verified) = changes.email_verified {
            sets.push("email_verified = ?");
            binds.push(BindValue::Bool(email_verified));
        }
        if let Some(sub) = changes.sub {
            sets.push("sub = ?");
            binds.push(BindValue::Text(sub));
        }

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        sets.push("updated_at = ?");
        binds.push(BindValue::Text(chrono::Utc::now().to_rfc3339()));

        let sql = format!("UPDATE users SET {} WHERE id = ?", sets.join(", "));

        let mut query = sqlx::query(&sql);
        for bind in binds {
            query = bind.bind_to(query);
        }

        query.bind(id).execute(&self.db).await.map_err(|e| {
            if is_unique_violation(&e, "users.email") {
                ApiError::validation("body.email", "Email already in use")
            } else if is_unique_violation(&e, "users.sub") {
                ApiError::validation("body.sub", "Sub already in use")
            } else {
                ApiError::Database(e)
            }
        })?;

        info!("Updated user {}", id);

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(ApiError::Database)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("User not found"));
        }

        info!("Deleted user {}", id);

        Ok(())
    }
}

fn is_unique_violation(error: &sqlx::Error, column: &str) -> bool {
    let text = error.to_string();
    text.contains("UNIQUE constraint failed") && text.contains(column)
}
