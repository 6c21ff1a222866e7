// Generic list-query construction: scoping, filters, ordering, pagination

use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Typed bind value for dynamically assembled statements. SQLite applies
/// column affinity loosely, so booleans and integers must not be bound as text.
#[derive(Debug, Clone)]
pub enum BindValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl BindValue {
    pub fn bind_to<'q>(
        self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            BindValue::Int(value) => query.bind(value),
            BindValue::Bool(value) => query.bind(value),
            BindValue::Text(value) => query.bind(value),
        }
    }
}

/// Validated pagination/sort parameters shared by every list endpoint.
/// `order_by` is already resolved to a column name from the resource's
/// allow-list; `name` is the raw substring filter.
#[derive(Debug)]
pub struct ListParams {
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order_by: Option<&'static str>,
    pub order: SortOrder,
}

/// Builder for deterministic reads against one resource collection.
///
/// Column names always come from the services or from validated allow-lists,
/// never from request input; values are always bound.
pub struct ListQuery {
    select: String,
    conditions: Vec<String>,
    binds: Vec<BindValue>,
    order_column: String,
    tie_break: String,
    order: SortOrder,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl ListQuery {
    pub fn new(select: impl Into<String>) -> Self {
        Self {
            select: select.into(),
            conditions: Vec::new(),
            binds: Vec::new(),
            order_column: "created_at".to_string(),
            tie_break: "id".to_string(),
            order: SortOrder::Desc,
            limit: None,
            offset: None,
        }
    }

    /// Mandatory parent scoping (user_id / project_id / session_id).
    pub fn scope(mut self, column: &str, id: i64) -> Self {
        self.conditions.push(format!("{} = ?", column));
        self.binds.push(BindValue::Int(id));
        self
    }

    /// Applied only when the flag was explicitly provided; `None` must not
    /// filter on the column at all.
    pub fn filter_bool(mut self, column: &str, value: Option<bool>) -> Self {
        if let Some(value) = value {
            self.conditions.push(format!("{} = ?", column));
            self.binds.push(BindValue::Bool(value));
        }
        self
    }

    /// Case-insensitive substring match (SQLite LIKE is ASCII
    /// case-insensitive by default).
    pub fn filter_contains(mut self, column: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.conditions.push(format!("{} LIKE ?", column));
            self.binds.push(BindValue::Text(format!("%{}%", value)));
        }
        self
    }

    pub fn order_by(mut self, column: &str, order: SortOrder) -> Self {
        self.order_column = column.to_string();
        self.order = order;
        self
    }

    /// Secondary sort key, keeping results deterministic when rows share the
    /// primary sort value. Defaults to `id`.
    pub fn tie_break(mut self, column: &str) -> Self {
        self.tie_break = column.to_string();
        self
    }

    pub fn paginate(mut self, limit: Option<i64>, offset: Option<i64>) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    pub fn to_sql(&self) -> String {
        let mut sql = self.select.clone();

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }

        sql.push_str(&format!(
            " ORDER BY {} {}, {} {}",
            self.order_column,
            self.order.as_sql(),
            self.tie_break,
            self.order.as_sql()
        ));

        // limit/offset are validated non-negative integers
        match (self.limit, self.offset) {
            (Some(limit), Some(offset)) => {
                sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset))
            }
            (Some(limit), None) => sql.push_str(&format!(" LIMIT {}", limit)),
            // SQLite accepts OFFSET only after a LIMIT clause; -1 is unbounded
            (None, Some(offset)) => sql.push_str(&format!(" LIMIT -1 OFFSET {}", offset)),
            (None, None) => {}
        }

        sql
    }

    pub async fn fetch_all<T>(self, pool: &SqlitePool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let sql = self.to_sql();
        let mut query = sqlx::query(&sql);
        for bind in self.binds {
            query = bind.bind_to(query);
        }
        let rows = query.fetch_all(pool).await?;
        rows.iter().map(T::from_row).collect()
    }
}
