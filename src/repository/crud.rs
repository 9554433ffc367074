//! CRUD implementation for the generic repository
//!
//! Every operation is a direct forwarding call into sqlx; failures surface
//! with table/operation context and the sqlx error as source.

use crate::errors::CrudError;
use crate::query_builder::QueryBuilder;
use crate::repository::core::GenericRepository;
use crate::traits::crud::BaseCrud;
use crate::traits::entity::{Entity, PgQueryAs};
use async_trait::async_trait;
use sqlx::Row;

/// Page size applied when a `filter` query carries no explicit limit.
pub const DEFAULT_FILTER_LIMIT: i64 = 100;

/// Apply the default page size when the caller set no limit.
fn with_default_limit(query: QueryBuilder) -> QueryBuilder {
    if query.has_limit() {
        query
    } else {
        query.limit(DEFAULT_FILTER_LIMIT)
    }
}

#[async_trait]
impl<T: Entity> BaseCrud for GenericRepository<T> {
    type Model = T;

    async fn create(&self, instance: T) -> Result<T, CrudError> {
        let sql = T::upsert_sql();
        tracing::debug!(table = T::table_name(), "create");

        // RETURNING * refreshes fields the database derived during the write.
        let created = instance
            .bind_columns(sqlx::query_as::<_, T>(&sql))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CrudError::database_operation(T::table_name(), "create", e))?;

        Ok(created)
    }

    async fn get(&self, query: QueryBuilder) -> Result<Option<T>, CrudError> {
        let mut results = self.fetch_filtered(query.limit(1)).await?;
        Ok(results.pop())
    }

    async fn filter(&self, query: QueryBuilder) -> Result<Vec<T>, CrudError> {
        self.fetch_filtered(with_default_limit(query)).await
    }

    async fn get_all(&self) -> Result<Vec<T>, CrudError> {
        let sql = T::select_base_sql();
        let results = sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CrudError::database_operation(T::table_name(), "get_all", e))?;
        Ok(results)
    }

    async fn update(&self, instance: T) -> Result<T, CrudError> {
        // Same write as create: the upsert keys on identity, so a record that
        // already holds its primary key becomes an update.
        self.create(instance).await
    }

    async fn delete(&self, instance: T) -> Result<T, CrudError> {
        let sql = T::delete_by_id_sql();
        tracing::debug!(table = T::table_name(), "delete");

        sqlx::query(&sql)
            .bind(instance.id())
            .execute(&self.pool)
            .await
            .map_err(|e| CrudError::database_operation(T::table_name(), "delete", e))?;

        Ok(instance)
    }

    async fn count(&self) -> Result<i64, CrudError> {
        let sql = T::count_base_sql();
        let row = sqlx::query(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CrudError::database_operation(T::table_name(), "count", e))?;

        let total: i64 = row.get("total");
        Ok(total)
    }
}

impl<T: Entity> GenericRepository<T> {
    /// Run a filtered, ordered, paginated select against the bound table.
    pub(crate) async fn fetch_filtered(&self, query: QueryBuilder) -> Result<Vec<T>, CrudError> {
        let (where_clause, order_clause, limit_clause, params) = query.build();

        let base_sql = T::select_base_sql();
        let mut full_sql = String::with_capacity(
            base_sql.len() + where_clause.len() + order_clause.len() + limit_clause.len() + 3,
        );
        full_sql.push_str(&base_sql);
        if !where_clause.is_empty() {
            full_sql.push(' ');
            full_sql.push_str(&where_clause);
        }
        if !order_clause.is_empty() {
            full_sql.push(' ');
            full_sql.push_str(&order_clause);
        }
        if !limit_clause.is_empty() {
            full_sql.push(' ');
            full_sql.push_str(&limit_clause);
        }

        tracing::debug!(table = T::table_name(), sql = %full_sql, "query");

        let mut sqlx_query = sqlx::query_as::<_, T>(&full_sql);
        for param in params {
            sqlx_query = Self::bind_param(sqlx_query, param);
        }

        sqlx_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CrudError::database_operation(T::table_name(), "query", e))
    }

    /// Bind a JSON parameter value as the closest Postgres type. Strings that
    /// parse as RFC3339 timestamps or UUIDs bind as those types.
    fn bind_param(query: PgQueryAs<'_, T>, param: serde_json::Value) -> PgQueryAs<'_, T> {
        match param {
            serde_json::Value::String(s) => {
                if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                    query.bind(dt.with_timezone(&chrono::Utc))
                } else if let Ok(uuid) = uuid::Uuid::parse_str(&s) {
                    query.bind(uuid)
                } else {
                    query.bind(s)
                }
            }
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                        query.bind(i as i32)
                    } else {
                        query.bind(i)
                    }
                } else if let Some(f) = n.as_f64() {
                    query.bind(f)
                } else {
                    query.bind(n.to_string())
                }
            }
            serde_json::Value::Bool(b) => query.bind(b),
            serde_json::Value::Null => query.bind(Option::<String>::None),
            other => query.bind(other.to_string()),
        }
    }
}
