//! # Basic Usage Example
//!
//! Demonstrates the fundamental concepts of basecrud:
//! - Implementing `Entity` for a model
//! - Binding a repository to an entity type and a pool
//! - The CRUD surface (create, get, filter, get_all, update, delete)
//!
//! Run against a local PostgreSQL instance:
//! `cargo run --example basic_usage`

use basecrud::prelude::*;
use serde_json::json;

/// A simple user model demonstrating basic field types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl Entity for User {
    type Id = Uuid;

    fn table_name() -> &'static str {
        "users"
    }

    fn primary_key_field() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "name", "email", "age"]
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id)
            .bind(&self.name)
            .bind(&self.email)
            .bind(self.age)
    }

    fn create_table_sql() -> String {
        "CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            age INTEGER
        )"
        .to_string()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("basecrud basic usage");
    println!("====================");

    // 1. Database setup: BASECRUD_CONFIG / basecrud.toml, or a local default.
    let config = DatabaseConfig::load().unwrap_or_else(|_| {
        DatabaseConfig::new(
            "localhost".to_string(),
            5432,
            "basecrud".to_string(),
            "postgres".to_string(),
            "password".to_string(),
            1,    // min_connections
            5,    // max_connections
            30,   // connection_timeout_seconds
            600,  // idle_timeout_seconds
            3600, // max_lifetime_seconds
        )
    });

    let pool = config.connect().await?;
    println!("connected to {}", config.host);

    sqlx::query(&User::create_table_sql()).execute(&pool).await?;

    // 2. Bind a repository to the entity type.
    let users = GenericRepository::<User>::new(pool.clone());

    // 3. CREATE
    let user = User {
        id: Uuid::new_v4(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        age: Some(34),
    };
    let created = users.create(user).await?;
    println!("created: {} <{}>", created.name, created.email);

    // 4. GET by criteria
    let found = users
        .get(QueryBuilder::new().filter_by("email", json!("john@example.com")))
        .await?;
    println!("found: {:?}", found.as_ref().map(|u| &u.name));

    // 5. FILTER with pagination and an expression
    let adults = users
        .filter(
            QueryBuilder::new()
                .filter(QueryFilter::gte("age", json!(18)))
                .offset(0)
                .limit(10),
        )
        .await?;
    println!("adults on first page: {}", adults.len());

    // 6. UPDATE (same write as create, keyed on identity)
    if let Some(mut u) = found {
        u.name = "John Q. Doe".to_string();
        let updated = users.update(u).await?;
        println!("updated: {}", updated.name);

        // 7. DELETE
        let removed = users.delete(updated).await?;
        println!("removed: {}", removed.name);
    }

    println!("total users: {}", users.count().await?);

    Ok(())
}
