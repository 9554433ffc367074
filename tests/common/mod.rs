//! Shared fixtures: a sample schema of two related entities.
//!
//! Integration tests need a running PostgreSQL instance reachable through the
//! `DATABASE_URL` environment variable; they skip themselves when it is not
//! set. Tests touching the shared tables serialize behind [`DB_LOCK`].

#![allow(dead_code)]

use basecrud::prelude::*;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Serializes integration tests that share the fixture tables.
pub static DB_LOCK: Mutex<()> = Mutex::const_new(());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub region: String,
}

impl Entity for Team {
    type Id = Uuid;

    fn table_name() -> &'static str {
        "crud_teams"
    }

    fn primary_key_field() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "name", "region"]
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(self.id).bind(&self.name).bind(&self.region)
    }

    fn create_table_sql() -> String {
        "CREATE TABLE IF NOT EXISTS crud_teams (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            region TEXT NOT NULL
        )"
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: Uuid,
    pub gamertag: String,
    pub role: String,
    pub rating: Option<i32>,
    pub team_id: Option<Uuid>,
}

impl Entity for Player {
    type Id = Uuid;

    fn table_name() -> &'static str {
        "crud_players"
    }

    fn primary_key_field() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "gamertag", "role", "rating", "team_id"]
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id)
            .bind(&self.gamertag)
            .bind(&self.role)
            .bind(self.rating)
            .bind(self.team_id)
    }

    fn create_table_sql() -> String {
        "CREATE TABLE IF NOT EXISTS crud_players (
            id UUID PRIMARY KEY,
            gamertag TEXT NOT NULL,
            role TEXT NOT NULL,
            rating INTEGER,
            team_id UUID REFERENCES crud_teams(id) ON DELETE SET NULL
        )"
        .to_string()
    }
}

impl Team {
    pub fn new(name: &str, region: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            region: region.to_string(),
        }
    }
}

impl Player {
    pub fn new(gamertag: &str, role: &str, rating: Option<i32>, team_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            gamertag: gamertag.to_string(),
            role: role.to_string(),
            rating,
            team_id,
        }
    }
}

/// Connect through `DATABASE_URL`, or `None` when unavailable.
pub async fn try_pool() -> Option<PgPool> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("skipping: DATABASE_URL not set");
            return None;
        }
    };

    match PgPool::connect(&url).await {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("skipping: could not connect to DATABASE_URL: {}", e);
            None
        }
    }
}

/// Drop and recreate the fixture tables.
pub async fn reset_schema(pool: &PgPool) {
    sqlx::query(&Player::drop_table_sql())
        .execute(pool)
        .await
        .expect("drop crud_players");
    sqlx::query(&Team::drop_table_sql())
        .execute(pool)
        .await
        .expect("drop crud_teams");

    sqlx::query(&Team::create_table_sql())
        .execute(pool)
        .await
        .expect("create crud_teams");
    sqlx::query(&Player::create_table_sql())
        .execute(pool)
        .await
        .expect("create crud_players");
}

pub struct Fixture {
    pub teams: GenericRepository<Team>,
    pub players: GenericRepository<Player>,
    pub sharks: Team,
    pub wolves: Team,
    pub rays: Team,
}

/// Three teams, five players (one of them teamless), written through the
/// repositories themselves.
pub async fn populate(pool: &PgPool) -> Fixture {
    reset_schema(pool).await;

    let teams = GenericRepository::<Team>::new(pool.clone());
    let players = GenericRepository::<Player>::new(pool.clone());

    let sharks = teams
        .create(Team::new("Harbor Sharks", "NA"))
        .await
        .expect("create sharks");
    let wolves = teams
        .create(Team::new("Iron Wolves", "EU"))
        .await
        .expect("create wolves");
    let rays = teams
        .create(Team::new("Delta Rays", "APAC"))
        .await
        .expect("create rays");

    for player in [
        Player::new("stormcall", "support", Some(91), Some(sharks.id)),
        Player::new("quickfang", "entry", Some(84), Some(sharks.id)),
        Player::new("bulwark", "anchor", Some(77), Some(wolves.id)),
        Player::new("nightjar", "flex", None, Some(rays.id)),
        Player::new("driftwood", "entry", Some(68), None),
    ] {
        players.create(player).await.expect("create player");
    }

    Fixture {
        teams,
        players,
        sharks,
        wolves,
        rays,
    }
}
