use sqlx::SqlitePool;

use crate::config;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub env: config::Config,
}

impl AppState {
    pub fn new(db: SqlitePool, env: config::Config) -> Self {
        Self { db, env }
    }
}
