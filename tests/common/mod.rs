use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tempfile::TempDir;

use showcase_backend::db::MIGRATOR;

/// An on-disk SQLite database in a temp directory. In-memory SQLite gives
/// every pool connection its own database, so a file is required for anything
/// that exercises more than one connection.
pub struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub async fn setup() -> TestDb {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("test.db");

    let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", db_path.display()))
        .expect("parse sqlite url")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("connect to test database");

    MIGRATOR.run(&pool).await.expect("run migrations");

    TestDb { pool, _dir: dir }
}
