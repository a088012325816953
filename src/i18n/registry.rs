//! Source of truth for which languages exist and which one is the default.

use sqlx::Sqlite;

use crate::db::Language;
use crate::error::{AppError, AppResult};

/// All registered languages, ordered by id (registration order).
pub async fn list<'e, E>(executor: E) -> AppResult<Vec<Language>>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let languages = sqlx::query_as::<_, Language>(
        "SELECT id, code, name, is_default FROM languages ORDER BY id",
    )
    .fetch_all(executor)
    .await?;
    Ok(languages)
}

/// Resolve a request-scoped language selector to its registry row.
pub async fn get_by_code<'e, E>(executor: E, code: &str) -> AppResult<Language>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Language>(
        "SELECT id, code, name, is_default FROM languages WHERE code = ?1",
    )
    .bind(code)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Language '{}' not found", code)))
}

/// The language flagged as default.
///
/// Zero defaults is a fatal precondition failure for fan-out creates. More
/// than one default is a data-quality problem in the seed data; the first one
/// wins and a warning is logged.
pub async fn get_default<'e, E>(executor: E) -> AppResult<Language>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let defaults = sqlx::query_as::<_, Language>(
        "SELECT id, code, name, is_default FROM languages WHERE is_default = 1 ORDER BY id",
    )
    .fetch_all(executor)
    .await?;

    if defaults.len() > 1 {
        tracing::warn!(
            count = defaults.len(),
            "multiple languages are flagged as default; using the first"
        );
    }

    defaults.into_iter().next().ok_or_else(|| {
        AppError::InconsistentState("No default language is configured".to_string())
    })
}
