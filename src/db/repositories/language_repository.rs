use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::db::error::DatabaseError;
use crate::db::models::{Language, NewLanguage, UpdateLanguage};

pub struct LanguageRepository;

impl LanguageRepository {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Language>, DatabaseError> {
        let languages = sqlx::query_as::<_, Language>(
            "SELECT id, code, name, is_default FROM languages ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(languages)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Language>, DatabaseError> {
        let language = sqlx::query_as::<_, Language>(
            "SELECT id, code, name, is_default FROM languages WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(language)
    }

    pub async fn create(
        tx: &mut Transaction<'_, Sqlite>,
        data: &NewLanguage,
    ) -> Result<Language, DatabaseError> {
        let is_default = data.is_default.unwrap_or(false);

        // At most one default: claiming the flag releases it everywhere else.
        if is_default {
            sqlx::query("UPDATE languages SET is_default = 0")
                .execute(&mut **tx)
                .await?;
        }

        let language = sqlx::query_as::<_, Language>(
            r#"
            INSERT INTO languages (code, name, is_default)
            VALUES (?1, ?2, ?3)
            RETURNING id, code, name, is_default
            "#,
        )
        .bind(&data.code)
        .bind(&data.name)
        .bind(is_default)
        .fetch_one(&mut **tx)
        .await
        .map_err(DatabaseError::from_write)?;

        Ok(language)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        data: &UpdateLanguage,
    ) -> Result<Language, DatabaseError> {
        if data.is_default == Some(true) {
            sqlx::query("UPDATE languages SET is_default = 0 WHERE id != ?1")
                .bind(id)
                .execute(&mut **tx)
                .await?;
        }

        let language = sqlx::query_as::<_, Language>(
            r#"
            UPDATE languages
            SET code = COALESCE(?1, code),
                name = COALESCE(?2, name),
                is_default = COALESCE(?3, is_default)
            WHERE id = ?4
            RETURNING id, code, name, is_default
            "#,
        )
        .bind(&data.code)
        .bind(&data.name)
        .bind(data.is_default)
        .bind(id)
        .fetch_one(&mut **tx)
        .await
        .map_err(DatabaseError::from_write)?;

        Ok(language)
    }

    pub async fn delete(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM languages WHERE id = ?1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
