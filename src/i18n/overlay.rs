//! The generalized overlay store: `(entity_type, entity_id, field,
//! language_id) -> content`, with upsert semantics keyed on the compound
//! unique index.

use sqlx::{Sqlite, SqlitePool, Transaction};

use super::FieldMap;
use crate::db::{DatabaseError, DynamicTranslation, TranslatedRow};

pub struct OverlayStore;

impl OverlayStore {
    /// Upsert one batch of field values for `(entity_id, language_id)`.
    ///
    /// Each field is written with a single conditional statement targeting the
    /// compound unique index, so a concurrent writer can never observe a
    /// missing row and insert a duplicate, and a reader always sees either
    /// the old or the new content. The whole batch runs inside the caller's
    /// transaction: it commits completely or not at all.
    pub async fn set_many(
        tx: &mut Transaction<'_, Sqlite>,
        entity_type: &str,
        entity_id: i64,
        language_id: i64,
        values: &FieldMap,
    ) -> Result<(), DatabaseError> {
        for (field, content) in values {
            sqlx::query(
                r#"
                INSERT INTO dynamic_translations (entity_type, entity_id, field, language_id, content)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT (entity_type, entity_id, field, language_id)
                DO UPDATE SET content = excluded.content
                "#,
            )
            .bind(entity_type)
            .bind(entity_id)
            .bind(field)
            .bind(language_id)
            .bind(content)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    /// Every field translated so far for the entity in one language.
    ///
    /// An entity with no overlay rows for the language yields an empty map,
    /// never an error; callers default missing fields to the empty string.
    pub async fn get(
        pool: &SqlitePool,
        entity_type: &str,
        entity_id: i64,
        language_id: i64,
    ) -> Result<FieldMap, DatabaseError> {
        let rows = sqlx::query_as::<_, DynamicTranslation>(
            r#"
            SELECT id, entity_type, entity_id, field, language_id, content
            FROM dynamic_translations
            WHERE entity_type = ?1 AND entity_id = ?2 AND language_id = ?3
            "#,
        )
        .bind(entity_type)
        .bind(entity_id)
        .bind(language_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(|row| (row.field, row.content)).collect())
    }

    /// Every overlay row for the entity, joined with its language code.
    ///
    /// The join drops rows whose language has since been deleted; the store
    /// keeps no referential integrity between overlay rows and languages, so
    /// such rows are skipped rather than treated as an error.
    pub async fn get_all_languages(
        pool: &SqlitePool,
        entity_type: &str,
        entity_id: i64,
    ) -> Result<Vec<TranslatedRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, TranslatedRow>(
            r#"
            SELECT l.code AS language_code, d.field, d.content
            FROM dynamic_translations d
            JOIN languages l ON l.id = d.language_id
            WHERE d.entity_type = ?1 AND d.entity_id = ?2
            ORDER BY l.id, d.field
            "#,
        )
        .bind(entity_type)
        .bind(entity_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Remove every overlay row for the entity, regardless of language.
    /// Runs in the caller's transaction, alongside the owning row's delete.
    pub async fn delete_all(
        tx: &mut Transaction<'_, Sqlite>,
        entity_type: &str,
        entity_id: i64,
    ) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM dynamic_translations WHERE entity_type = ?1 AND entity_id = ?2")
            .bind(entity_type)
            .bind(entity_id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// Application-level cascade for language deletion: drops every overlay
    /// row in the language so it cannot linger as an orphan.
    pub async fn delete_language(
        tx: &mut Transaction<'_, Sqlite>,
        language_id: i64,
    ) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM dynamic_translations WHERE language_id = ?1")
            .bind(language_id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
