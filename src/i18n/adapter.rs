//! Generic binding between one translatable entity type and the overlay
//! store. Each entity module declares a schema once; this engine replaces the
//! per-entity fan-out/upsert/group-by-language code that would otherwise be
//! repeated for every resource.

use sqlx::{Sqlite, SqlitePool, Transaction};

use super::{overlay::OverlayStore, projection, registry, FieldMap, TranslationsMap};
use crate::error::AppResult;

/// A translatable entity type: its overlay tag and its declared field set.
/// Both are opaque strings as far as the store is concerned.
#[derive(Debug, Clone, Copy)]
pub struct TranslatableSchema {
    pub entity_type: &'static str,
    pub fields: &'static [&'static str],
}

impl TranslatableSchema {
    /// Every declared field, with unsupplied ones defaulted to "".
    /// Fields not in the declared set are dropped.
    pub fn complete(&self, supplied: &FieldMap) -> FieldMap {
        self.fields
            .iter()
            .map(|field| {
                let content = supplied.get(*field).cloned().unwrap_or_default();
                (field.to_string(), content)
            })
            .collect()
    }
}

pub struct EntityTranslations {
    schema: TranslatableSchema,
}

impl EntityTranslations {
    pub const fn new(schema: TranslatableSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> TranslatableSchema {
        self.schema
    }

    /// Fan-out: write one complete field set per registered language, so no
    /// language is ever missing a row later. Unsupplied fields become "".
    ///
    /// Runs inside the transaction that inserts the owning entity; readers
    /// never observe an entity translated into only some of the registered
    /// languages as a committed state. With zero registered languages this is
    /// a no-op.
    pub async fn on_create(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        entity_id: i64,
        initial_values: &FieldMap,
    ) -> AppResult<()> {
        let languages = registry::list(&mut **tx).await?;
        let values = self.schema.complete(initial_values);
        for language in &languages {
            OverlayStore::set_many(tx, self.schema.entity_type, entity_id, language.id, &values)
                .await?;
        }
        Ok(())
    }

    /// Upsert one language's values. Only the supplied fields are written;
    /// omitted fields keep their stored content.
    pub async fn on_update(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        entity_id: i64,
        language_code: &str,
        partial_values: &FieldMap,
    ) -> AppResult<()> {
        let language = registry::get_by_code(&mut **tx, language_code).await?;
        if partial_values.is_empty() {
            return Ok(());
        }
        OverlayStore::set_many(
            tx,
            self.schema.entity_type,
            entity_id,
            language.id,
            partial_values,
        )
        .await?;
        Ok(())
    }

    /// Remove the entity's overlay rows, in the same transaction as the
    /// entity row itself. Must run before or with the owning delete so no
    /// orphan rows remain discoverable.
    pub async fn on_delete(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        entity_id: i64,
    ) -> AppResult<()> {
        OverlayStore::delete_all(tx, self.schema.entity_type, entity_id).await?;
        Ok(())
    }

    /// Single-language view: every declared field present, missing ones "".
    ///
    /// A language registered after the entity was created has no overlay rows
    /// yet; the projection degrades to empty strings instead of failing.
    pub async fn project(
        &self,
        pool: &SqlitePool,
        entity_id: i64,
        language_code: &str,
    ) -> AppResult<FieldMap> {
        let language = registry::get_by_code(pool, language_code).await?;
        let rows =
            OverlayStore::get(pool, self.schema.entity_type, entity_id, language.id).await?;
        Ok(projection::flatten(self.schema, rows))
    }

    /// All-language view for admin edit screens: `language_code -> fields`.
    pub async fn project_all(&self, pool: &SqlitePool, entity_id: i64) -> AppResult<TranslationsMap> {
        let rows = OverlayStore::get_all_languages(pool, self.schema.entity_type, entity_id).await?;
        Ok(projection::group_by_language(self.schema, &rows))
    }
}
