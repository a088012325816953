use serde::Serialize;

/// One overlay row: `(entity_type, entity_id, field, language_id) -> content`.
///
/// `(entity_type, entity_id)` is a weak reference to the owning row. There is
/// no foreign key across entity tables, so the owning module must delete these
/// rows in the same transaction that removes the owner.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct DynamicTranslation {
    pub id: i64,
    pub entity_type: String,
    pub entity_id: i64,
    pub field: String,
    pub language_id: i64,
    pub content: String,
}

/// An overlay row joined with its language, as consumed by the projection
/// layer. Rows whose language has been deleted never appear here.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TranslatedRow {
    pub language_code: String,
    pub field: String,
    pub content: String,
}
