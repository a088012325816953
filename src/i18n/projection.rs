//! Pure aggregation of overlay rows into the two view shapes. No store
//! access here; the adapter fetches, these functions reshape.

use serde::Serialize;

use super::{adapter::TranslatableSchema, FieldMap, TranslationsMap};
use crate::db::TranslatedRow;

/// Base record plus its single-language field values.
#[derive(Debug, Serialize)]
pub struct Translated<T> {
    #[serde(flatten)]
    pub entity: T,
    pub translated: FieldMap,
}

/// Base record plus every language's field values, for admin edit views.
#[derive(Debug, Serialize)]
pub struct WithTranslations<T> {
    #[serde(flatten)]
    pub entity: T,
    pub translations: TranslationsMap,
}

/// Single-language flat object: every declared field present, missing or
/// undeclared rows resolved against the schema ("" for absent fields).
pub fn flatten(schema: TranslatableSchema, mut rows: FieldMap) -> FieldMap {
    schema
        .fields
        .iter()
        .map(|field| {
            let content = rows.remove(*field).unwrap_or_default();
            (field.to_string(), content)
        })
        .collect()
}

/// Full nested object, grouped first by language code, then by field name.
/// Rows carrying a field the schema no longer declares are skipped.
pub fn group_by_language(schema: TranslatableSchema, rows: &[TranslatedRow]) -> TranslationsMap {
    let mut grouped = TranslationsMap::new();
    for row in rows {
        if !schema.fields.contains(&row.field.as_str()) {
            continue;
        }
        grouped
            .entry(row.language_code.clone())
            .or_insert_with(|| schema.complete(&FieldMap::new()))
            .insert(row.field.clone(), row.content.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: TranslatableSchema = TranslatableSchema {
        entity_type: "category",
        fields: &["name", "description"],
    };

    fn row(code: &str, field: &str, content: &str) -> TranslatedRow {
        TranslatedRow {
            language_code: code.to_string(),
            field: field.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn flatten_defaults_missing_fields_to_empty() {
        let mut rows = FieldMap::new();
        rows.insert("name".to_string(), "Shoes".to_string());

        let flat = flatten(SCHEMA, rows);
        assert_eq!(flat.get("name").unwrap(), "Shoes");
        assert_eq!(flat.get("description").unwrap(), "");
        assert_eq!(flat.len(), 2);
    }

    #[test]
    fn flatten_drops_undeclared_fields() {
        let mut rows = FieldMap::new();
        rows.insert("name".to_string(), "Shoes".to_string());
        rows.insert("legacy_field".to_string(), "stale".to_string());

        let flat = flatten(SCHEMA, rows);
        assert!(!flat.contains_key("legacy_field"));
    }

    #[test]
    fn group_by_language_nests_language_then_field() {
        let rows = vec![
            row("en", "name", "Shoes"),
            row("en", "description", "Footwear"),
            row("fr", "name", "Chaussures"),
        ];

        let grouped = group_by_language(SCHEMA, &rows);
        assert_eq!(grouped["en"]["name"], "Shoes");
        assert_eq!(grouped["en"]["description"], "Footwear");
        assert_eq!(grouped["fr"]["name"], "Chaussures");
        // fr has no description row yet; projection fills the declared field
        assert_eq!(grouped["fr"]["description"], "");
    }

    #[test]
    fn group_by_language_skips_undeclared_fields() {
        let rows = vec![row("en", "stale", "x")];
        let grouped = group_by_language(SCHEMA, &rows);
        assert!(grouped.is_empty());
    }
}
