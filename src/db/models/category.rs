use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::i18n::{FieldMap, TranslatableSchema};

/// Translatable fields carried by the overlay, not by this table.
pub const CATEGORY_SCHEMA: TranslatableSchema = TranslatableSchema {
    entity_type: "category",
    fields: &["name", "description"],
};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewCategory {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    /// Path string persisted by the external upload service.
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
}

impl NewCategory {
    pub fn translated_fields(&self) -> FieldMap {
        let mut values = FieldMap::new();
        values.insert("name".to_string(), self.name.clone());
        if let Some(description) = &self.description {
            values.insert("description".to_string(), description.clone());
        }
        values
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
}

impl UpdateCategory {
    /// Only the fields present in the request; omitted fields stay untouched.
    pub fn translated_fields(&self) -> FieldMap {
        let mut values = FieldMap::new();
        if let Some(name) = &self.name {
            values.insert("name".to_string(), name.clone());
        }
        if let Some(description) = &self.description {
            values.insert("description".to_string(), description.clone());
        }
        values
    }
}
