use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::i18n::{FieldMap, TranslatableSchema};

pub const PRODUCT_SCHEMA: TranslatableSchema = TranslatableSchema {
    entity_type: "product",
    fields: &["name", "slug", "description"],
};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub category_id: Option<i64>,
    pub stock_quantity: i64,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Product row plus its main image url, used by the category listing.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ProductWithMainImage {
    pub id: i64,
    pub category_id: Option<i64>,
    pub stock_quantity: i64,
    pub is_active: bool,
    pub is_featured: bool,
    pub main_image: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub stock_quantity: Option<i64>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

impl NewProduct {
    pub fn translated_fields(&self) -> FieldMap {
        let mut values = FieldMap::new();
        values.insert("name".to_string(), self.name.clone());
        if let Some(slug) = &self.slug {
            values.insert("slug".to_string(), slug.clone());
        }
        if let Some(description) = &self.description {
            values.insert("description".to_string(), description.clone());
        }
        values
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub stock_quantity: Option<i64>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

impl UpdateProduct {
    pub fn translated_fields(&self) -> FieldMap {
        let mut values = FieldMap::new();
        if let Some(name) = &self.name {
            values.insert("name".to_string(), name.clone());
        }
        if let Some(slug) = &self.slug {
            values.insert("slug".to_string(), slug.clone());
        }
        if let Some(description) = &self.description {
            values.insert("description".to_string(), description.clone());
        }
        values
    }
}
