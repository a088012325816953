use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i64,
    pub product_id: i64,
    pub url: String,
    pub alt_text: Option<String>,
    pub is_main: bool,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewProductImage {
    pub product_id: i64,
    #[validate(length(min = 1, message = "Url must not be empty"))]
    pub url: String,
    pub alt_text: Option<String>,
    pub is_main: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductImage {
    #[validate(length(min = 1, message = "Url must not be empty"))]
    pub url: Option<String>,
    pub alt_text: Option<String>,
    pub is_main: Option<bool>,
}
