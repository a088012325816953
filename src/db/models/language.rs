use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub is_default: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewLanguage {
    #[validate(length(min = 2, max = 8, message = "Code must be 2 to 8 characters long"))]
    pub code: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub is_default: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLanguage {
    #[validate(length(min = 2, max = 8, message = "Code must be 2 to 8 characters long"))]
    pub code: Option<String>,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub is_default: Option<bool>,
}
