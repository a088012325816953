use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::i18n::{FieldMap, TranslatableSchema};

pub const CONTACT_INFO_SCHEMA: TranslatableSchema = TranslatableSchema {
    entity_type: "contact_info",
    fields: &["address"],
};

/// Singleton: at most one row exists.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ContactInfo {
    pub id: i64,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewContactInfo {
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
}

impl NewContactInfo {
    pub fn translated_fields(&self) -> FieldMap {
        let mut values = FieldMap::new();
        if let Some(address) = &self.address {
            values.insert("address".to_string(), address.clone());
        }
        values
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContactInfo {
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
}

impl UpdateContactInfo {
    pub fn translated_fields(&self) -> FieldMap {
        let mut values = FieldMap::new();
        if let Some(address) = &self.address {
            values.insert("address".to_string(), address.clone());
        }
        values
    }
}
