use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::i18n::{FieldMap, TranslatableSchema};

pub const HOME_SLIDER_SCHEMA: TranslatableSchema = TranslatableSchema {
    entity_type: "home_slider",
    fields: &["title", "sub_title", "cta_text"],
};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct HomeSlider {
    pub id: i64,
    pub image_url: String,
    pub cta_link: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewHomeSlider {
    #[validate(length(min = 1, message = "Image url must not be empty"))]
    pub image_url: String,
    pub cta_link: Option<String>,
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub cta_text: Option<String>,
}

impl NewHomeSlider {
    pub fn translated_fields(&self) -> FieldMap {
        let mut values = FieldMap::new();
        if let Some(title) = &self.title {
            values.insert("title".to_string(), title.clone());
        }
        if let Some(sub_title) = &self.sub_title {
            values.insert("sub_title".to_string(), sub_title.clone());
        }
        if let Some(cta_text) = &self.cta_text {
            values.insert("cta_text".to_string(), cta_text.clone());
        }
        values
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHomeSlider {
    pub image_url: Option<String>,
    pub cta_link: Option<String>,
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub cta_text: Option<String>,
}

impl UpdateHomeSlider {
    pub fn translated_fields(&self) -> FieldMap {
        let mut values = FieldMap::new();
        if let Some(title) = &self.title {
            values.insert("title".to_string(), title.clone());
        }
        if let Some(sub_title) = &self.sub_title {
            values.insert("sub_title".to_string(), sub_title.clone());
        }
        if let Some(cta_text) = &self.cta_text {
            values.insert("cta_text".to_string(), cta_text.clone());
        }
        values
    }
}
