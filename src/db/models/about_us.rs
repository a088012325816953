use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::i18n::{FieldMap, TranslatableSchema};

pub const ABOUT_US_SCHEMA: TranslatableSchema = TranslatableSchema {
    entity_type: "about_us",
    fields: &["story", "mission", "vision", "values"],
};

/// Singleton: at most one row exists.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AboutUs {
    pub id: i64,
    pub image_url: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewAboutUs {
    pub image_url: Option<String>,
    pub story: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub values: Option<String>,
}

impl NewAboutUs {
    pub fn translated_fields(&self) -> FieldMap {
        let mut map = FieldMap::new();
        if let Some(story) = &self.story {
            map.insert("story".to_string(), story.clone());
        }
        if let Some(mission) = &self.mission {
            map.insert("mission".to_string(), mission.clone());
        }
        if let Some(vision) = &self.vision {
            map.insert("vision".to_string(), vision.clone());
        }
        if let Some(values) = &self.values {
            map.insert("values".to_string(), values.clone());
        }
        map
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAboutUs {
    pub image_url: Option<String>,
    pub story: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub values: Option<String>,
}

impl UpdateAboutUs {
    pub fn translated_fields(&self) -> FieldMap {
        let mut map = FieldMap::new();
        if let Some(story) = &self.story {
            map.insert("story".to_string(), story.clone());
        }
        if let Some(mission) = &self.mission {
            map.insert("mission".to_string(), mission.clone());
        }
        if let Some(vision) = &self.vision {
            map.insert("vision".to_string(), vision.clone());
        }
        if let Some(values) = &self.values {
            map.insert("values".to_string(), values.clone());
        }
        map
    }
}
