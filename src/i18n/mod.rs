//! Dynamic translation overlay.
//!
//! Translatable entities do not own per-entity translation tables. Instead a
//! single overlay table associates `(entity_type, entity_id, field,
//! language_id)` with text content, and a generic adapter binds each entity
//! type's declared field set to that store. Reads project the overlay rows
//! into either a single-language `translated` object or an all-language
//! `translations` object merged onto the base record.

pub mod adapter;
pub mod overlay;
pub mod projection;
pub mod registry;

use std::collections::BTreeMap;

pub use adapter::{EntityTranslations, TranslatableSchema};
pub use overlay::OverlayStore;
pub use projection::{Translated, WithTranslations};

/// `field -> content` for one entity in one language.
pub type FieldMap = BTreeMap<String, String>;

/// `language_code -> (field -> content)` for one entity across all languages.
pub type TranslationsMap = BTreeMap<String, FieldMap>;
