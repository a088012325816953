pub mod language;
pub mod tracing;

pub use language::LanguageSelector;
