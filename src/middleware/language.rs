use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sqlx::Sqlite;
use std::convert::Infallible;

use crate::db::Language;
use crate::error::AppResult;
use crate::i18n::registry;

/// Request-scoped language selector.
///
/// Priority order:
/// 1. `lang` query parameter (explicit selection)
/// 2. `X-Language` header
///
/// When neither is present, resolution falls back to the registry's default
/// language.
#[derive(Debug, Clone, Default)]
pub struct LanguageSelector {
    pub code: Option<String>,
}

impl LanguageSelector {
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }

    /// Resolve the selector against the language registry. An explicit code
    /// that is not registered is a NotFound naming the code; no selector at
    /// all requires a default language to exist.
    pub async fn resolve<'e, E>(&self, executor: E) -> AppResult<Language>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        match &self.code {
            Some(code) => registry::get_by_code(executor, code).await,
            None => registry::get_default(executor).await,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for LanguageSelector
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(code) = lang_from_query(parts.uri.query()) {
            return Ok(LanguageSelector { code: Some(code) });
        }

        if let Some(header) = parts.headers.get("X-Language") {
            if let Ok(code) = header.to_str() {
                if !code.trim().is_empty() {
                    return Ok(LanguageSelector {
                        code: Some(code.trim().to_string()),
                    });
                }
            }
        }

        Ok(LanguageSelector::default())
    }
}

fn lang_from_query(query: Option<&str>) -> Option<String> {
    let query = query?;
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() == Some("lang") {
            let value = parts.next().unwrap_or("").trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_lang_parameter_out_of_query() {
        assert_eq!(
            lang_from_query(Some("page=2&lang=fr")),
            Some("fr".to_string())
        );
        assert_eq!(lang_from_query(Some("language=fr")), None);
        assert_eq!(lang_from_query(Some("lang=")), None);
        assert_eq!(lang_from_query(None), None);
    }
}
