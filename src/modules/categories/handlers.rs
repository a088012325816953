use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::CategoryRepository;
use crate::db::{Category, NewCategory, UpdateCategory, CATEGORY_SCHEMA};
use crate::error::{AppError, AppResult};
use crate::i18n::{registry, EntityTranslations, Translated, WithTranslations};
use crate::middleware::LanguageSelector;
use crate::response::ApiResponse;

const TRANSLATIONS: EntityTranslations = EntityTranslations::new(CATEGORY_SCHEMA);

/// Public listing: base records with the selected language's field values.
pub async fn list_categories(
    State(state): State<AppState>,
    lang: LanguageSelector,
) -> AppResult<Json<ApiResponse<Vec<Translated<Category>>>>> {
    let language = lang.resolve(&state.db).await?;
    let categories = CategoryRepository::list(&state.db).await?;

    let mut data = Vec::with_capacity(categories.len());
    for category in categories {
        let translated = TRANSLATIONS
            .project(&state.db, category.id, &language.code)
            .await?;
        data.push(Translated {
            entity: category,
            translated,
        });
    }
    Ok(Json(ApiResponse::list(data)))
}

/// Landing page selection: featured categories first, capped at five.
pub async fn landing_categories(
    State(state): State<AppState>,
    lang: LanguageSelector,
) -> AppResult<Json<ApiResponse<Vec<Translated<Category>>>>> {
    let language = lang.resolve(&state.db).await?;
    let categories = CategoryRepository::list_landing(&state.db).await?;

    let mut data = Vec::with_capacity(categories.len());
    for category in categories {
        let translated = TRANSLATIONS
            .project(&state.db, category.id, &language.code)
            .await?;
        data.push(Translated {
            entity: category,
            translated,
        });
    }
    Ok(Json(ApiResponse::list(data)))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    lang: LanguageSelector,
) -> AppResult<Json<ApiResponse<Translated<Category>>>> {
    let category = CategoryRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
    let language = lang.resolve(&state.db).await?;

    let translated = TRANSLATIONS.project(&state.db, id, &language.code).await?;
    Ok(Json(ApiResponse::single(Translated {
        entity: category,
        translated,
    })))
}

/// Admin view of one category with every language's field values.
pub async fn get_category_translations(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<WithTranslations<Category>>>> {
    let category = CategoryRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
    let translations = TRANSLATIONS.project_all(&state.db, id).await?;
    Ok(Json(ApiResponse::single(WithTranslations {
        entity: category,
        translations,
    })))
}

/// Create the base row and fan out its field values to every registered
/// language in one transaction.
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<NewCategory>,
) -> AppResult<(StatusCode, Json<ApiResponse<WithTranslations<Category>>>)> {
    payload.validate()?;

    // Fan-out requires a usable language registry.
    registry::get_default(&state.db).await?;

    let mut tx = state.db.begin().await?;
    let category = CategoryRepository::create(&mut tx, &payload).await?;
    TRANSLATIONS
        .on_create(&mut tx, category.id, &payload.translated_fields())
        .await?;
    tx.commit().await?;

    let translations = TRANSLATIONS.project_all(&state.db, category.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(WithTranslations {
            entity: category,
            translations,
        })),
    ))
}

/// Update base attributes and upsert the selected language's field values.
/// Fields omitted from the payload are left untouched.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    lang: LanguageSelector,
    Json(payload): Json<UpdateCategory>,
) -> AppResult<Json<ApiResponse<WithTranslations<Category>>>> {
    payload.validate()?;

    CategoryRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
    let language = lang.resolve(&state.db).await?;

    let mut tx = state.db.begin().await?;
    let category = CategoryRepository::update(&mut tx, id, &payload).await?;
    TRANSLATIONS
        .on_update(&mut tx, id, &language.code, &payload.translated_fields())
        .await?;
    tx.commit().await?;

    let translations = TRANSLATIONS.project_all(&state.db, id).await?;
    Ok(Json(ApiResponse::single(WithTranslations {
        entity: category,
        translations,
    })))
}

/// Overlay rows go first, in the same transaction as the base row, so the
/// entity is never gone while its translations remain discoverable.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = CategoryRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

    let mut tx = state.db.begin().await?;
    TRANSLATIONS.on_delete(&mut tx, id).await?;
    CategoryRepository::delete(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(ApiResponse::single(category)))
}
