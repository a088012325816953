use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::AboutUsRepository;
use crate::db::{AboutUs, NewAboutUs, UpdateAboutUs, ABOUT_US_SCHEMA};
use crate::error::{AppError, AppResult};
use crate::i18n::{registry, EntityTranslations, Translated, WithTranslations};
use crate::middleware::LanguageSelector;
use crate::response::ApiResponse;

const TRANSLATIONS: EntityTranslations = EntityTranslations::new(ABOUT_US_SCHEMA);

/// Public read of the singleton in one language.
pub async fn get_about_us(
    State(state): State<AppState>,
    lang: LanguageSelector,
) -> AppResult<Json<ApiResponse<Translated<AboutUs>>>> {
    let about = AboutUsRepository::find_first(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("About Us not found".to_string()))?;
    let language = lang.resolve(&state.db).await?;

    let translated = TRANSLATIONS
        .project(&state.db, about.id, &language.code)
        .await?;
    Ok(Json(ApiResponse::single(Translated {
        entity: about,
        translated,
    })))
}

/// Admin read with every language's texts.
pub async fn get_about_us_translations(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<WithTranslations<AboutUs>>>> {
    let about = AboutUsRepository::find_first(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("About Us not found".to_string()))?;
    let translations = TRANSLATIONS.project_all(&state.db, about.id).await?;
    Ok(Json(ApiResponse::single(WithTranslations {
        entity: about,
        translations,
    })))
}

/// Singleton create: refused once a row exists.
pub async fn create_about_us(
    State(state): State<AppState>,
    Json(payload): Json<NewAboutUs>,
) -> AppResult<(StatusCode, Json<ApiResponse<WithTranslations<AboutUs>>>)> {
    payload.validate()?;

    if AboutUsRepository::find_first(&state.db).await?.is_some() {
        return Err(AppError::Conflict(
            "About Us already exists. You can only update it.".to_string(),
        ));
    }

    // Fan-out requires a usable language registry.
    registry::get_default(&state.db).await?;

    let mut tx = state.db.begin().await?;
    let about = AboutUsRepository::create(&mut tx, &payload).await?;
    TRANSLATIONS
        .on_create(&mut tx, about.id, &payload.translated_fields())
        .await?;
    tx.commit().await?;

    let translations = TRANSLATIONS.project_all(&state.db, about.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(WithTranslations {
            entity: about,
            translations,
        })),
    ))
}

pub async fn update_about_us(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    lang: LanguageSelector,
    Json(payload): Json<UpdateAboutUs>,
) -> AppResult<Json<ApiResponse<WithTranslations<AboutUs>>>> {
    payload.validate()?;

    AboutUsRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("About Us record not found".to_string()))?;
    let language = lang.resolve(&state.db).await?;

    let mut tx = state.db.begin().await?;
    let about = AboutUsRepository::update(&mut tx, id, &payload).await?;
    TRANSLATIONS
        .on_update(&mut tx, id, &language.code, &payload.translated_fields())
        .await?;
    tx.commit().await?;

    let translations = TRANSLATIONS.project_all(&state.db, id).await?;
    Ok(Json(ApiResponse::single(WithTranslations {
        entity: about,
        translations,
    })))
}

pub async fn delete_about_us(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<AboutUs>>> {
    let about = AboutUsRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("About Us not found".to_string()))?;

    let mut tx = state.db.begin().await?;
    TRANSLATIONS.on_delete(&mut tx, id).await?;
    AboutUsRepository::delete(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(ApiResponse::single(about)))
}
