use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::HomeSliderRepository;
use crate::db::{HomeSlider, NewHomeSlider, UpdateHomeSlider, HOME_SLIDER_SCHEMA};
use crate::error::{AppError, AppResult};
use crate::i18n::{registry, EntityTranslations, Translated, WithTranslations};
use crate::middleware::LanguageSelector;
use crate::response::ApiResponse;

const TRANSLATIONS: EntityTranslations = EntityTranslations::new(HOME_SLIDER_SCHEMA);

/// Public listing: slides with the selected language's texts.
pub async fn list_sliders(
    State(state): State<AppState>,
    lang: LanguageSelector,
) -> AppResult<Json<ApiResponse<Vec<Translated<HomeSlider>>>>> {
    let language = lang.resolve(&state.db).await?;
    let sliders = HomeSliderRepository::list(&state.db).await?;

    let mut data = Vec::with_capacity(sliders.len());
    for slider in sliders {
        let translated = TRANSLATIONS
            .project(&state.db, slider.id, &language.code)
            .await?;
        data.push(Translated {
            entity: slider,
            translated,
        });
    }
    Ok(Json(ApiResponse::list(data)))
}

/// Admin listing with every language's texts.
pub async fn list_sliders_admin(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<WithTranslations<HomeSlider>>>>> {
    let sliders = HomeSliderRepository::list(&state.db).await?;

    let mut data = Vec::with_capacity(sliders.len());
    for slider in sliders {
        let translations = TRANSLATIONS.project_all(&state.db, slider.id).await?;
        data.push(WithTranslations {
            entity: slider,
            translations,
        });
    }
    Ok(Json(ApiResponse::list(data)))
}

pub async fn get_slider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<WithTranslations<HomeSlider>>>> {
    let slider = HomeSliderRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Home slider {} not found", id)))?;
    let translations = TRANSLATIONS.project_all(&state.db, id).await?;
    Ok(Json(ApiResponse::single(WithTranslations {
        entity: slider,
        translations,
    })))
}

pub async fn create_slider(
    State(state): State<AppState>,
    Json(payload): Json<NewHomeSlider>,
) -> AppResult<(StatusCode, Json<ApiResponse<WithTranslations<HomeSlider>>>)> {
    payload.validate()?;

    // Fan-out requires a usable language registry.
    registry::get_default(&state.db).await?;

    let mut tx = state.db.begin().await?;
    let slider = HomeSliderRepository::create(&mut tx, &payload).await?;
    TRANSLATIONS
        .on_create(&mut tx, slider.id, &payload.translated_fields())
        .await?;
    tx.commit().await?;

    let translations = TRANSLATIONS.project_all(&state.db, slider.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(WithTranslations {
            entity: slider,
            translations,
        })),
    ))
}

pub async fn update_slider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    lang: LanguageSelector,
    Json(payload): Json<UpdateHomeSlider>,
) -> AppResult<Json<ApiResponse<WithTranslations<HomeSlider>>>> {
    payload.validate()?;

    HomeSliderRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Home slider {} not found", id)))?;
    let language = lang.resolve(&state.db).await?;

    let mut tx = state.db.begin().await?;
    let slider = HomeSliderRepository::update(&mut tx, id, &payload).await?;
    TRANSLATIONS
        .on_update(&mut tx, id, &language.code, &payload.translated_fields())
        .await?;
    tx.commit().await?;

    let translations = TRANSLATIONS.project_all(&state.db, id).await?;
    Ok(Json(ApiResponse::single(WithTranslations {
        entity: slider,
        translations,
    })))
}

pub async fn delete_slider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<HomeSlider>>> {
    let slider = HomeSliderRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Home slider {} not found", id)))?;

    let mut tx = state.db.begin().await?;
    TRANSLATIONS.on_delete(&mut tx, id).await?;
    HomeSliderRepository::delete(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(ApiResponse::single(slider)))
}
