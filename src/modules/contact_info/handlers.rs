use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::ContactInfoRepository;
use crate::db::{ContactInfo, NewContactInfo, UpdateContactInfo, CONTACT_INFO_SCHEMA};
use crate::error::{AppError, AppResult};
use crate::i18n::{registry, EntityTranslations, Translated, WithTranslations};
use crate::middleware::LanguageSelector;
use crate::response::ApiResponse;

const TRANSLATIONS: EntityTranslations = EntityTranslations::new(CONTACT_INFO_SCHEMA);

/// Public read of the singleton in one language.
pub async fn get_contact_info(
    State(state): State<AppState>,
    lang: LanguageSelector,
) -> AppResult<Json<ApiResponse<Translated<ContactInfo>>>> {
    let info = ContactInfoRepository::find_first(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact Info not found".to_string()))?;
    let language = lang.resolve(&state.db).await?;

    let translated = TRANSLATIONS
        .project(&state.db, info.id, &language.code)
        .await?;
    Ok(Json(ApiResponse::single(Translated {
        entity: info,
        translated,
    })))
}

/// Admin read with every language's address variants.
pub async fn get_contact_info_translations(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<WithTranslations<ContactInfo>>>> {
    let info = ContactInfoRepository::find_first(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact Info not found".to_string()))?;
    let translations = TRANSLATIONS.project_all(&state.db, info.id).await?;
    Ok(Json(ApiResponse::single(WithTranslations {
        entity: info,
        translations,
    })))
}

/// Singleton create: refused once a row exists.
pub async fn create_contact_info(
    State(state): State<AppState>,
    Json(payload): Json<NewContactInfo>,
) -> AppResult<(StatusCode, Json<ApiResponse<WithTranslations<ContactInfo>>>)> {
    payload.validate()?;

    if ContactInfoRepository::find_first(&state.db).await?.is_some() {
        return Err(AppError::Conflict(
            "Contact Info already exists. You can only update it.".to_string(),
        ));
    }

    // Fan-out requires a usable language registry.
    registry::get_default(&state.db).await?;

    let mut tx = state.db.begin().await?;
    let info = ContactInfoRepository::create(&mut tx, &payload).await?;
    TRANSLATIONS
        .on_create(&mut tx, info.id, &payload.translated_fields())
        .await?;
    tx.commit().await?;

    let translations = TRANSLATIONS.project_all(&state.db, info.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(WithTranslations {
            entity: info,
            translations,
        })),
    ))
}

pub async fn update_contact_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    lang: LanguageSelector,
    Json(payload): Json<UpdateContactInfo>,
) -> AppResult<Json<ApiResponse<WithTranslations<ContactInfo>>>> {
    payload.validate()?;

    ContactInfoRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact Info not found".to_string()))?;
    let language = lang.resolve(&state.db).await?;

    let mut tx = state.db.begin().await?;
    let info = ContactInfoRepository::update(&mut tx, id, &payload).await?;
    TRANSLATIONS
        .on_update(&mut tx, id, &language.code, &payload.translated_fields())
        .await?;
    tx.commit().await?;

    let translations = TRANSLATIONS.project_all(&state.db, id).await?;
    Ok(Json(ApiResponse::single(WithTranslations {
        entity: info,
        translations,
    })))
}

pub async fn delete_contact_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<ContactInfo>>> {
    let info = ContactInfoRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact Info not found".to_string()))?;

    let mut tx = state.db.begin().await?;
    TRANSLATIONS.on_delete(&mut tx, id).await?;
    ContactInfoRepository::delete(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(ApiResponse::single(info)))
}
