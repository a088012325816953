use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::LanguageRepository;
use crate::db::{Language, NewLanguage, UpdateLanguage};
use crate::error::{AppError, AppResult};
use crate::i18n::OverlayStore;
use crate::response::ApiResponse;

pub async fn list_languages(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Language>>>> {
    let languages = LanguageRepository::list(&state.db).await?;
    Ok(Json(ApiResponse::list(languages)))
}

pub async fn get_language(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Language>>> {
    let language = LanguageRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Language {} not found", id)))?;
    Ok(Json(ApiResponse::single(language)))
}

pub async fn create_language(
    State(state): State<AppState>,
    Json(payload): Json<NewLanguage>,
) -> AppResult<(StatusCode, Json<ApiResponse<Language>>)> {
    payload.validate()?;

    let mut tx = state.db.begin().await?;
    let language = LanguageRepository::create(&mut tx, &payload).await?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::created(language))))
}

pub async fn update_language(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateLanguage>,
) -> AppResult<Json<ApiResponse<Language>>> {
    payload.validate()?;

    LanguageRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Language {} not found", id)))?;

    let mut tx = state.db.begin().await?;
    let language = LanguageRepository::update(&mut tx, id, &payload).await?;
    tx.commit().await?;

    Ok(Json(ApiResponse::single(language)))
}

/// Deleting a language cascades to its overlay rows in the same transaction,
/// so no orphan translations survive it.
pub async fn delete_language(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Language>>> {
    let language = LanguageRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Language {} not found", id)))?;

    let mut tx = state.db.begin().await?;
    OverlayStore::delete_language(&mut tx, id).await?;
    LanguageRepository::delete(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(ApiResponse::single(language)))
}
