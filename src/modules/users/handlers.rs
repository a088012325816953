use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::UserRepository;
use crate::db::{NewUser, UpdateUser, User};
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    let users = UserRepository::list(&state.db).await?;
    Ok(Json(ApiResponse::list(users)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = UserRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
    Ok(Json(ApiResponse::single(user)))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    payload.validate()?;
    let user = UserRepository::create(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::created(user))))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUser>,
) -> AppResult<Json<ApiResponse<User>>> {
    payload.validate()?;
    UserRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
    let user = UserRepository::update(&state.db, id, &payload).await?;
    Ok(Json(ApiResponse::single(user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = UserRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
    UserRepository::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::single(user)))
}
