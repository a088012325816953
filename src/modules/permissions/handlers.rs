use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::PermissionRepository;
use crate::db::{NewPermission, Permission, UpdatePermission};
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;

pub async fn list_permissions(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Permission>>>> {
    let permissions = PermissionRepository::list(&state.db).await?;
    Ok(Json(ApiResponse::list(permissions)))
}

pub async fn get_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Permission>>> {
    let permission = PermissionRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Permission {} not found", id)))?;
    Ok(Json(ApiResponse::single(permission)))
}

pub async fn create_permission(
    State(state): State<AppState>,
    Json(payload): Json<NewPermission>,
) -> AppResult<(StatusCode, Json<ApiResponse<Permission>>)> {
    payload.validate()?;
    let permission = PermissionRepository::create(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::created(permission))))
}

pub async fn update_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePermission>,
) -> AppResult<Json<ApiResponse<Permission>>> {
    payload.validate()?;
    PermissionRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Permission {} not found", id)))?;
    let permission = PermissionRepository::update(&state.db, id, &payload).await?;
    Ok(Json(ApiResponse::single(permission)))
}

pub async fn delete_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Permission>>> {
    let permission = PermissionRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Permission {} not found", id)))?;
    PermissionRepository::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::single(permission)))
}
