use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::RoleRepository;
use crate::db::{NewRole, Role, RolePermission, SetRolePermissions, UpdateRole};
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;

pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Role>>>> {
    let roles = RoleRepository::list(&state.db).await?;
    Ok(Json(ApiResponse::list(roles)))
}

pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Role>>> {
    let role = RoleRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))?;
    Ok(Json(ApiResponse::single(role)))
}

pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<NewRole>,
) -> AppResult<(StatusCode, Json<ApiResponse<Role>>)> {
    payload.validate()?;
    let role = RoleRepository::create(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::created(role))))
}

pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRole>,
) -> AppResult<Json<ApiResponse<Role>>> {
    payload.validate()?;
    RoleRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))?;
    let role = RoleRepository::update(&state.db, id, &payload).await?;
    Ok(Json(ApiResponse::single(role)))
}

pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Role>>> {
    let role = RoleRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))?;
    RoleRepository::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::single(role)))
}

pub async fn get_role_permissions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<RolePermission>>>> {
    RoleRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))?;
    let assignments = RoleRepository::list_permissions(&state.db, id).await?;
    Ok(Json(ApiResponse::list(assignments)))
}

/// Replace the role's permission set wholesale.
pub async fn set_role_permissions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SetRolePermissions>,
) -> AppResult<Json<ApiResponse<Vec<RolePermission>>>> {
    RoleRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))?;

    let mut tx = state.db.begin().await?;
    RoleRepository::replace_permissions(&mut tx, id, &payload.permission_ids).await?;
    tx.commit().await?;

    let assignments = RoleRepository::list_permissions(&state.db, id).await?;
    Ok(Json(ApiResponse::list(assignments)))
}
