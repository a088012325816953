use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::{ProductImageRepository, ProductRepository};
use crate::db::{NewProductImage, ProductImage, UpdateProductImage};
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;

pub async fn list_product_images(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<ProductImage>>>> {
    ProductRepository::find_by_id(&state.db, product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product_id)))?;
    let images = ProductImageRepository::list_for_product(&state.db, product_id).await?;
    Ok(Json(ApiResponse::list(images)))
}

/// The url is a path string already persisted by the upload service.
pub async fn create_product_image(
    State(state): State<AppState>,
    Json(payload): Json<NewProductImage>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProductImage>>)> {
    payload.validate()?;
    ProductRepository::find_by_id(&state.db, payload.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", payload.product_id)))?;

    let mut tx = state.db.begin().await?;
    let image = ProductImageRepository::create(&mut tx, &payload).await?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::created(image))))
}

pub async fn update_product_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductImage>,
) -> AppResult<Json<ApiResponse<ProductImage>>> {
    payload.validate()?;
    let existing = ProductImageRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product image {} not found", id)))?;

    let mut tx = state.db.begin().await?;
    let image = ProductImageRepository::update(&mut tx, id, existing.product_id, &payload).await?;
    tx.commit().await?;

    Ok(Json(ApiResponse::single(image)))
}

pub async fn delete_product_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<ProductImage>>> {
    let image = ProductImageRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product image {} not found", id)))?;
    ProductImageRepository::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::single(image)))
}
