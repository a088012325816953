use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::ProductRepository;
use crate::db::{NewProduct, Product, ProductWithMainImage, UpdateProduct, PRODUCT_SCHEMA};
use crate::error::{AppError, AppResult};
use crate::i18n::{registry, EntityTranslations, Translated, WithTranslations};
use crate::middleware::LanguageSelector;
use crate::response::ApiResponse;

const TRANSLATIONS: EntityTranslations = EntityTranslations::new(PRODUCT_SCHEMA);

/// Admin listing: every product with its full translations map.
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<WithTranslations<Product>>>>> {
    let products = ProductRepository::list(&state.db).await?;

    let mut data = Vec::with_capacity(products.len());
    for product in products {
        let translations = TRANSLATIONS.project_all(&state.db, product.id).await?;
        data.push(WithTranslations {
            entity: product,
            translations,
        });
    }
    Ok(Json(ApiResponse::list(data)))
}

/// Public listing: products with the selected language's field values.
pub async fn list_products_by_language(
    State(state): State<AppState>,
    lang: LanguageSelector,
) -> AppResult<Json<ApiResponse<Vec<Translated<Product>>>>> {
    let language = lang.resolve(&state.db).await?;
    let products = ProductRepository::list(&state.db).await?;

    let mut data = Vec::with_capacity(products.len());
    for product in products {
        let translated = TRANSLATIONS
            .project(&state.db, product.id, &language.code)
            .await?;
        data.push(Translated {
            entity: product,
            translated,
        });
    }
    Ok(Json(ApiResponse::list(data)))
}

/// Products of one category, translated, each with its main image url.
pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    lang: LanguageSelector,
) -> AppResult<Json<ApiResponse<Vec<Translated<ProductWithMainImage>>>>> {
    let language = lang.resolve(&state.db).await?;
    let products = ProductRepository::list_by_category(&state.db, category_id).await?;

    let mut data = Vec::with_capacity(products.len());
    for product in products {
        let translated = TRANSLATIONS
            .project(&state.db, product.id, &language.code)
            .await?;
        data.push(Translated {
            entity: product,
            translated,
        });
    }
    Ok(Json(ApiResponse::list(data)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<WithTranslations<Product>>>> {
    let product = ProductRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;
    let translations = TRANSLATIONS.project_all(&state.db, id).await?;
    Ok(Json(ApiResponse::single(WithTranslations {
        entity: product,
        translations,
    })))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> AppResult<(StatusCode, Json<ApiResponse<WithTranslations<Product>>>)> {
    payload.validate()?;

    // Fan-out requires a usable language registry.
    registry::get_default(&state.db).await?;

    let mut tx = state.db.begin().await?;
    let product = ProductRepository::create(&mut tx, &payload).await?;
    TRANSLATIONS
        .on_create(&mut tx, product.id, &payload.translated_fields())
        .await?;
    tx.commit().await?;

    let translations = TRANSLATIONS.project_all(&state.db, product.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(WithTranslations {
            entity: product,
            translations,
        })),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    lang: LanguageSelector,
    Json(payload): Json<UpdateProduct>,
) -> AppResult<Json<ApiResponse<WithTranslations<Product>>>> {
    payload.validate()?;

    ProductRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;
    let language = lang.resolve(&state.db).await?;

    let mut tx = state.db.begin().await?;
    let product = ProductRepository::update(&mut tx, id, &payload).await?;
    TRANSLATIONS
        .on_update(&mut tx, id, &language.code, &payload.translated_fields())
        .await?;
    tx.commit().await?;

    let translations = TRANSLATIONS.project_all(&state.db, id).await?;
    Ok(Json(ApiResponse::single(WithTranslations {
        entity: product,
        translations,
    })))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ProductRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

    let mut tx = state.db.begin().await?;
    TRANSLATIONS.on_delete(&mut tx, id).await?;
    ProductRepository::delete(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(ApiResponse::single(product)))
}
