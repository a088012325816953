use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    create_product, delete_product, get_product, list_products, list_products_by_category,
    list_products_by_language, update_product,
};
use super::image_handlers::{
    create_product_image, delete_product_image, list_product_images, update_product_image,
};
use crate::app_state::AppState;

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/by-language", get(list_products_by_language))
        .route("/category/:category_id", get(list_products_by_category))
        .route(
            "/:id",
            patch(update_product).get(get_product).delete(delete_product),
        )
        .route("/:id/images", get(list_product_images))
}

pub fn product_image_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product_image))
        .route(
            "/:id",
            patch(update_product_image).delete(delete_product_image),
        )
}
