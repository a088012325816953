use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    create_category, delete_category, get_category, get_category_translations,
    landing_categories, list_categories, update_category,
};
use crate::app_state::AppState;

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/landing", get(landing_categories))
        .route(
            "/:id",
            patch(update_category)
                .get(get_category)
                .delete(delete_category),
        )
        .route("/:id/translations", get(get_category_translations))
}
