use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    create_language, delete_language, get_language, list_languages, update_language,
};
use crate::app_state::AppState;

pub fn language_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_languages).post(create_language))
        .route(
            "/:id",
            patch(update_language).get(get_language).delete(delete_language),
        )
}
