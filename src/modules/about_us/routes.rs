use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    create_about_us, delete_about_us, get_about_us, get_about_us_translations, update_about_us,
};
use crate::app_state::AppState;

pub fn about_us_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_about_us).post(create_about_us))
        .route("/translations", get(get_about_us_translations))
        .route("/:id", patch(update_about_us).delete(delete_about_us))
}
