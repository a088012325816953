use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    create_slider, delete_slider, get_slider, list_sliders, list_sliders_admin, update_slider,
};
use crate::app_state::AppState;

pub fn home_slider_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sliders).post(create_slider))
        .route("/all", get(list_sliders_admin))
        .route(
            "/:id",
            patch(update_slider).get(get_slider).delete(delete_slider),
        )
}
