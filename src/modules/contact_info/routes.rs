use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    create_contact_info, delete_contact_info, get_contact_info, get_contact_info_translations,
    update_contact_info,
};
use crate::app_state::AppState;

pub fn contact_info_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_contact_info).post(create_contact_info))
        .route("/translations", get(get_contact_info_translations))
        .route("/:id", patch(update_contact_info).delete(delete_contact_info))
}
