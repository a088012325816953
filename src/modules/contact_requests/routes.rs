use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    create_contact_request, delete_contact_request, get_contact_request, list_contact_requests,
    update_contact_request_status,
};
use crate::app_state::AppState;

pub fn contact_request_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contact_requests).post(create_contact_request))
        .route(
            "/:id",
            get(get_contact_request).delete(delete_contact_request),
        )
        .route("/:id/status", patch(update_contact_request_status))
}
