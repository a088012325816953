use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    create_permission, delete_permission, get_permission, list_permissions, update_permission,
};
use crate::app_state::AppState;

pub fn permission_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_permissions).post(create_permission))
        .route(
            "/:id",
            patch(update_permission)
                .get(get_permission)
                .delete(delete_permission),
        )
}
