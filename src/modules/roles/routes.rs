use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    create_role, delete_role, get_role, get_role_permissions, list_roles, set_role_permissions,
    update_role,
};
use crate::app_state::AppState;

pub fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_roles).post(create_role))
        .route("/:id", patch(update_role).get(get_role).delete(delete_role))
        .route(
            "/:id/permissions",
            get(get_role_permissions).put(set_role_permissions),
        )
}
