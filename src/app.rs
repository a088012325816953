use axum::{middleware, routing::get, Json, Router};
use serde_json::json;
use time::format_description::well_known::Rfc3339;

use crate::{
    app_state::AppState,
    middleware::tracing::observability_middleware,
    modules::{
        about_us::routes::about_us_routes, categories::routes::category_routes,
        contact_info::routes::contact_info_routes,
        contact_requests::routes::contact_request_routes,
        home_slider::routes::home_slider_routes,
        languages::routes::language_routes, permissions::routes::permission_routes,
        products::routes::{product_image_routes, product_routes},
        roles::routes::role_routes, users::routes::user_routes,
    },
};

pub fn create_router(state: AppState) -> Router {
    let upload_dir = state.env.app.upload_dir.clone();

    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .nest("/languages", language_routes())
        .nest("/roles", role_routes())
        .nest("/permissions", permission_routes())
        .nest("/users", user_routes())
        .nest("/categories", category_routes())
        .nest("/products", product_routes())
        .nest("/product-images", product_image_routes())
        .nest("/home-slider", home_slider_routes())
        .nest("/about-us", about_us_routes())
        .nest("/contact-info", contact_info_routes())
        .nest("/contact-requests", contact_request_routes())
        .nest_service("/uploads", tower_http::services::ServeDir::new(upload_dir))
        .layer(middleware::from_fn(observability_middleware))
        .with_state(state)
}

async fn hello() -> &'static str {
    "Showcase Backend says hello!\n"
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let db_result = sqlx::query("SELECT 1").execute(&state.db).await;

    let db_status = match db_result {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::info!("Database health check failed: {}", e);
            "unhealthy"
        }
    };

    let timestamp = time::OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();

    Json(json!({
        "status": "ok",
        "timestamp": timestamp,
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "database": db_status
        }
    }))
}
