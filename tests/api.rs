mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use showcase_backend::app::create_router;
use showcase_backend::app_state::AppState;
use showcase_backend::config::{AppConfig, Config, DatabaseConfig, Environment, ServerConfig};

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "unused".to_string(),
            max_connections: Some(5),
            min_connections: Some(1),
        },
        app: AppConfig {
            name: "Showcase Backend".to_string(),
            environment: Environment::Development,
            upload_dir: "uploads".to_string(),
        },
    }
}

async fn test_app() -> (Router, common::TestDb) {
    let db = common::setup().await;
    let state = AppState::new(db.pool.clone(), test_config());
    (create_router(state), db)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse json body")
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

#[tokio::test]
async fn health_endpoint_reports_database_status() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["services"]["database"], "healthy");
}

#[tokio::test]
async fn listing_languages_returns_the_seeded_registry() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get_request("/languages")).await;
    assert_eq!(status, StatusCode::OK);

    let codes: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["en", "fr", "ar"]);
    assert_eq!(body["data"][0]["is_default"], true);
}

#[tokio::test]
async fn category_create_returns_every_language() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/categories",
            json!({"name": "Shoes", "description": "Footwear"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status_code"], 201);

    let translations = &body["data"]["translations"];
    for code in ["en", "fr", "ar"] {
        assert_eq!(translations[code]["name"], "Shoes");
        assert_eq!(translations[code]["description"], "Footwear");
    }
}

#[tokio::test]
async fn public_read_projects_the_selected_language() {
    let (app, _db) = test_app().await;

    let (_, created) = send(
        &app,
        json_request("POST", "/categories", json!({"name": "Shoes"})),
    )
    .await;
    let id = created["data"]["id"].as_i64().expect("id");

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/categories/{}?lang=fr", id),
            json!({"name": "Chaussures"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, fr) = send(&app, get_request(&format!("/categories/{}?lang=fr", id))).await;
    assert_eq!(fr["data"]["translated"]["name"], "Chaussures");

    // Header selection works the same way as the query parameter.
    let request = Request::builder()
        .uri(format!("/categories/{}", id))
        .header("X-Language", "en")
        .body(Body::empty())
        .expect("build request");
    let (_, en) = send(&app, request).await;
    assert_eq!(en["data"]["translated"]["name"], "Shoes");
}

#[tokio::test]
async fn unknown_language_selector_is_a_not_found() {
    let (app, _db) = test_app().await;

    let (_, created) = send(
        &app,
        json_request("POST", "/categories", json!({"name": "Shoes"})),
    )
    .await;
    let id = created["data"]["id"].as_i64().expect("id");

    let (status, body) = send(&app, get_request(&format!("/categories/{}?lang=xx", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Resource not found");
    assert!(body["error"]["details"]
        .as_str()
        .unwrap()
        .contains("Language 'xx' not found"));
}

#[tokio::test]
async fn singleton_about_us_rejects_a_second_create() {
    let (app, _db) = test_app().await;

    let (status, _) = send(
        &app,
        json_request("POST", "/about-us", json!({"story": "Founded in 2009"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        json_request("POST", "/about-us", json!({"story": "Another story"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Resource conflict");
    assert!(body["error"]["details"]
        .as_str()
        .unwrap()
        .contains("About Us already exists"));
}

#[tokio::test]
async fn duplicate_language_code_is_a_conflict() {
    let (app, _db) = test_app().await;

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/languages",
            json!({"code": "en", "name": "English again"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn validation_failures_are_bad_requests() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/languages", json!({"code": "x", "name": "Tiny"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Validation error");
}

#[tokio::test]
async fn contact_request_submission_starts_out_pending() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/contact-requests",
            json!({
                "name": "Jordan",
                "phone": "+1555000111",
                "email": "jordan@example.com",
                "message": "Do you ship abroad?"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "pending");

    let (status, listed) = send(&app, get_request("/contact-requests")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["meta"]["total"], 1);
}

#[tokio::test]
async fn contact_request_status_workflow_rejects_unknown_states() {
    let (app, _db) = test_app().await;

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/contact-requests",
            json!({
                "name": "Jordan",
                "phone": "+1555000111",
                "email": "jordan@example.com",
                "message": "Do you ship abroad?"
            }),
        ),
    )
    .await;
    let id = created["data"]["id"].as_i64().expect("id");

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/contact-requests/{}/status", id),
            json!({"status": "in_progress"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/contact-requests/{}/status", id),
            json!({"status": "archived"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["details"]
        .as_str()
        .unwrap()
        .contains("Invalid status"));

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/contact-requests/{}/status", id),
            json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, get_request(&format!("/contact-requests/{}", id))).await;
    assert_eq!(fetched["data"]["status"], "in_progress");
}

#[tokio::test]
async fn deleting_a_language_removes_it_from_admin_views() {
    let (app, _db) = test_app().await;

    let (_, created) = send(
        &app,
        json_request("POST", "/categories", json!({"name": "Shoes"})),
    )
    .await;
    let id = created["data"]["id"].as_i64().expect("id");

    let (_, languages) = send(&app, get_request("/languages")).await;
    let arabic_id = languages["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["code"] == "ar")
        .and_then(|l| l["id"].as_i64())
        .expect("ar id");

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/languages/{}", arabic_id))
        .body(Body::empty())
        .expect("build request");
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let (_, admin) = send(&app, get_request(&format!("/categories/{}/translations", id))).await;
    let codes: Vec<&str> = admin["data"]["translations"]
        .as_object()
        .expect("translations object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(codes, vec!["en", "fr"]);
}
