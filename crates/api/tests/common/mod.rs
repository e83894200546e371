//! Shared harness for HTTP integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`) on top
//! of a per-test database, plus small request/response helpers around
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use kadro_api::auth::jwt::JwtConfig;
use kadro_api::config::ServerConfig;
use kadro_api::router::build_app_router;
use kadro_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors `main.rs` so tests exercise the production
/// stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request must build"),
        None => builder.body(Body::empty()).expect("request must build"),
    };

    app.clone()
        .oneshot(request)
        .await
        .expect("request must succeed")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn patch_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be valid JSON")
}

// ---------------------------------------------------------------------------
// Tenant fixtures
// ---------------------------------------------------------------------------

/// An authenticated actor created through the public API.
pub struct Actor {
    pub token: String,
    pub employee_id: i64,
    pub company_id: i64,
}

/// Register a new tenant through `POST /auth/register` and return the admin
/// actor.
pub async fn register_tenant(app: &Router, company: &str, name: &str, email: &str) -> Actor {
    let body = serde_json::json!({
        "company_name": company,
        "name": name,
        "email": email,
        "password": "test_password_123!",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    Actor {
        token: json["data"]["access_token"]
            .as_str()
            .expect("access_token must be present")
            .to_string(),
        employee_id: json["data"]["employee"]["id"]
            .as_i64()
            .expect("employee id must be present"),
        company_id: json["data"]["employee"]["company_id"]
            .as_i64()
            .expect("company id must be present"),
    }
}

/// Create a non-admin employee with a credential (directly in the database,
/// as an accepted invite would) and log them in through the API.
pub async fn add_member(pool: &PgPool, app: &Router, company_id: i64, name: &str, email: &str) -> Actor {
    use kadro_api::auth::password::hash_password;
    use kadro_db::models::employee::CreateEmployee;
    use kadro_db::models::user::CreateUser;
    use kadro_db::repositories::{EmployeeRepo, UserRepo};

    let password = "member_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hashed,
        },
    )
    .await
    .expect("user creation should succeed");

    let employee = EmployeeRepo::create(
        pool,
        &CreateEmployee {
            company_id,
            user_id: Some(user.id),
            name: name.to_string(),
            email: email.to_string(),
            job_title: None,
            is_admin: false,
        },
    )
    .await
    .expect("employee creation should succeed");

    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    Actor {
        token: json["data"]["access_token"]
            .as_str()
            .expect("access_token must be present")
            .to_string(),
        employee_id: employee.id,
        company_id,
    }
}
