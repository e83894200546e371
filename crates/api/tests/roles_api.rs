//! Integration tests for the `/roles` aggregate and its replace-all update
//! semantics.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::*;

fn names(items: &serde_json::Value) -> Vec<String> {
    let mut names: Vec<String> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    names
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_the_full_aggregate(pool: PgPool) {
    let app = build_test_app(pool);
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;

    let body = serde_json::json!({
        "title": "Backend Engineer",
        "description": "Builds the API",
        "salary_range": "70k-90k",
        "courses": ["CS Fundamentals", "Databases"],
        "technical_skills": ["Rust", "SQL"],
        "languages": ["English"],
    });
    let response = post_json_auth(&app, "/api/v1/roles", body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["role"]["title"], "Backend Engineer");
    assert_eq!(names(&json["data"]["courses"]), ["CS Fundamentals", "Databases"]);
    assert_eq!(names(&json["data"]["technical_skills"]), ["Rust", "SQL"]);
    assert_eq!(names(&json["data"]["languages"]), ["English"]);
    // Omitted collections come back empty, not missing.
    assert_eq!(json["data"]["behavioral_skills"].as_array().unwrap().len(), 0);
    assert_eq!(
        json["data"]["complementary_courses"].as_array().unwrap().len(),
        0
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_replaces_every_child_collection(pool: PgPool) {
    let app = build_test_app(pool);
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;

    let body = serde_json::json!({
        "title": "Backend Engineer",
        "courses": ["CS Fundamentals", "Databases"],
        "technical_skills": ["Rust", "SQL"],
        "behavioral_skills": ["Communication"],
    });
    let response = post_json_auth(&app, "/api/v1/roles", body, &admin.token).await;
    let json = body_json(response).await;
    let role_id = json["data"]["role"]["id"].as_i64().unwrap();

    // The update swaps one set, shrinks another, and clears the rest by
    // omission.
    let uri = format!("/api/v1/roles/{role_id}");
    let body = serde_json::json!({
        "title": "Senior Backend Engineer",
        "technical_skills": ["Rust", "Postgres", "Kubernetes"],
        "courses": ["Databases"],
    });
    let response = put_json_auth(&app, &uri, body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // A fresh read yields exactly the submitted sets.
    let response = get_auth(&app, &uri, &admin.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"]["title"], "Senior Backend Engineer");
    assert_eq!(names(&json["data"]["courses"]), ["Databases"]);
    assert_eq!(
        names(&json["data"]["technical_skills"]),
        ["Kubernetes", "Postgres", "Rust"]
    );
    assert_eq!(json["data"]["behavioral_skills"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["languages"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn members_can_read_but_not_write(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let body = serde_json::json!({ "title": "Backend Engineer" });
    let response = post_json_auth(&app, "/api/v1/roles", body, &admin.token).await;
    let json = body_json(response).await;
    let role_id = json["data"]["role"]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/roles/{role_id}");
    let response = get_auth(&app, &uri, &member.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = serde_json::json!({ "title": "Hijacked" });
    let response = put_json_auth(&app, &uri, body, &member.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = serde_json::json!({ "title": "New Role" });
    let response = post_json_auth(&app, "/api/v1/roles", body, &member.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cross_tenant_role_reads_as_not_found(pool: PgPool) {
    let app = build_test_app(pool);
    let acme = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let globex = register_tenant(&app, "Globex", "Gus Admin", "gus@globex.test").await;

    let body = serde_json::json!({ "title": "Backend Engineer" });
    let response = post_json_auth(&app, "/api/v1/roles", body, &acme.token).await;
    let json = body_json(response).await;
    let role_id = json["data"]["role"]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/roles/{role_id}");
    let response = get_auth(&app, &uri, &globex.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // And the list only covers the caller's company.
    let response = get_auth(&app, "/api/v1/roles", &globex.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_title_is_unprocessable(pool: PgPool) {
    let app = build_test_app(pool);
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;

    let body = serde_json::json!({ "title": "" });
    let response = post_json_auth(&app, "/api/v1/roles", body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_the_aggregate(pool: PgPool) {
    let app = build_test_app(pool);
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;

    let body = serde_json::json!({
        "title": "Backend Engineer",
        "courses": ["Databases"],
    });
    let response = post_json_auth(&app, "/api/v1/roles", body, &admin.token).await;
    let json = body_json(response).await;
    let role_id = json["data"]["role"]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/roles/{role_id}");
    let response = delete_auth(&app, &uri, &admin.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(&app, &uri, &admin.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
