//! Integration tests for `/time-off`: filing, decisions, and the vacation
//! side effect on the employee row.

mod common;

use axum::http::StatusCode;
use axum::Router;
use sqlx::PgPool;

use common::*;

async fn file_request(app: &Router, token: &str, kind: &str) -> i64 {
    let body = serde_json::json!({
        "kind": kind,
        "start_date": "2026-09-07",
        "end_date": "2026-09-11",
        "reason": "family trip",
    });
    let response = post_json_auth(app, "/api/v1/time-off", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn requests_are_always_filed_for_the_actor(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let id = file_request(&app, &member.token, "sick").await;

    let uri = format!("/api/v1/time-off/{id}");
    let response = get_auth(&app, &uri, &member.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["employee_id"], member.employee_id);
    assert_eq!(json["data"]["status"], "pending");
    assert!(json["data"]["approved_by"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reversed_date_range_is_unprocessable(pool: PgPool) {
    let app = build_test_app(pool);
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;

    let body = serde_json::json!({
        "kind": "vacation",
        "start_date": "2026-09-11",
        "end_date": "2026-09-07",
    });
    let response = post_json_auth(&app, "/api/v1/time-off", body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approving_vacation_flips_the_employee_status(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let id = file_request(&app, &member.token, "vacation").await;

    let uri = format!("/api/v1/time-off/{id}/status");
    let body = serde_json::json!({ "status": "approved" });
    let response = patch_json_auth(&app, &uri, body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "approved");
    assert_eq!(json["data"]["approved_by"], admin.employee_id);
    assert!(!json["data"]["approved_at"].is_null());

    // The side effect landed in the same transaction.
    let uri = format!("/api/v1/employees/{}", member.employee_id);
    let response = get_auth(&app, &uri, &admin.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "vacation");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejection_stamps_without_touching_the_employee(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let id = file_request(&app, &member.token, "vacation").await;

    let uri = format!("/api/v1/time-off/{id}/status");
    let body = serde_json::json!({ "status": "rejected" });
    let response = patch_json_auth(&app, &uri, body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "rejected");
    assert_eq!(json["data"]["approved_by"], admin.employee_id);

    let uri = format!("/api/v1/employees/{}", member.employee_id);
    let response = get_auth(&app, &uri, &admin.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "active");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn re_deciding_a_terminal_request_conflicts(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let id = file_request(&app, &member.token, "personal").await;
    let uri = format!("/api/v1/time-off/{id}/status");

    let body = serde_json::json!({ "status": "approved" });
    let response = patch_json_auth(&app, &uri, body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = serde_json::json!({ "status": "rejected" });
    let response = patch_json_auth(&app, &uri, body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pending_is_not_a_valid_decision(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let id = file_request(&app, &member.token, "sick").await;

    let uri = format!("/api/v1/time-off/{id}/status");
    let body = serde_json::json!({ "status": "pending" });
    let response = patch_json_auth(&app, &uri, body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_admin_cannot_decide(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let id = file_request(&app, &member.token, "vacation").await;

    let uri = format!("/api/v1/time-off/{id}/status");
    let body = serde_json::json!({ "status": "approved" });
    let response = patch_json_auth(&app, &uri, body, &member.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_scoped_and_filterable_by_kind(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    file_request(&app, &member.token, "vacation").await;
    file_request(&app, &member.token, "sick").await;
    file_request(&app, &admin.token, "vacation").await;

    // A member only sees their own.
    let response = get_auth(&app, "/api/v1/time-off", &member.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // An admin sees the company and may filter by kind.
    let response = get_auth(&app, "/api/v1/time-off?kind=vacation", &admin.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let uri = format!(
        "/api/v1/time-off?kind=vacation&employee_id={}",
        member.employee_id
    );
    let response = get_auth(&app, &uri, &admin.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn member_cannot_read_a_peer_request(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let owner = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;
    let peer = add_member(&pool, &app, admin.company_id, "Bob Builder", "bob@acme.test").await;

    let id = file_request(&app, &owner.token, "unpaid").await;

    let uri = format!("/api/v1/time-off/{id}");
    let response = get_auth(&app, &uri, &peer.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
