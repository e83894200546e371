//! Integration tests for `/documents`: ownership defaults, tenancy guards,
//! and the admin review flow.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::*;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_owner_to_the_actor(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let body = serde_json::json!({
        "name": "Passport",
        "file_path": "docs/passport.pdf",
    });
    let response = post_json_auth(&app, "/api/v1/documents", body, &member.token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["employee_id"], member.employee_id);
    assert_eq!(json["data"]["status"], "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_files_for_another_employee(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let body = serde_json::json!({
        "employee_id": member.employee_id,
        "name": "Contract",
        "file_path": "docs/contract.pdf",
    });
    let response = post_json_auth(&app, "/api/v1/documents", body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["employee_id"], member.employee_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn member_cannot_file_for_a_peer(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let body = serde_json::json!({
        "employee_id": admin.employee_id,
        "name": "Sneaky",
        "file_path": "docs/sneaky.pdf",
    });
    let response = post_json_auth(&app, "/api/v1/documents", body, &member.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_company_non_owner_read_is_forbidden(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let owner = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;
    let peer = add_member(&pool, &app, admin.company_id, "Bob Builder", "bob@acme.test").await;

    let body = serde_json::json!({ "name": "Passport", "file_path": "docs/p.pdf" });
    let response = post_json_auth(&app, "/api/v1/documents", body, &owner.token).await;
    let json = body_json(response).await;
    let doc_id = json["data"]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/documents/{doc_id}");

    // A peer in the same company is told it exists but is off limits.
    let response = get_auth(&app, &uri, &peer.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Owner and admin both read fine.
    let response = get_auth(&app, &uri, &owner.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = get_auth(&app, &uri, &admin.token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cross_tenant_document_reads_as_not_found(pool: PgPool) {
    let app = build_test_app(pool);
    let acme = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let globex = register_tenant(&app, "Globex", "Gus Admin", "gus@globex.test").await;

    let body = serde_json::json!({ "name": "Passport", "file_path": "docs/p.pdf" });
    let response = post_json_auth(&app, "/api/v1/documents", body, &acme.token).await;
    let json = body_json(response).await;
    let doc_id = json["data"]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/documents/{doc_id}");
    let response = get_auth(&app, &uri, &globex.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_reviews_a_document(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let body = serde_json::json!({ "name": "Passport", "file_path": "docs/p.pdf" });
    let response = post_json_auth(&app, "/api/v1/documents", body, &member.token).await;
    let json = body_json(response).await;
    let doc_id = json["data"]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/documents/{doc_id}/status");

    // The owner cannot approve their own upload.
    let body = serde_json::json!({ "status": "approved" });
    let response = patch_json_auth(&app, &uri, body.clone(), &member.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = patch_json_auth(&app, &uri, body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "approved");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_scoped_and_filterable(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    for (name, token) in [
        ("Admin Contract", &admin.token),
        ("Member Passport", &member.token),
    ] {
        let body = serde_json::json!({ "name": name, "file_path": "docs/x.pdf" });
        let response = post_json_auth(&app, "/api/v1/documents", body, token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // A member only sees their own documents.
    let response = get_auth(&app, "/api/v1/documents", &member.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["name"], "Member Passport");

    // An admin sees the company, and may filter it down.
    let response = get_auth(&app, "/api/v1/documents", &admin.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let uri = format!("/api/v1/documents?employee_id={}", member.employee_id);
    let response = get_auth(&app, &uri, &admin.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Case-insensitive substring search.
    let response = get_auth(&app, "/api/v1/documents?search=passport", &admin.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["name"], "Member Passport");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn owner_deletes_their_document(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let admin = register_tenant(&app, "Acme Corp", "Ada Admin", "ada@acme.test").await;
    let member = add_member(&pool, &app, admin.company_id, "Eve Engineer", "eve@acme.test").await;

    let body = serde_json::json!({ "name": "Passport", "file_path": "docs/p.pdf" });
    let response = post_json_auth(&app, "/api/v1/documents", body, &member.token).await;
    let json = body_json(response).await;
    let doc_id = json["data"]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/documents/{doc_id}");
    let response = delete_auth(&app, &uri, &member.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(&app, &uri, &member.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
