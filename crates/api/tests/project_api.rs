//! HTTP-level integration tests for the `/projects` resource.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_returns_201_with_record(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects",
        serde_json::json!({"name": "Launch", "description": "Q1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Launch");
    assert_eq!(json["description"], "Q1");
    assert_eq!(json["completed"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_with_duplicate_name_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/projects",
        serde_json::json!({"name": "Alpha", "description": "D"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects",
        serde_json::json!({"name": "Alpha", "description": "X"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_without_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/projects", serde_json::json!({"description": "Q1"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects",
        serde_json::json!({"name": "", "description": "Q1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn name_of_exactly_128_chars_is_accepted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects",
        serde_json::json!({"name": "x".repeat(128), "description": "Q1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn name_of_129_chars_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects",
        serde_json::json!({"name": "x".repeat(129), "description": "Q1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_rejects_completed_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects",
        serde_json::json!({"name": "Launch", "description": "Q1", "completed": false}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("completed"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_rejects_unknown_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects",
        serde_json::json!({"name": "Launch", "description": "Q1", "owner": "pat"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_project_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/projects",
            serde_json::json!({"name": "Get Me", "description": "D"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Get Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_projects(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/projects",
        serde_json::json!({"name": "P1", "description": "D"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/projects",
        serde_json::json!({"name": "P2", "description": "D"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_project_returns_201_with_replaced_record(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/projects",
            serde_json::json!({"name": "Original", "description": "D"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/projects/{id}"),
        serde_json::json!({"name": "Updated", "description": "E", "completed": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Updated");
    assert_eq!(json["completed"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_completed_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/projects",
            serde_json::json!({"name": "Original", "description": "D"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/projects/{id}"),
        serde_json::json!({"name": "Updated", "description": "E"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("completed"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/projects/999999",
        serde_json::json!({"name": "Ghost", "description": "D", "completed": false}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_to_taken_name_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/projects",
        serde_json::json!({"name": "Alpha", "description": "D"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let second = body_json(
        post_json(
            app,
            "/projects",
            serde_json::json!({"name": "Beta", "description": "D"}),
        )
        .await,
    )
    .await;
    let id = second["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/projects/{id}"),
        serde_json::json!({"name": "Alpha", "description": "D", "completed": false}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_keeping_own_name_does_not_self_conflict(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/projects",
            serde_json::json!({"name": "Stable", "description": "D"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/projects/{id}"),
        serde_json::json!({"name": "Stable", "description": "revised", "completed": true}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_project_reports_count_and_removes_record(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/projects",
            serde_json::json!({"name": "Doomed", "description": "D"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deleted"], 1);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again reports nothing to delete.
    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
