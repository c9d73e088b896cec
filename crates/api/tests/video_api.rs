//! HTTP-level integration tests for the `/videos` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_video_returns_201_with_id(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/videos",
        json!({"title": "Alien", "release_date": "1979-05-25T00:00:00Z", "total_inventory": 3}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_video_missing_field_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/videos", json!({"title": "Alien"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_video_without_release_date_is_allowed(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/videos", json!({"title": "Alien", "total_inventory": 1})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let json = body_json(get(app, &format!("/videos/{id}")).await).await;
    assert!(json["release_date"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_video_includes_available_inventory(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/videos", json!({"title": "Alien", "total_inventory": 3})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = get(app, &format!("/videos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Alien");
    assert_eq!(json["total_inventory"], 3);
    assert_eq!(json["available_inventory"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_video_non_integer_id_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/videos/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_video_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/videos/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_videos_supports_title_filter(pool: PgPool) {
    for title in ["Alien", "Aliens"] {
        let app = build_test_app(pool.clone());
        post_json(app, "/videos", json!({"title": title, "total_inventory": 1})).await;
    }

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/videos").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let app = build_test_app(pool);
    let json = body_json(get(app, "/videos?title=Aliens").await).await;
    let videos = json.as_array().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["title"], "Aliens");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_video_replaces_all_fields(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/videos", json!({"title": "Alien", "total_inventory": 1})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = put_json(
        app,
        &format!("/videos/{id}"),
        json!({"title": "Alien (Director's Cut)", "total_inventory": 4}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Alien (Director's Cut)");
    assert_eq!(json["total_inventory"], 4);
    assert_eq!(json["available_inventory"], 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_video_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(
        app,
        "/videos/999999",
        json!({"title": "Nothing", "total_inventory": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_video_returns_200_with_id(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/videos", json!({"title": "Alien", "total_inventory": 1})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/videos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);

    let app = build_test_app(pool);
    let response = get(app, &format!("/videos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_missing_video_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(app, "/videos/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
