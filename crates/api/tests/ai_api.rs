//! Integration tests for `/api/v1/ai/generate-image`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with_generator, post_json, StubGenerator};
use serde_json::json;
use sqlx::PgPool;
use wedcard_core::ports::PortError;

#[sqlx::test(migrations = "../../db/migrations")]
async fn returns_generated_image_url(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/ai/generate-image",
        json!({ "prompt": "gold and ivory florals" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["imageUrl"], "https://img.example/generated.png");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_prompt_is_rejected(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/ai/generate-image",
        json!({ "prompt": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json(
        build_test_app(pool),
        "/api/v1/ai/generate-image",
        json!({ "prompt": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Prompt is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generator_rejection_is_reported(pool: PgPool) {
    let app = build_test_app_with_generator(
        pool,
        Arc::new(StubGenerator(Err(PortError::Rejected(
            "content policy violation".to_string(),
        )))),
    );
    let response = post_json(app, "/api/v1/ai/generate-image", json!({ "prompt": "x" })).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_REJECTED");
    assert_eq!(json["error"], "content policy violation");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generator_outage_is_503(pool: PgPool) {
    let app = build_test_app_with_generator(
        pool,
        Arc::new(StubGenerator(Err(PortError::Unavailable(
            "image service unreachable".to_string(),
        )))),
    );
    let response = post_json(app, "/api/v1/ai/generate-image", json!({ "prompt": "x" })).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
