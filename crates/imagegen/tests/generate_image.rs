//! Integration tests for the image-generation client against a local stub
//! service.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use wedcard_core::ports::{ImageGenerator, PortError};
use wedcard_imagegen::{ImageGenApi, ImageGenApiError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn echo_prompt(Json(body): Json<Value>) -> Json<Value> {
    let prompt = body["prompt"].as_str().unwrap_or_default().replace(' ', "-");
    Json(json!({ "imageUrl": format!("https://img.example/{prompt}.png") }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn returns_generated_url() {
    let url = spawn_stub(Router::new().route("/generate-image", post(echo_prompt))).await;
    let api = ImageGenApi::new(url);

    let image = api.generate_image("gold sunset").await.unwrap();
    assert_eq!(image, "https://img.example/gold-sunset.png");
}

#[tokio::test]
async fn missing_url_is_an_error() {
    let router = Router::new().route("/generate-image", post(|| async { Json(json!({})) }));
    let api = ImageGenApi::new(spawn_stub(router).await);

    assert_matches!(api.generate_image("x").await, Err(ImageGenApiError::EmptyUrl));
}

#[tokio::test]
async fn non_success_status_carries_body() {
    let router = Router::new().route(
        "/generate-image",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Prompt is required" })),
            )
        }),
    );
    let api = ImageGenApi::new(spawn_stub(router).await);

    let err = api.generate_image("x").await.unwrap_err();
    assert_matches!(&err, ImageGenApiError::ApiError { status: 400, .. });

    let port: &dyn ImageGenerator = &api;
    assert_eq!(
        port.generate("x").await,
        Err(PortError::Rejected("Prompt is required".to_string()))
    );
}

#[tokio::test]
async fn unreachable_service_is_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ImageGenApi::new(format!("http://{addr}"));
    assert_matches!(api.generate("x").await, Err(PortError::Unavailable(_)));
}
