//! REST client for the image-generation endpoint.
//!
//! The service takes a free-text prompt and answers with the URL of the
//! generated image: `POST {api_url}/generate-image {"prompt"}` returns
//! `{"imageUrl"}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wedcard_core::ports::{ImageGenerator, PortError};

/// HTTP client for one image-generation service.
#[derive(Debug, Clone)]
pub struct ImageGenApi {
    client: reqwest::Client,
    api_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

/// Response of the `/generate-image` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Errors from the image-generation REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ImageGenApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Image service error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// The service answered 2xx without an image URL.
    #[error("Image service returned no image URL")]
    EmptyUrl,
}

impl From<ImageGenApiError> for PortError {
    fn from(err: ImageGenApiError) -> Self {
        match err {
            ImageGenApiError::Request(e) if e.is_timeout() || e.is_connect() => {
                PortError::Unavailable("image service unreachable".to_string())
            }
            ImageGenApiError::Request(e) => PortError::Unexpected(e.to_string()),
            ImageGenApiError::ApiError { status, body } if (400..500).contains(&status) => {
                PortError::Rejected(summarize(&body, status))
            }
            ImageGenApiError::ApiError { status, body } => {
                PortError::Unavailable(summarize(&body, status))
            }
            ImageGenApiError::EmptyUrl => {
                PortError::Unexpected("image service returned no image URL".to_string())
            }
        }
    }
}

/// Short human-readable reason from an error body.
///
/// Prefers a JSON `error` or `message` field; falls back to the status.
fn summarize(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("image service responded with status {status}"))
}

impl ImageGenApi {
    /// * `api_url` - Base HTTP URL, e.g. `http://host:8080/api`.
    pub fn new(api_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shared pool, custom timeout).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Generate an image for `prompt` and return its URL.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, ImageGenApiError> {
        let response = self
            .client
            .post(format!("{}/generate-image", self.api_url))
            .json(&GenerateRequest { prompt })
            .send()
            .await?;

        let parsed: GenerateResponse = Self::parse_response(response).await?;
        parsed
            .image_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ImageGenApiError::EmptyUrl)
    }

    // ---- private helpers ----

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ImageGenApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ImageGenApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ImageGenApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ImageGenerator for ImageGenApi {
    async fn generate(&self, prompt: &str) -> Result<String, PortError> {
        self.generate_image(prompt).await.map_err(|e| {
            tracing::warn!(error = %e, "Image generation failed");
            PortError::from(e)
        })
    }
}
