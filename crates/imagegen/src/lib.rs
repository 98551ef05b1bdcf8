//! HTTP client for the image-generation service.

pub mod api;

pub use api::{ImageGenApi, ImageGenApiError};
