//! Backend API Wrappers
//!
//! Browser `fetch` bindings to the site endpoints, organized by domain.

mod contact;
mod news;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

// Re-export all public items
pub use contact::*;
pub use news::*;

/// Failure talking to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    fn network(value: JsValue) -> Self {
        ApiError::Network(format!("{:?}", value))
    }
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(ApiError::network)?;
    value.dyn_into::<Response>().map_err(ApiError::network)
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(ApiError::network)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::network)?;
    Ok(value.as_string().unwrap_or_default())
}
