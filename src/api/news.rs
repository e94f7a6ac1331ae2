//! News Endpoint

use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit};

use super::{send, ApiError};
use crate::models::NewsItem;

/// Fetch the news list once; non-OK statuses and non-array bodies are errors
pub async fn fetch_news(endpoint: &str) -> Result<Vec<NewsItem>, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(ApiError::network)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(ApiError::network)?;

    let response = send(&request).await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let promise = response.json().map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
