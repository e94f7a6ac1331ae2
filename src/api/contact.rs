//! Contact Endpoint

use wasm_bindgen::JsValue;
use web_sys::{Headers, Request, RequestInit};

use super::{read_text, send, ApiError};
use crate::models::{ContactPayload, ContactResponse};

/// POST the contact payload as JSON.
///
/// Any HTTP response is returned as-is; `Err` means the request never completed.
pub async fn submit_contact(endpoint: &str, payload: &ContactPayload) -> Result<ContactResponse, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;

    let headers = Headers::new().map_err(ApiError::network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(ApiError::network)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(ApiError::network)?;

    let response = send(&request).await?;
    let status = response.status();
    let body = read_text(&response).await.unwrap_or_else(|e| {
        log::warn!("[contact] could not read response body: {}", e);
        String::new()
    });

    Ok(ContactResponse {
        ok: response.ok(),
        status,
        body,
    })
}
