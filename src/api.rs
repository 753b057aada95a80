//! Users API Client
//!
//! Thin wrapper over the browser fetch API for the paginated users endpoint.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::UsersPage;

/// Base URL of the remote users resource
pub const API_BASE_URL: &str = "https://reqres.in/api";

/// Fetch one page of users: `GET {API_BASE_URL}/users?page={page}`
pub async fn fetch_users_page(page: u32) -> Result<UsersPage, String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    let url = format!("{}/users?page={}", API_BASE_URL, page);

    let resp_value = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(js_error)?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("request failed with status {}", resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
