//! Backend API Bindings
//!
//! REST wrappers over the console backend, organized by resource. All
//! requests go through the fetch-backed reqwest client; errors come back
//! as strings for the pages to log or display.

mod experiment;
mod feeding;
mod journal;
mod layout;
mod plant;
mod recipe;
mod tray;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export all public items
pub use experiment::*;
pub use feeding::*;
pub use journal::*;
pub use layout::*;
pub use plant::*;
pub use recipe::*;
pub use tray::*;

/// API root: `<origin>/api/v1`, overridable through a `data-api-base`
/// attribute on the document body.
pub(crate) fn base_url() -> String {
    let document = web_sys::window().and_then(|w| w.document());
    if let Some(base) = document
        .as_ref()
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute("data-api-base"))
    {
        return base;
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}/api/v1")
}

/// Percent-encodes one query-string value.
pub(crate) fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Client::new()
        .get(format!("{}{}", base_url(), path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("GET {} failed: {}", path, response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Client::new()
        .post(format!("{}{}", base_url(), path))
        .json(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("POST {} failed: {}", path, response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Client::new()
        .put(format!("{}{}", base_url(), path))
        .json(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("PUT {} failed: {}", path, response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

pub(crate) async fn delete(path: &str) -> Result<(), String> {
    let response = Client::new()
        .delete(format!("{}{}", base_url(), path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("DELETE {} failed: {}", path, response.status()));
    }
    Ok(())
}
