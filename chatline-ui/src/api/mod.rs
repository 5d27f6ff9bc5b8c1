//! Chatline API
//!
//! HTTP access to the Chatline backend. The backend address is runtime
//! configuration kept in local storage, so a deployed bundle can be pointed
//! at any server.

pub mod client;
pub mod error;

pub use client::*;
pub use error::ClientError;

/// Backend used when nothing is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Local storage key holding the backend address
const API_BASE_KEY: &str = "chatline_api_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = local_storage().and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten());
    normalize_base(stored.as_deref())
}

/// Set the API base URL in local storage; an empty value restores the default
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let result = if url.trim().is_empty() {
            storage.remove_item(API_BASE_KEY)
        } else {
            storage.set_item(API_BASE_KEY, url.trim())
        };

        if result.is_err() {
            leptos::logging::warn!("Could not persist API base URL");
        }
    }
}

/// Trim whitespace and trailing slashes, falling back to the default
fn normalize_base(url: Option<&str>) -> String {
    match url.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(None), DEFAULT_API_BASE);
        assert_eq!(normalize_base(Some("   ")), DEFAULT_API_BASE);
        assert_eq!(
            normalize_base(Some(" https://chat.example.com/ ")),
            "https://chat.example.com"
        );
        assert_eq!(
            normalize_base(Some("http://10.0.0.5:9000//")),
            "http://10.0.0.5:9000"
        );
    }
}
