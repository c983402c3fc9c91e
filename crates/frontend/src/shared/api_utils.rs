//! API utilities for frontend-backend communication

use contracts::shared::config::AppConfig;

/// Base URL for API requests.
///
/// Uses the configured origin or port, otherwise the page's own origin.
/// Empty (relative URLs) when there is no window.
pub fn api_base(config: &AppConfig) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let origin = location.origin().unwrap_or_default();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location.hostname().unwrap_or_default();
    config.api_base(&origin, &protocol, &hostname)
}
