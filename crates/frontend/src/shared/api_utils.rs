//! API endpoint configuration.
//!
//! The API root is baked in at build time from `API_URL`
//! (e.g. `API_URL=https://pos.example.com/api trunk build`).

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Root of the REST API, without a trailing slash.
pub fn api_base() -> String {
    normalize_base(option_env!("API_URL").unwrap_or(DEFAULT_API_URL))
}

/// Server origin with the `/api` suffix removed.
pub fn api_origin() -> String {
    strip_api_suffix(&api_base())
}

/// Build a full API URL from a path relative to the API root.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/suppliers");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn strip_api_suffix(base: &str) -> String {
    base.strip_suffix("/api").unwrap_or(base).to_string()
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
