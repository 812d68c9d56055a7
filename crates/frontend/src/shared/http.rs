//! Shared REST client.
//!
//! Every request carries the session's bearer token when one exists. A 401
//! from any endpoint discards the stored session and reloads the browser onto
//! the login page; nothing is retried or refreshed at this layer.

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::shared::api_utils::join_url;
use crate::system::auth::context::AuthContext;
use crate::system::auth::storage::{BrowserSession, StoredSession};

pub const LOGIN_PATH: &str = "/auth/login";
const UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("session expired, please sign in again")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Whether a failed query may be attempted again.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ApiError::Unauthorized | ApiError::Encode(_))
    }
}

/// Path of a resource collection relative to the server origin.
pub fn resource_path(resource: &str) -> String {
    format!("/api/{}", resource.trim_start_matches('/'))
}

/// Where the client sends the browser when the session ends.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Full page load to `path`, dropping all in-memory state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::error!("http: failed to navigate to {}", path);
            }
        }
    }
}

/// Forwards only the first redirect; concurrent 401s share one navigation.
#[derive(Clone, Debug, Default)]
pub struct OnceNavigator<N> {
    inner: N,
    latch: RedirectLatch,
}

impl<N: Navigator> OnceNavigator<N> {
    pub fn new(inner: N) -> Self {
        Self {
            inner,
            latch: RedirectLatch::default(),
        }
    }
}

impl<N: Navigator> Navigator for OnceNavigator<N> {
    fn redirect(&self, path: &str) {
        if self.latch.trip() {
            self.inner.redirect(path);
        }
    }
}

/// Classify a response status. A 401 sends `navigator` to the login page
/// before the caller sees `ApiError::Unauthorized`; the body is never read.
pub fn check_status(status: u16, navigator: &dyn Navigator) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        UNAUTHORIZED => {
            navigator.redirect(LOGIN_PATH);
            Err(ApiError::Unauthorized)
        }
        other => Err(ApiError::Status {
            status: other,
            message: format!("Request failed with HTTP {}", other),
        }),
    }
}

/// Pull the API's `message` field out of an error body.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with HTTP {}", status))
}

/// Latch that lets only the first 401 trigger a redirect.
#[derive(Clone, Debug, Default)]
pub struct RedirectLatch(Arc<AtomicBool>);

impl RedirectLatch {
    /// `true` exactly once.
    pub fn trip(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    auth: AuthContext,
    navigator: Arc<dyn Navigator + Send + Sync>,
    stored: Arc<dyn StoredSession + Send + Sync>,
}

impl ApiClient {
    /// Client that reloads the browser onto the login page after a 401.
    pub fn new(base_url: impl Into<String>, auth: AuthContext) -> Self {
        Self::with_parts(
            base_url,
            auth,
            OnceNavigator::new(BrowserNavigator),
            BrowserSession,
        )
    }

    pub fn with_parts(
        base_url: impl Into<String>,
        auth: AuthContext,
        navigator: impl Navigator + Send + Sync + 'static,
        stored: impl StoredSession + Send + Sync + 'static,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            auth,
            navigator: Arc::new(navigator),
            stored: Arc::new(stored),
        }
    }

    fn url(&self, path: &str, query: &str) -> String {
        let url = join_url(&self.base_url, path);
        if query.is_empty() {
            url
        } else {
            format!("{}?{}", url, query)
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match self.auth.token_untracked() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// `GET {origin}{path}?{query}` decoded as JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(path, query);
        log::debug!("http: GET {}", url);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.handle(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path, "");
        log::debug!("http: POST {}", url);
        let response = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.handle(response).await
    }

    /// A 401 drops the persisted session and leaves navigation to the
    /// navigator alone. The in-memory session stays untouched so the router
    /// does not race the reload with a redirect of its own.
    fn screen_status(&self, status: u16) -> Result<(), ApiError> {
        if status == UNAUTHORIZED {
            self.stored.discard();
        }
        check_status(status, self.navigator.as_ref())
    }

    async fn handle<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status == UNAUTHORIZED {
            log::warn!("http: 401 from {}, ending session", response.url());
        }

        match self.screen_status(status) {
            Ok(()) => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            Err(ApiError::Status { status, .. }) => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Status {
                    status,
                    message: error_message(status, &body),
                })
            }
            Err(e) => Err(e),
        }
    }
}

/// Shared client provided by `App`.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::tests::session_with;
    use std::cell::RefCell;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    #[test]
    fn test_unauthorized_navigates_once() {
        let navigator = OnceNavigator::new(RecordingNavigator::default());
        for _ in 0..3 {
            assert_eq!(check_status(401, &navigator), Err(ApiError::Unauthorized));
        }
        assert_eq!(*navigator.inner.visited.borrow(), vec![LOGIN_PATH.to_string()]);
    }

    #[derive(Clone, Default)]
    struct SharedNavigator {
        visited: Arc<Mutex<Vec<String>>>,
    }

    impl Navigator for SharedNavigator {
        fn redirect(&self, path: &str) {
            self.visited.lock().unwrap().push(path.to_string());
        }
    }

    #[derive(Clone, Default)]
    struct CountingSession {
        discards: Arc<AtomicUsize>,
    }

    impl StoredSession for CountingSession {
        fn discard(&self) {
            self.discards.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_unauthorized_response_makes_one_navigation() {
        let owner = Owner::new();
        owner.with(|| {
            let auth = AuthContext::new(Some(session_with("expired", &["cashier"])));
            let navigator = SharedNavigator::default();
            let stored = CountingSession::default();
            let client = ApiClient::with_parts(
                "http://pos.test",
                auth,
                OnceNavigator::new(navigator.clone()),
                stored.clone(),
            );

            assert_eq!(client.screen_status(401), Err(ApiError::Unauthorized));
            assert_eq!(client.screen_status(401), Err(ApiError::Unauthorized));

            assert_eq!(*navigator.visited.lock().unwrap(), vec![LOGIN_PATH.to_string()]);
            assert_eq!(stored.discards.load(Ordering::SeqCst), 2);
            // the router must not see the session end before the reload
            assert_eq!(auth.token_untracked().as_deref(), Some("expired"));
        });
    }

    #[test]
    fn test_ok_response_keeps_stored_session() {
        let owner = Owner::new();
        owner.with(|| {
            let navigator = SharedNavigator::default();
            let stored = CountingSession::default();
            let client = ApiClient::with_parts(
                "http://pos.test",
                AuthContext::new(None),
                navigator.clone(),
                stored.clone(),
            );
            assert_eq!(client.screen_status(200), Ok(()));
            assert!(client.screen_status(500).is_err());
            assert!(navigator.visited.lock().unwrap().is_empty());
            assert_eq!(stored.discards.load(Ordering::SeqCst), 0);
        });
    }

    #[test]
    fn test_success_does_not_navigate() {
        let navigator = RecordingNavigator::default();
        assert_eq!(check_status(200, &navigator), Ok(()));
        assert_eq!(check_status(204, &navigator), Ok(()));
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn test_other_errors_pass_through() {
        let navigator = RecordingNavigator::default();
        let err = check_status(500, &navigator).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert!(matches!(
            check_status(403, &navigator),
            Err(ApiError::Status { status: 403, .. })
        ));
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message(422, r#"{"message": "The name field is required."}"#),
            "The name field is required."
        );
        assert_eq!(error_message(500, "<html/>"), "Request failed with HTTP 500");
        assert_eq!(error_message(404, r#"{"message": ""}"#), "Request failed with HTTP 404");
    }

    #[test]
    fn test_retryable() {
        assert!(!ApiError::Unauthorized.is_retryable());
        assert!(ApiError::Network("offline".into()).is_retryable());
        assert!(ApiError::Status { status: 500, message: String::new() }.is_retryable());
    }

    #[test]
    fn test_resource_path() {
        assert_eq!(resource_path("suppliers"), "/api/suppliers");
        assert_eq!(resource_path("/sales-orders/customers"), "/api/sales-orders/customers");
    }
}
