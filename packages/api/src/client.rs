//! # Authenticated HTTP client
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] pointed at the REST backend.
//! Authentication is an injected [`Session`] rather than ambient global
//! state: the session holds the bearer token, every request attaches it when
//! present, and a 401 response clears the token and fires the session's
//! unauthorized handler (the web shell registers a redirect to `/login`
//! there). The client itself never touches browser storage or the location.

use std::sync::{Arc, RwLock};

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

/// Shared session context: the bearer token plus the process-wide reaction
/// to losing it.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
    on_unauthorized: Arc<RwLock<Option<UnauthorizedHandler>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously persisted token (e.g. browser storage).
    pub fn with_token(token: Option<String>) -> Self {
        let session = Self::default();
        *session.token.write().unwrap() = token;
        session
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap() = Some(token.into());
    }

    pub fn clear_token(&self) {
        *self.token.write().unwrap() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    /// Register what happens on a 401. Called at most once per response;
    /// replaces any previous handler.
    pub fn on_unauthorized(&self, handler: impl Fn() + Send + Sync + 'static) {
        *self.on_unauthorized.write().unwrap() = Some(Arc::new(handler));
    }

    fn handle_unauthorized(&self) {
        self.clear_token();
        let handler = self.on_unauthorized.read().unwrap().clone();
        if let Some(handler) = handler {
            handler();
        }
    }
}

/// Body shape the backend uses for error payloads.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// The REST client every endpoint module hangs off.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    pub fn from_config(config: &store::ProjectHubConfig, session: Session) -> Self {
        Self::new(config.api.base_url.clone(), session)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send, then sort the response into ok / unauthorized / backend error.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.session.handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(parsed) => parsed.message,
                Err(_) if !body.is_empty() => body,
                Err(_) => format!("request failed with status {}", status.as_u16()),
            };
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// POST with no body where only the status matters.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::POST, path)).await?;
        Ok(())
    }

    /// PATCH with no body where only the acknowledgement matters.
    pub(crate) async fn patch_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::PATCH, path)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = ApiClient::new("http://localhost:8082//", Session::new());
        assert_eq!(client.base_url(), "http://localhost:8082");
    }

    #[test]
    fn session_token_lifecycle() {
        let session = Session::new();
        assert!(!session.is_authenticated());

        session.set_token("abc123");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc123"));

        session.clear_token();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn unauthorized_clears_token_and_fires_handler() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let session = Session::with_token(Some("stale".to_string()));
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        session.on_unauthorized(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        session.handle_unauthorized();
        assert!(!session.is_authenticated());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
