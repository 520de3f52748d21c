//! Login, logout and session validation against the backend.
//!
//! The flow mirrors the backend's contract: a successful login returns a
//! token (plus a partial user echo); the client stores the token in the
//! [`crate::Session`] and then asks `GET /api/users/me` for the full user
//! record, which is also how a persisted token is validated on startup.

use serde::{Deserialize, Serialize};
use store::UserInfo;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// What `POST /api/auth/login` answers with.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    /// `POST /api/auth/login`. On success the token is stored in the
    /// session; the caller should follow up with [`current_user`](Self::current_user)
    /// for the full record.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.post_json("/api/auth/login", request).await?;
        self.session().set_token(&response.token);
        Ok(response)
    }

    /// `POST /api/auth/logout`. The local token is cleared even when the
    /// backend call fails; a dead session is no reason to stay logged in.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post_empty("/api/auth/logout").await;
        self.session().clear_token();
        match result {
            // the 401 already cleared the session; logging out twice is fine
            Err(ApiError::Unauthorized) | Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(%err, "logout not acknowledged by backend");
                Ok(())
            }
        }
    }

    /// `GET /api/users/me` — the authenticated user, or `None` without a
    /// valid session.
    pub async fn current_user(&self) -> Result<Option<UserInfo>, ApiError> {
        if !self.session().is_authenticated() {
            return Ok(None);
        }
        match self.get_json::<UserInfo>("/api/users/me").await {
            Ok(user) => Ok(Some(user)),
            Err(ApiError::Unauthorized) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
