//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the [`api::Session`] and the [`api::ApiClient`]
//! built around it, validates any persisted token on mount, and exposes the
//! resulting [`SessionState`] through context. The 401 reaction (clear the
//! persisted token, go to `/login`) is registered here once, so no other
//! component has to care about expired sessions.

use api::{ApiClient, Session};
use dioxus::prelude::*;
use store::{ProjectHubConfig, UserInfo};

/// Browser storage key for the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub loading: bool,
    /// Whether a bearer token is currently held.
    pub authenticated: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            authenticated: false,
        }
    }
}

impl SessionState {
    /// Router input: a session counts once the token produced a user.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated && self.user.is_some()
    }

    /// The raw role string, for [`store::resolve_dashboard`].
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.role.as_str())
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The shared API client. Cheap to clone into event handlers.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

fn load_persisted_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?
            .local_storage()
            .ok()??
            .get_item(TOKEN_STORAGE_KEY)
            .ok()?
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persist (or with `None`, forget) the bearer token across reloads.
pub fn persist_token(token: Option<&str>) {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            let result = match token {
                Some(token) => storage.set_item(TOKEN_STORAGE_KEY, token),
                None => storage.remove_item(TOKEN_STORAGE_KEY),
            };
            if result.is_err() {
                tracing::warn!("browser storage rejected the token update");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
    }
}

/// Leave the app for the login entry point.
pub fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("session expired, login required");
    }
}

/// Provider component that manages the session.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    let client = use_hook(|| {
        let session = Session::with_token(load_persisted_token());
        session.on_unauthorized(|| {
            persist_token(None);
            redirect_to_login();
        });
        ApiClient::from_config(&ProjectHubConfig::default(), session)
    });
    use_context_provider(|| client.clone());
    use_context_provider(|| state);

    // Validate any persisted token on mount.
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            if !client.session().is_authenticated() {
                state.set(SessionState {
                    user: None,
                    loading: false,
                    authenticated: false,
                });
                return;
            }
            match client.current_user().await {
                Ok(user) => {
                    let authenticated = user.is_some();
                    if !authenticated {
                        // the token was stale; the 401 path already cleared it
                        persist_token(None);
                    }
                    state.set(SessionState {
                        user,
                        loading: false,
                        authenticated,
                    });
                }
                Err(err) => {
                    tracing::error!(%err, "session validation failed");
                    state.set(SessionState {
                        user: None,
                        loading: false,
                        authenticated: false,
                    });
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut state = use_session();
    let client = use_api();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            let _ = client.logout().await;
            persist_token(None);
            state.set(SessionState {
                user: None,
                loading: false,
                authenticated: false,
            });
            redirect_to_login();
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
