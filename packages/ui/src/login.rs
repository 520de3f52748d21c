//! Email/password login form.
//!
//! Login is two requests: `POST /api/auth/login` stores the token, then
//! `GET /api/users/me` fills the session with the full user record. The
//! caller decides where to navigate on success.

use api::LoginRequest;
use dioxus::prelude::*;
use store::UserInfo;

use crate::session::{persist_token, use_api, use_session, SessionState};

#[component]
pub fn LoginForm(on_success: EventHandler<UserInfo>) -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |_| {
        let client = client.clone();
        async move {
            if email.peek().trim().is_empty() || password.peek().is_empty() {
                error.set(Some("Email and password are required.".to_string()));
                return;
            }
            submitting.set(true);
            error.set(None);

            let request = LoginRequest {
                email: email.peek().trim().to_string(),
                password: password.peek().clone(),
            };
            match client.login(&request).await {
                Ok(_) => {
                    persist_token(client.session().token().as_deref());
                    match client.current_user().await {
                        Ok(Some(user)) => {
                            session.set(SessionState {
                                user: Some(user.clone()),
                                loading: false,
                                authenticated: true,
                            });
                            on_success.call(user);
                        }
                        Ok(None) => {
                            submitting.set(false);
                            error.set(Some("Signed in, but the session is invalid.".to_string()));
                        }
                        Err(err) => {
                            submitting.set(false);
                            error.set(Some(err.to_string()));
                        }
                    }
                }
                Err(err) => {
                    submitting.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        }
    };

    rsx! {
        div {
            class: "login-card",
            h1 { "Sign in" }
            p { class: "login-subtitle", "Use your ProjectHub account" }

            if let Some(message) = error() {
                div { class: "login-error", "{message}" }
            }

            form {
                onsubmit: onsubmit,
                div {
                    class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "Enter your email",
                        autocomplete: "email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Enter your password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "login-submit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in…" } else { "Sign in" }
                }
            }
        }
    }
}
