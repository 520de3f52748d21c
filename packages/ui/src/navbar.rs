//! Top navigation bar: brand, notification bell, user identity, logout.

use dioxus::prelude::*;
use store::{NotificationStore, ProjectHubConfig};

use crate::notification_center::{NotificationBell, NotificationCenter};
use crate::session::{use_api, use_session, LogoutButton};

/// How long to wait between unread-badge refreshes.
async fn sleep_secs(secs: u32) {
    let duration = std::time::Duration::from_secs(u64::from(secs));
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let client = use_api();
    let mut show_center = use_signal(|| false);
    // Shared with the panel so the badge reflects reads immediately.
    let mut store = use_signal(NotificationStore::new);

    // Keep the badge fresh in the background. A quiet refresh: no loading
    // phase, failures only logged, next round recovers.
    let _badge = use_resource(move || {
        let client = client.clone();
        async move {
            let Some(user_id) = session().user_id() else {
                return;
            };
            let interval = ProjectHubConfig::default()
                .notifications
                .refresh_interval_secs;
            loop {
                if !show_center() {
                    match client.notifications(user_id).await {
                        Ok(items) => {
                            let _ = store.write().finish_load(Ok(items));
                        }
                        Err(err) => {
                            tracing::debug!(%err, "unread badge refresh failed");
                        }
                    }
                }
                if interval == 0 {
                    break;
                }
                sleep_secs(interval).await;
            }
        }
    });

    let state = session();
    let unread = store.read().unread_count();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                span { class: "navbar-logo", "ProjectHub" }
            }
            div {
                class: "navbar-actions",
                if let Some(user) = state.user.as_ref() {
                    NotificationBell {
                        count: unread,
                        on_click: move |_| show_center.set(true),
                    }
                    span { class: "navbar-user", {user.display_name()} }
                    LogoutButton { class: "navbar-logout" }
                }
            }
        }
        if show_center() {
            NotificationCenter {
                store,
                on_close: move |_| show_center.set(false),
            }
        }
    }
}
