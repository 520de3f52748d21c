//! Notification center panel and navbar bell.
//!
//! The panel owns nothing: the [`NotificationStore`] signal lives in the
//! navbar so the bell badge and the panel stay consistent. Opening the
//! panel triggers a full load (wholesale replace); clicking an unread row
//! flips it locally and fires the PATCH without waiting on it.

use chrono::NaiveDateTime;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBell, FaCircleCheck, FaCircleInfo, FaClock, FaComment, FaStar, FaUserCheck, FaXmark,
};
use dioxus_free_icons::Icon;
use store::{
    Notification, NotificationApi, NotificationFilter, NotificationStore, NotificationType,
};

use crate::session::{use_api, use_session};

/// Bell button for the navbar, with an unread badge.
#[component]
pub fn NotificationBell(count: usize, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "notification-bell",
            onclick: move |_| on_click.call(()),
            Icon { icon: FaBell, width: 20, height: 20 }
            if count > 0 {
                span {
                    class: "notification-badge",
                    if count > 99 { "99+" } else { "{count}" }
                }
            }
        }
    }
}

/// Slide-in panel listing the user's notifications with filter tabs.
#[component]
pub fn NotificationCenter(
    mut store: Signal<NotificationStore>,
    on_close: EventHandler<()>,
) -> Element {
    let session = use_session();
    let client = use_api();
    let mut filter = use_signal(|| NotificationFilter::All);

    // Full load when the panel mounts (and again if the user changes).
    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            let Some(user_id) = session().user_id() else {
                return;
            };
            store.write().begin_load();
            let result = client.fetch_notifications(user_id).await;
            let _ = store.write().finish_load(result);
        }
    });

    let mark_read_client = client.clone();
    let mark_read = use_callback(move |id: i64| {
        if store.write().apply_read(id) {
            let client = mark_read_client.clone();
            spawn(async move {
                if let Err(err) = client.mark_notification_read(id).await {
                    tracing::warn!(notification_id = id, %err, "mark-read not acknowledged");
                }
            });
        }
    });

    let mark_all = move |_| {
        let Some(user_id) = session.peek().user_id() else {
            return;
        };
        if store.write().apply_all_read() {
            let client = client.clone();
            spawn(async move {
                if let Err(err) = client.mark_all_notifications_read(user_id).await {
                    tracing::warn!(user_id, %err, "mark-all-read not acknowledged");
                }
            });
        }
    };

    let state = store.read();
    let unread = state.unread_count();
    let visible: Vec<Notification> = state.filter(filter()).into_iter().cloned().collect();
    let loading = state.is_loading();
    drop(state);

    rsx! {
        div {
            class: "notification-overlay",
            onclick: move |_| on_close.call(()),
        }
        div {
            class: "notification-panel",
            header {
                class: "notification-header",
                div {
                    class: "notification-header-left",
                    h2 { "Notifications" }
                    if unread > 0 {
                        span { class: "notification-unread-badge", "{unread}" }
                    }
                }
                div {
                    class: "notification-header-actions",
                    if unread > 0 {
                        button {
                            class: "notification-mark-all",
                            onclick: mark_all,
                            "Mark all read"
                        }
                    }
                    button {
                        class: "notification-close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 20, height: 20 }
                    }
                }
            }

            nav {
                class: "notification-tabs",
                for tab in NotificationFilter::ALL {
                    button {
                        class: if filter() == tab { "notification-tab notification-tab--active" } else { "notification-tab" },
                        onclick: move |_| filter.set(tab),
                        {tab.label()}
                        if tab == NotificationFilter::Unread && unread > 0 {
                            span { class: "notification-tab-badge", "{unread}" }
                        }
                    }
                }
            }

            div {
                class: "notification-list",
                if loading {
                    div {
                        class: "notification-empty",
                        p { "Loading notifications…" }
                    }
                } else if visible.is_empty() {
                    div {
                        class: "notification-empty",
                        h3 {
                            if filter() == NotificationFilter::Unread {
                                "No unread notifications"
                            } else {
                                "No notifications"
                            }
                        }
                        p {
                            if filter() == NotificationFilter::Unread {
                                "You're all caught up! Check back later for new updates."
                            } else {
                                "You'll see notifications about task assignments, updates, and project milestones here."
                            }
                        }
                    }
                } else {
                    for notification in visible {
                        NotificationRow {
                            key: "{notification.id}",
                            notification: notification.clone(),
                            on_read: mark_read,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationRow(notification: Notification, on_read: EventHandler<i64>) -> Element {
    let id = notification.id;
    let is_read = notification.is_read;
    let row_class = if is_read {
        "notification-item notification-item--read"
    } else {
        "notification-item notification-item--unread"
    };

    rsx! {
        div {
            class: "{row_class}",
            onclick: move |_| {
                if !is_read {
                    on_read.call(id);
                }
            },
            div {
                class: "notification-item-icon",
                TypeIcon { kind: notification.r#type }
                if !is_read {
                    span { class: "notification-unread-dot" }
                }
            }
            div {
                class: "notification-item-body",
                h4 { "{notification.title}" }
                p { "{notification.message}" }
                span {
                    class: "notification-item-time",
                    {format_relative_time(notification.created_at, now_utc())}
                }
            }
        }
    }
}

#[component]
fn TypeIcon(kind: NotificationType) -> Element {
    match kind {
        NotificationType::TaskAssigned => rsx! { Icon { icon: FaUserCheck, width: 20, height: 20 } },
        NotificationType::TaskCompleted => rsx! { Icon { icon: FaCircleCheck, width: 20, height: 20 } },
        NotificationType::CommentAdded => rsx! { Icon { icon: FaComment, width: 20, height: 20 } },
        NotificationType::DueDateReminder => rsx! { Icon { icon: FaClock, width: 20, height: 20 } },
        NotificationType::MilestoneCompleted => rsx! { Icon { icon: FaStar, width: 20, height: 20 } },
        NotificationType::Other => rsx! { Icon { icon: FaCircleInfo, width: 20, height: 20 } },
    }
}

/// Current wall-clock time as a naive UTC timestamp.
fn now_utc() -> NaiveDateTime {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = js_sys::Date::now() as i64;
        chrono::DateTime::from_timestamp_millis(millis)
            .unwrap_or(chrono::DateTime::UNIX_EPOCH)
            .naive_utc()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Utc::now().naive_utc()
    }
}

/// "Just now" / "5m ago" / "3h ago" / "2d ago", falling back to the date for
/// anything older than a week.
fn format_relative_time(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{days}d ago");
    }
    then.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::format_relative_time;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn relative_time_buckets() {
        let now = at(12, 0);
        assert_eq!(format_relative_time(at(11, 59), now), "1m ago");
        assert_eq!(format_relative_time(at(12, 0), now), "Just now");
        assert_eq!(format_relative_time(at(9, 30), now), "2h ago");
        assert_eq!(
            format_relative_time(at(12, 0) - chrono::Duration::days(3), now),
            "3d ago"
        );
        assert_eq!(
            format_relative_time(at(12, 0) - chrono::Duration::days(30), now),
            "May 16, 2024"
        );
    }
}
