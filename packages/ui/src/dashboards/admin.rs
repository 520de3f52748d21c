//! System-wide overview for administrators. Needs no user id.

use dioxus::prelude::*;
use store::{AdminSummary, DashboardApi, FetchState};

use crate::session::use_api;

use super::{DashboardError, DashboardLoading, MetricCard};

#[component]
pub fn AdminDashboard() -> Element {
    let client = use_api();
    let mut summary = use_signal(FetchState::<AdminSummary>::new);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            let generation = summary.write().begin();
            let result = client.fetch_admin_summary().await;
            if !summary.write().resolve(generation, result) {
                tracing::debug!("discarded stale admin summary");
            }
        }
    });

    let state = summary();
    if state.loading() {
        return rsx! {
            DashboardLoading { message: "Loading admin dashboard…" }
        };
    }
    if let (Some(error), None) = (state.error(), state.data()) {
        return rsx! {
            DashboardError { message: error.to_string() }
        };
    }
    let data = state.data().cloned().unwrap_or_default();

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                h1 { "Admin Dashboard" }
                p { "System overview and user management" }
            }

            div {
                class: "metric-grid",
                MetricCard { value: data.total_users.to_string(), label: "Total Users" }
                MetricCard { value: data.total_projects.to_string(), label: "Total Projects" }
                MetricCard { value: data.active_projects.to_string(), label: "Active Projects" }
                MetricCard { value: data.total_tasks.to_string(), label: "Total Tasks" }
            }

            div {
                class: "dashboard-grid",
                section {
                    class: "dashboard-card",
                    h3 { "Tasks by Status" }
                    if data.tasks_by_status.is_empty() {
                        p { class: "dashboard-empty", "No tasks yet." }
                    }
                    for (status, count) in data.tasks_by_status.iter() {
                        div {
                            class: "breakdown-row",
                            span { "{status}" }
                            span { class: "breakdown-count", "{count}" }
                        }
                    }
                }

                section {
                    class: "dashboard-card",
                    h3 { "Tasks by Priority" }
                    if data.tasks_by_priority.is_empty() {
                        p { class: "dashboard-empty", "No tasks yet." }
                    }
                    for (priority, count) in data.tasks_by_priority.iter() {
                        div {
                            class: "breakdown-row",
                            span { "{priority}" }
                            span { class: "breakdown-count", "{count}" }
                        }
                    }
                }

                section {
                    class: "dashboard-card",
                    h3 { "Users by Role" }
                    if data.users_by_role.is_empty() {
                        p { class: "dashboard-empty", "No users yet." }
                    }
                    for (role, count) in data.users_by_role.iter() {
                        div {
                            class: "breakdown-row",
                            span { "{role}" }
                            span { class: "breakdown-count", "{count}" }
                        }
                    }
                }

                section {
                    class: "dashboard-card",
                    h3 { "Recent Users" }
                    if data.recent_users.is_empty() {
                        p { class: "dashboard-empty", "No recent sign-ups." }
                    }
                    for user in data.recent_users.iter() {
                        div {
                            class: "user-row",
                            span { class: "user-row-name", {user.display_name()} }
                            span { class: "user-row-role", "{user.role}" }
                        }
                    }
                }
            }
        }
    }
}
