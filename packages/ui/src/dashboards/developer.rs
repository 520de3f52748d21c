//! Personal workload view shared by developers and QA engineers.

use dioxus::prelude::*;
use store::{DashboardApi, DeveloperSummary, FetchState, Role};

use crate::session::use_api;

use super::{priority_class, status_class, DashboardError, DashboardLoading, MetricCard};

#[component]
pub fn DeveloperDashboard(
    role: Role,
    user_id: ReadOnlySignal<i64>,
    user_name: String,
) -> Element {
    let client = use_api();
    let mut summary = use_signal(FetchState::<DeveloperSummary>::new);

    // Refetches when the user id changes; a response for a previous id is
    // dropped by the generation check.
    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            let id = user_id();
            let generation = summary.write().begin();
            let result = client.fetch_developer_summary(id).await;
            if !summary.write().resolve(generation, result) {
                tracing::debug!("discarded stale developer summary");
            }
        }
    });

    let state = summary();
    if state.loading() {
        return rsx! {
            DashboardLoading { message: "Loading dashboard…" }
        };
    }
    if let (Some(error), None) = (state.error(), state.data()) {
        return rsx! {
            DashboardError { message: error.to_string() }
        };
    }
    let data = state.data().cloned().unwrap_or_default();
    let heading = format!("{} Dashboard", role.dashboard_label());

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                div {
                    h1 { "{heading}" }
                    p { "Welcome back, {user_name}" }
                }
                div {
                    class: "hours-card",
                    span { class: "hours-label", "Hours This Week" }
                    span { class: "hours-value", "{data.hours_this_week}h" }
                }
            }

            div {
                class: "metric-grid",
                MetricCard { value: data.assigned_tasks.len().to_string(), label: "Assigned Tasks" }
                MetricCard {
                    value: format!("{}h", data.total_hours_logged.round()),
                    label: "Total Hours Logged",
                }
                MetricCard { value: data.recent_files.len().to_string(), label: "Recent Files" }
                MetricCard {
                    value: data.upcoming_deadlines.len().to_string(),
                    label: "Upcoming Deadlines",
                }
            }

            div {
                class: "dashboard-grid",
                section {
                    class: "dashboard-card",
                    h3 { "My Tasks" }
                    if data.assigned_tasks.is_empty() {
                        p { class: "dashboard-empty", "Nothing assigned right now." }
                    }
                    for task in data.assigned_tasks.iter() {
                        div {
                            class: "task-row",
                            span { class: "task-row-title", "{task.title}" }
                            span { class: status_class(task.status), {task.status.label()} }
                            span { class: priority_class(task.priority), {task.priority.label()} }
                        }
                    }
                }

                section {
                    class: "dashboard-card",
                    h3 { "Upcoming Deadlines" }
                    if data.upcoming_deadlines.is_empty() {
                        p { class: "dashboard-empty", "No deadlines this week." }
                    }
                    for task in data.upcoming_deadlines.iter() {
                        div {
                            class: "task-row",
                            span { class: "task-row-title", "{task.title}" }
                            if let Some(due) = task.due_date {
                                span { class: "task-row-due", {due.format("%b %-d").to_string()} }
                            }
                        }
                    }
                }

                section {
                    class: "dashboard-card",
                    h3 { "Recent Files" }
                    if data.recent_files.is_empty() {
                        p { class: "dashboard-empty", "No files uploaded recently." }
                    }
                    for file in data.recent_files.iter() {
                        div {
                            class: "file-row",
                            span { class: "file-row-name", {file.display_name()} }
                            span { class: "file-row-size", {format_file_size(file.file_size)} }
                        }
                    }
                }
            }
        }
    }
}

/// "0 Bytes" / "1.5 KB" / "2.3 MB", matching what the file endpoints report.
fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1);
    let value = bytes as f64 / f64::powi(1024.0, exponent as i32);
    if exponent == 0 {
        format!("{value:.0} {}", UNITS[exponent as usize])
    } else {
        format!("{value:.2} {}", UNITS[exponent as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::format_file_size;

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
    }
}
