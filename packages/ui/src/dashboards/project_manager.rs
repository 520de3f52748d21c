//! Portfolio view for project managers.

use dioxus::prelude::*;
use store::{DashboardApi, FetchState, ProjectInfo, ProjectManagerSummary};

use crate::session::use_api;

use super::{priority_class, status_class, DashboardError, DashboardLoading, MetricCard};

#[component]
pub fn ProjectManagerDashboard(user_id: ReadOnlySignal<i64>, user_name: String) -> Element {
    let client = use_api();
    let mut summary = use_signal(FetchState::<ProjectManagerSummary>::new);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            let id = user_id();
            let generation = summary.write().begin();
            let result = client.fetch_project_manager_summary(id).await;
            if !summary.write().resolve(generation, result) {
                tracing::debug!("discarded stale project manager summary");
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
    let high_priority_count = data.high_priority_tasks.len();

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                h1 { "Project Manager Dashboard" }
                p { "Welcome back, {user_name}" }
            }

            div {
                class: "metric-grid",
                MetricCard {
                    value: data.assigned_projects.len().to_string(),
                    label: "My Projects",
                }
                MetricCard { value: data.total_tasks.to_string(), label: "Total Tasks" }
                MetricCard {
                    value: high_priority_count.to_string(),
                    label: "High Priority",
                }
                MetricCard { value: data.overdue_tasks.to_string(), label: "Overdue Tasks" }
            }

            div {
                class: "dashboard-grid",
                section {
                    class: "dashboard-card",
                    h3 { "My Projects" }
                    if data.assigned_projects.is_empty() {
                        p { class: "dashboard-empty", "No projects assigned to you." }
                    }
                    for project in data.assigned_projects.iter() {
                        ProjectRow { key: "{project.id}", project: project.clone() }
                    }
                }

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
            }

            if !data.high_priority_tasks.is_empty() {
                section {
                    class: "dashboard-card dashboard-card--wide",
                    h3 { "High Priority Tasks" }
                    span {
                        class: "dashboard-card-count",
                        "{high_priority_count} tasks"
                    }
                    for task in data.high_priority_tasks.iter().take(5) {
                        div {
                            class: "task-row",
                            span { class: "task-row-title", "{task.title}" }
                            if let Some(project) = task.project_name.as_ref() {
                                span { class: "task-row-project", "{project}" }
                            }
                            span { class: status_class(task.status), {task.status.label()} }
                            span { class: priority_class(task.priority), {task.priority.label()} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectRow(project: ProjectInfo) -> Element {
    let width = project.progress.clamp(0.0, 100.0);
    let percent = project.progress.round();

    rsx! {
        div {
            class: "project-row",
            div {
                class: "project-row-main",
                span { class: "project-row-name", "{project.name}" }
                if let Some(description) = project.description.as_ref() {
                    span { class: "project-row-description", "{description}" }
                }
            }
            div {
                class: "project-row-progress",
                div {
                    class: "progress-track",
                    div {
                        class: "progress-fill",
                        style: "width: {width}%",
                    }
                }
                span { class: "progress-label", "{percent}%" }
            }
        }
    }
}
