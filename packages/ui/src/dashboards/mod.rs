//! The three role dashboards and their shared building blocks.

mod admin;
mod developer;
mod project_manager;

pub use admin::AdminDashboard;
pub use developer::DeveloperDashboard;
pub use project_manager::ProjectManagerDashboard;

use dioxus::prelude::*;
use store::{TaskPriority, TaskStatus};

/// One number-over-label card in the overview grid.
#[component]
pub(crate) fn MetricCard(value: String, label: &'static str) -> Element {
    rsx! {
        div {
            class: "metric-card",
            h3 { class: "metric-card-value", "{value}" }
            p { class: "metric-card-label", "{label}" }
        }
    }
}

/// Full-page spinner shown before the first summary arrives.
#[component]
pub(crate) fn DashboardLoading(message: &'static str) -> Element {
    rsx! {
        div {
            class: "dashboard-state",
            p { "{message}" }
        }
    }
}

/// Failed fetch; the user re-triggers by re-navigating, never automatically.
#[component]
pub(crate) fn DashboardError(message: String) -> Element {
    rsx! {
        div {
            class: "dashboard-state",
            div {
                class: "dashboard-error-card",
                h2 { "Something went wrong" }
                p { "{message}" }
            }
        }
    }
}

pub(crate) fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "status-chip status-chip--todo",
        TaskStatus::InProgress => "status-chip status-chip--in-progress",
        TaskStatus::InReview => "status-chip status-chip--in-review",
        TaskStatus::Done => "status-chip status-chip--done",
        TaskStatus::Blocked => "status-chip status-chip--blocked",
        TaskStatus::Other => "status-chip",
    }
}

pub(crate) fn priority_class(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Critical => "priority-chip priority-chip--critical",
        TaskPriority::High => "priority-chip priority-chip--high",
        TaskPriority::Medium => "priority-chip priority-chip--medium",
        TaskPriority::Low => "priority-chip priority-chip--low",
        TaskPriority::Other => "priority-chip",
    }
}
