//! Role-based dashboard dispatch.
//!
//! Exactly one dashboard renders per session. The match on
//! [`DashboardRoute`] is exhaustive, so a new role variant fails to compile
//! here until it gets a view.

use dioxus::prelude::*;
use store::{resolve_dashboard, DashboardRoute};

use crate::dashboards::{AdminDashboard, DeveloperDashboard, ProjectManagerDashboard};
use crate::session::use_session;

#[component]
pub fn RoleBasedDashboard() -> Element {
    let session = use_session();
    let state = session();

    if state.loading {
        return rsx! {
            div {
                class: "dashboard-state",
                p { "Loading…" }
            }
        };
    }

    let route = resolve_dashboard(state.is_authenticated(), state.role());
    match (route, state.user) {
        (DashboardRoute::Admin, _) => rsx! {
            AdminDashboard {}
        },
        (DashboardRoute::ProjectManager, Some(user)) => rsx! {
            ProjectManagerDashboard { user_id: user.id, user_name: user.display_name().to_string() }
        },
        (DashboardRoute::Developer(role), Some(user)) => rsx! {
            DeveloperDashboard { role, user_id: user.id, user_name: user.display_name().to_string() }
        },
        // resolve_dashboard only picks a user-scoped view for an
        // authenticated session, which implies a user record
        (DashboardRoute::ProjectManager | DashboardRoute::Developer(_), None)
        | (DashboardRoute::Denied, _) => rsx! {
            ErrorState {
                title: "Access Denied",
                message: "Please log in to access the dashboard.".to_string(),
            }
        },
        (DashboardRoute::UnknownRole(role), _) => rsx! {
            ErrorState {
                title: "Unknown Role",
                message: format!(
                    "Your role \"{}\" is not recognized. Please contact your administrator.",
                    role.as_deref().unwrap_or("(none)")
                ),
            }
        },
    }
}

#[component]
fn ErrorState(title: &'static str, message: String) -> Element {
    rsx! {
        div {
            class: "dashboard-state",
            div {
                class: "dashboard-error-card",
                h2 { "{title}" }
                p { "{message}" }
            }
        }
    }
}
