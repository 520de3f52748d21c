//! # Role routing — which dashboard an authenticated session gets
//!
//! [`resolve_dashboard`] is a pure function of `(is_authenticated, role)`;
//! it performs no fetches of its own. The result is the exhaustive
//! [`DashboardRoute`] union, so adding a role without handling it everywhere
//! is a compile error rather than a silently dropped branch.

use serde::{Deserialize, Serialize};

/// Recognized user capability classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    ProjectManager,
    Developer,
    Qa,
}

impl Role {
    /// Parse the backend's role string. `None` for anything unrecognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ADMIN" => Some(Self::Admin),
            "PROJECT_MANAGER" => Some(Self::ProjectManager),
            "DEVELOPER" => Some(Self::Developer),
            "QA" => Some(Self::Qa),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::ProjectManager => "PROJECT_MANAGER",
            Self::Developer => "DEVELOPER",
            Self::Qa => "QA",
        }
    }

    /// Heading label for the dashboard this role lands on. QA shares the
    /// developer view but keeps its own label.
    pub fn dashboard_label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::ProjectManager => "Project Manager",
            Self::Developer => "Developer",
            Self::Qa => "QA Engineer",
        }
    }
}

/// Exactly one of these renders at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardRoute {
    Admin,
    ProjectManager,
    /// DEVELOPER and QA share this view; the role drives the label only.
    Developer(Role),
    /// No authenticated session. Terminal; no dashboard fetch is attempted.
    Denied,
    /// Role absent (`None`) or unrecognized (the raw offending value).
    /// Terminal; no dashboard fetch is attempted.
    UnknownRole(Option<String>),
}

/// Map a session to its dashboard. Pure; fetching belongs to the selected
/// view.
pub fn resolve_dashboard(is_authenticated: bool, role: Option<&str>) -> DashboardRoute {
    if !is_authenticated {
        return DashboardRoute::Denied;
    }
    let Some(raw) = role else {
        return DashboardRoute::UnknownRole(None);
    };
    match Role::parse(raw) {
        Some(Role::Admin) => DashboardRoute::Admin,
        Some(Role::ProjectManager) => DashboardRoute::ProjectManager,
        Some(role @ (Role::Developer | Role::Qa)) => DashboardRoute::Developer(role),
        None => DashboardRoute::UnknownRole(Some(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_is_denied_regardless_of_role() {
        assert_eq!(resolve_dashboard(false, None), DashboardRoute::Denied);
        assert_eq!(resolve_dashboard(false, Some("ADMIN")), DashboardRoute::Denied);
        assert_eq!(resolve_dashboard(false, Some("OWNER")), DashboardRoute::Denied);
    }

    #[test]
    fn recognized_roles_dispatch() {
        assert_eq!(resolve_dashboard(true, Some("ADMIN")), DashboardRoute::Admin);
        assert_eq!(
            resolve_dashboard(true, Some("PROJECT_MANAGER")),
            DashboardRoute::ProjectManager
        );
        assert_eq!(
            resolve_dashboard(true, Some("DEVELOPER")),
            DashboardRoute::Developer(Role::Developer)
        );
    }

    #[test]
    fn qa_shares_developer_view_with_own_label() {
        let route = resolve_dashboard(true, Some("QA"));
        assert_eq!(route, DashboardRoute::Developer(Role::Qa));
        let DashboardRoute::Developer(role) = route else {
            unreachable!();
        };
        assert_eq!(role.dashboard_label(), "QA Engineer");
    }

    #[test]
    fn unrecognized_role_is_terminal_and_named() {
        assert_eq!(
            resolve_dashboard(true, Some("OWNER")),
            DashboardRoute::UnknownRole(Some("OWNER".to_string()))
        );
    }

    #[test]
    fn absent_role_is_unknown_not_denied() {
        assert_eq!(resolve_dashboard(true, None), DashboardRoute::UnknownRole(None));
    }

    #[test]
    fn role_string_roundtrip() {
        for role in [Role::Admin, Role::ProjectManager, Role::Developer, Role::Qa] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("admin"), None);
    }
}
