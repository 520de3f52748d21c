//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    persist_token, redirect_to_login, use_api, use_session, LogoutButton, SessionProvider,
    SessionState, TOKEN_STORAGE_KEY,
};

mod navbar;
pub use navbar::Navbar;

mod notification_center;
pub use notification_center::{NotificationBell, NotificationCenter};

mod role_dashboard;
pub use role_dashboard::RoleBasedDashboard;

pub mod dashboards;
pub use dashboards::{AdminDashboard, DeveloperDashboard, ProjectManagerDashboard};

mod login;
pub use login::LoginForm;
