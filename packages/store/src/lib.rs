pub mod config;
pub mod dashboard;
pub mod models;
pub mod notifications;
pub mod router;

mod error;
pub use error::FetchError;

mod memory;
pub use memory::MemoryApi;

pub use config::ProjectHubConfig;
pub use dashboard::{
    AdminSummary, DashboardApi, DeveloperSummary, FetchState, ProjectManagerSummary,
};
pub use models::{
    FileInfo, Notification, NotificationType, ProjectInfo, TaskInfo, TaskPriority, TaskStatus,
    UserInfo,
};
pub use notifications::{LoadPhase, NotificationApi, NotificationFilter, NotificationStore};
pub use router::{resolve_dashboard, DashboardRoute, Role};
