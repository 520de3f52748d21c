//! # Domain models shared across the workspace
//!
//! Defines the records the REST backend returns and the UI renders. These
//! types are `Serialize + Deserialize` with camelCase wire names so they map
//! directly onto the backend's JSON (`isRead`, `createdAt`, `relatedTaskId`).
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Notification`] | A typed, timestamped event record visible to one user, with a mutable read flag. |
//! | [`UserInfo`] | The authenticated user as the backend reports it. The `role` field stays a raw string so an unrecognized value can be surfaced verbatim. |
//! | [`TaskInfo`] | A task row inside a dashboard summary (assigned tasks, high-priority tasks, upcoming deadlines). |
//! | [`ProjectInfo`] | A project row inside a dashboard summary. |
//! | [`FileInfo`] | An uploaded attachment as listed by the file endpoints. |
//!
//! Every summary-embedded type defaults all of its fields, so a partial
//! payload from the backend never prevents rendering.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The fixed notification type enumeration.
///
/// Unknown values deserialize as [`NotificationType::Other`] so a newer
/// backend cannot break the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    TaskAssigned,
    TaskCompleted,
    CommentAdded,
    DueDateReminder,
    MilestoneCompleted,
    #[serde(other)]
    Other,
}

impl NotificationType {
    /// Whether this notification concerns a task (the "Tasks" filter tab).
    pub fn concerns_task(&self) -> bool {
        matches!(
            self,
            Self::TaskAssigned | Self::TaskCompleted | Self::CommentAdded | Self::DueDateReminder
        )
    }

    /// Whether this notification concerns a project (the "Projects" filter tab).
    pub fn concerns_project(&self) -> bool {
        matches!(self, Self::MilestoneCompleted)
    }
}

/// A single notification as fetched from the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub r#type: NotificationType,
    /// Mutable by the owning user only; flipped locally before the backend
    /// acknowledges.
    pub is_read: bool,
    /// Set server-side on the originating domain event; immutable.
    pub created_at: NaiveDateTime,
    /// Weak back-reference for lookup, no ownership.
    #[serde(default)]
    pub related_task_id: Option<i64>,
    #[serde(default)]
    pub related_project_id: Option<i64>,
}

/// The authenticated user as reported by `GET /api/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Raw role string. Parse with [`crate::Role::parse`]; the raw value is
    /// kept around for the unknown-role screen.
    pub role: String,
}

impl UserInfo {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Task workflow status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    InReview,
    Done,
    Blocked,
    #[serde(other)]
    Other,
}

impl TaskStatus {
    /// Human label for status chips.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::InReview => "In Review",
            Self::Done => "Done",
            Self::Blocked => "Blocked",
            Self::Other => "Unknown",
        }
    }
}

/// Task priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
    #[serde(other)]
    Other,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Other => "Unknown",
        }
    }
}

/// A task row embedded in a dashboard summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub project_name: Option<String>,
}

/// A project row embedded in a dashboard summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Completion percentage, 0–100.
    #[serde(default)]
    pub progress: f64,
}

/// An uploaded attachment as listed by the file endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub uploaded_at: Option<NaiveDateTime>,
}

impl FileInfo {
    /// The name to show and to save downloads under.
    pub fn display_name(&self) -> &str {
        self.original_filename.as_deref().unwrap_or(&self.filename)
    }
}
