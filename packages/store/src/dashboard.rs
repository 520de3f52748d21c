//! # Dashboard view-model state and summary types
//!
//! Each dashboard view holds a [`FetchState`] for its role-specific summary.
//! The state is the `loading` / `data` / `error` triple plus a request
//! generation counter: [`begin`](FetchState::begin) stamps a new generation
//! and [`resolve`](FetchState::resolve) commits a result only if no newer
//! request has started since — last-requested-wins, so a slow response for a
//! previous user id can never overwrite fresher state.
//!
//! Summary fields all carry `#[serde(default)]`: a missing count renders as
//! 0 and a missing list as empty, never as a render failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::models::{FileInfo, ProjectInfo, TaskInfo, UserInfo};

/// Async interface to the role-specific summary endpoints.
///
/// Admin needs no user id; the other two scope to one user.
pub trait DashboardApi {
    fn fetch_admin_summary(
        &self,
    ) -> impl std::future::Future<Output = Result<AdminSummary, FetchError>>;
    fn fetch_project_manager_summary(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<ProjectManagerSummary, FetchError>>;
    fn fetch_developer_summary(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<DeveloperSummary, FetchError>>;
}

/// System-wide aggregate for the admin view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminSummary {
    pub total_users: u64,
    pub total_projects: u64,
    pub active_projects: u64,
    pub total_tasks: u64,
    pub tasks_by_status: BTreeMap<String, u64>,
    pub tasks_by_priority: BTreeMap<String, u64>,
    pub users_by_role: BTreeMap<String, u64>,
    pub recent_users: Vec<UserInfo>,
}

/// Per-manager aggregate for the project manager view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectManagerSummary {
    pub assigned_projects: Vec<ProjectInfo>,
    pub total_tasks: u64,
    pub tasks_by_status: BTreeMap<String, u64>,
    pub high_priority_tasks: Vec<TaskInfo>,
    pub overdue_tasks: u64,
}

/// Per-developer aggregate shared by the developer and QA views.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeveloperSummary {
    pub assigned_tasks: Vec<TaskInfo>,
    pub hours_this_week: f64,
    pub total_hours_logged: f64,
    pub recent_files: Vec<FileInfo>,
    pub upcoming_deadlines: Vec<TaskInfo>,
}

/// The `loading` / `data` / `error` triple backing one dashboard's render,
/// guarded by a request generation.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    loading: bool,
    data: Option<T>,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            data: None,
            error: None,
            generation: 0,
        }
    }
}

impl<T> FetchState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a new request: bumps the generation, raises `loading`, clears
    /// any previous error. Returns the token to pass back to
    /// [`resolve`](Self::resolve).
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Commit a result for the request started with `generation`.
    ///
    /// Returns `false` and discards the result if a newer request has begun
    /// since. On error the previous `data` is left as it was; no automatic
    /// retry happens anywhere.
    pub fn resolve(&mut self, generation: u64, result: Result<T, FetchError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_response_does_not_overwrite_newer_state() {
        let mut state = FetchState::<DeveloperSummary>::new();
        let first = state.begin();

        // user id changes before the first response arrives
        let second = state.begin();

        let fresh = DeveloperSummary {
            hours_this_week: 12.0,
            ..Default::default()
        };
        assert!(state.resolve(second, Ok(fresh.clone())));
        assert_eq!(state.data(), Some(&fresh));
        assert!(!state.loading());

        // the slow response for the old id now lands and must be discarded
        let stale = DeveloperSummary {
            hours_this_week: 99.0,
            ..Default::default()
        };
        assert!(!state.resolve(first, Ok(stale)));
        assert_eq!(state.data(), Some(&fresh));
    }

    #[test]
    fn failed_fetch_surfaces_error_and_keeps_data() {
        let mut state = FetchState::<AdminSummary>::new();
        let generation = state.begin();
        assert!(state.loading());
        state.resolve(generation, Ok(AdminSummary::default()));

        let generation = state.begin();
        assert!(state.error().is_none());
        state.resolve(generation, Err(FetchError::with_status("summary fetch failed", 503)));
        assert!(!state.loading());
        assert_eq!(state.error(), Some("summary fetch failed"));
        assert!(state.data().is_some());
    }

    #[test]
    fn missing_summary_fields_default_to_zero_and_empty() {
        let summary: AdminSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary, AdminSummary::default());

        let summary: DeveloperSummary =
            serde_json::from_str(r#"{"hoursThisWeek": 7.5}"#).unwrap();
        assert_eq!(summary.hours_this_week, 7.5);
        assert!(summary.assigned_tasks.is_empty());
        assert!(summary.recent_files.is_empty());

        let summary: ProjectManagerSummary =
            serde_json::from_str(r#"{"overdueTasks": 3, "tasksByStatus": {"DONE": 4}}"#).unwrap();
        assert_eq!(summary.overdue_tasks, 3);
        assert_eq!(summary.tasks_by_status.get("DONE"), Some(&4));
        assert!(summary.assigned_projects.is_empty());
    }
}
