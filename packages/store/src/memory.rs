use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::dashboard::{AdminSummary, DashboardApi, DeveloperSummary, ProjectManagerSummary};
use crate::error::FetchError;
use crate::models::Notification;
use crate::notifications::NotificationApi;

/// In-memory API collaborator for testing and offline demos.
///
/// Seed it with notifications and summaries, then flip the failure toggles
/// to exercise the error paths. PATCH calls are recorded so tests can assert
/// what reached the "backend".
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    notifications: Arc<Mutex<Vec<Notification>>>,
    admin_summary: Arc<Mutex<AdminSummary>>,
    project_manager_summary: Arc<Mutex<ProjectManagerSummary>>,
    developer_summary: Arc<Mutex<DeveloperSummary>>,
    fail_requests: Arc<AtomicBool>,
    read_patches: Arc<Mutex<Vec<i64>>>,
    read_all_patches: Arc<Mutex<Vec<i64>>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_notifications(&self, notifications: Vec<Notification>) {
        *self.notifications.lock().unwrap() = notifications;
    }

    pub fn seed_admin_summary(&self, summary: AdminSummary) {
        *self.admin_summary.lock().unwrap() = summary;
    }

    pub fn seed_project_manager_summary(&self, summary: ProjectManagerSummary) {
        *self.project_manager_summary.lock().unwrap() = summary;
    }

    pub fn seed_developer_summary(&self, summary: DeveloperSummary) {
        *self.developer_summary.lock().unwrap() = summary;
    }

    /// When set, every operation fails with a synthetic network error.
    pub fn set_failing(&self, failing: bool) {
        self.fail_requests.store(failing, Ordering::SeqCst);
    }

    /// Notification ids that received a read PATCH.
    pub fn read_patches(&self) -> Vec<i64> {
        self.read_patches.lock().unwrap().clone()
    }

    /// User ids that received a bulk read-all PATCH.
    pub fn read_all_patches(&self) -> Vec<i64> {
        self.read_all_patches.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), FetchError> {
        if self.fail_requests.load(Ordering::SeqCst) {
            Err(FetchError::new("connection refused"))
        } else {
            Ok(())
        }
    }
}

impl NotificationApi for MemoryApi {
    async fn fetch_notifications(&self, user_id: i64) -> Result<Vec<Notification>, FetchError> {
        self.check()?;
        Ok(self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn mark_notification_read(&self, notification_id: i64) -> Result<(), FetchError> {
        self.check()?;
        self.read_patches.lock().unwrap().push(notification_id);
        if let Some(n) = self
            .notifications
            .lock()
            .unwrap()
            .iter_mut()
            .find(|n| n.id == notification_id)
        {
            n.is_read = true;
        }
        Ok(())
    }

    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<(), FetchError> {
        self.check()?;
        self.read_all_patches.lock().unwrap().push(user_id);
        for n in self
            .notifications
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|n| n.user_id == user_id)
        {
            n.is_read = true;
        }
        Ok(())
    }
}

impl DashboardApi for MemoryApi {
    async fn fetch_admin_summary(&self) -> Result<AdminSummary, FetchError> {
        self.check()?;
        Ok(self.admin_summary.lock().unwrap().clone())
    }

    async fn fetch_project_manager_summary(
        &self,
        _user_id: i64,
    ) -> Result<ProjectManagerSummary, FetchError> {
        self.check()?;
        Ok(self.project_manager_summary.lock().unwrap().clone())
    }

    async fn fetch_developer_summary(&self, _user_id: i64) -> Result<DeveloperSummary, FetchError> {
        self.check()?;
        Ok(self.developer_summary.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationType;
    use crate::notifications::{LoadPhase, NotificationFilter, NotificationStore};

    fn notification(id: i64, r#type: NotificationType, is_read: bool) -> Notification {
        Notification {
            id,
            user_id: 1,
            title: format!("notification {id}"),
            message: "hello".to_string(),
            r#type,
            is_read,
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            related_task_id: None,
            related_project_id: None,
        }
    }

    fn seeded_api() -> MemoryApi {
        let api = MemoryApi::new();
        api.seed_notifications(vec![
            notification(1, NotificationType::TaskAssigned, false),
            notification(2, NotificationType::MilestoneCompleted, true),
            notification(3, NotificationType::CommentAdded, false),
            notification(4, NotificationType::DueDateReminder, true),
        ]);
        api
    }

    #[tokio::test]
    async fn test_load_replaces_state_wholesale() {
        let api = seeded_api();
        let mut store = NotificationStore::new();

        assert_eq!(*store.phase(), LoadPhase::Idle);
        store.load(&api, 1).await.unwrap();

        assert_eq!(*store.phase(), LoadPhase::Loaded);
        assert_eq!(store.notifications().len(), 4);
        assert_eq!(store.unread_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_retains_previous_state() {
        let api = seeded_api();
        let mut store = NotificationStore::new();
        store.load(&api, 1).await.unwrap();

        api.set_failing(true);
        let err = store.load(&api, 1).await.unwrap_err();
        assert_eq!(err.message, "connection refused");

        // previous items untouched, error recorded, no longer loading
        assert_eq!(store.notifications().len(), 4);
        assert!(!store.is_loading());
        assert!(matches!(store.phase(), LoadPhase::Failed(_)));

        // a later successful load recovers
        api.set_failing(false);
        store.load(&api, 1).await.unwrap();
        assert_eq!(*store.phase(), LoadPhase::Loaded);
    }

    #[tokio::test]
    async fn test_filter_predicates() {
        let api = seeded_api();
        let mut store = NotificationStore::new();
        store.load(&api, 1).await.unwrap();

        let all = store.filter(NotificationFilter::All);
        assert_eq!(all.len(), store.notifications().len());

        let unread: Vec<i64> = store
            .filter(NotificationFilter::Unread)
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(unread, vec![1, 3]);

        let tasks: Vec<i64> = store
            .filter(NotificationFilter::Tasks)
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(tasks, vec![1, 3, 4]);

        let projects: Vec<i64> = store
            .filter(NotificationFilter::Projects)
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(projects, vec![2]);
    }

    #[tokio::test]
    async fn test_unread_count_matches_unread_filter() {
        let api = seeded_api();
        let mut store = NotificationStore::new();
        store.load(&api, 1).await.unwrap();

        assert_eq!(store.unread_count(), store.filter(NotificationFilter::Unread).len());

        store.mark_read(&api, 1).await;
        assert_eq!(store.unread_count(), store.filter(NotificationFilter::Unread).len());

        store.mark_all_read(&api, 1).await;
        assert_eq!(store.unread_count(), store.filter(NotificationFilter::Unread).len());
        assert_eq!(store.unread_count(), 0);
    }

    #[tokio::test]
    async fn test_mark_read_is_optimistic_and_patches_backend() {
        let api = seeded_api();
        let mut store = NotificationStore::new();
        store.load(&api, 1).await.unwrap();

        assert!(store.mark_read(&api, 1).await);
        assert_eq!(store.unread_count(), 1);
        assert_eq!(api.read_patches(), vec![1]);

        // unknown id: no local change, no PATCH
        assert!(!store.mark_read(&api, 99).await);
        assert_eq!(api.read_patches(), vec![1]);
    }

    #[tokio::test]
    async fn test_mark_read_backend_failure_keeps_local_flag() {
        let api = seeded_api();
        let mut store = NotificationStore::new();
        store.load(&api, 1).await.unwrap();

        api.set_failing(true);
        assert!(store.mark_read(&api, 1).await);

        // local flag stays flipped even though the PATCH never landed
        assert_eq!(store.unread_count(), 1);
        assert!(api.read_patches().is_empty());
    }

    #[tokio::test]
    async fn test_mark_all_read_is_idempotent() {
        let api = seeded_api();
        let mut store = NotificationStore::new();
        store.load(&api, 1).await.unwrap();

        assert!(store.mark_all_read(&api, 1).await);
        assert_eq!(store.unread_count(), 0);

        assert!(store.mark_all_read(&api, 1).await);
        assert_eq!(store.unread_count(), 0);
        assert_eq!(api.read_all_patches(), vec![1, 1]);
    }

    #[tokio::test]
    async fn test_mark_before_load_is_a_noop() {
        let api = seeded_api();
        let mut store = NotificationStore::new();

        assert!(!store.mark_read(&api, 1).await);
        assert!(!store.mark_all_read(&api, 1).await);
        assert!(api.read_patches().is_empty());
        assert!(api.read_all_patches().is_empty());
        assert_eq!(*store.phase(), LoadPhase::Idle);
    }

    #[tokio::test]
    async fn test_load_scopes_to_user() {
        let api = MemoryApi::new();
        let mut other = notification(7, NotificationType::TaskCompleted, false);
        other.user_id = 2;
        api.seed_notifications(vec![
            notification(1, NotificationType::TaskAssigned, false),
            other,
        ]);

        let mut store = NotificationStore::new();
        store.load(&api, 2).await.unwrap();
        assert_eq!(store.notifications().len(), 1);
        assert_eq!(store.notifications()[0].id, 7);
    }

    #[tokio::test]
    async fn test_dashboard_api_round_trip() {
        let api = MemoryApi::new();
        api.seed_developer_summary(DeveloperSummary {
            hours_this_week: 32.5,
            ..Default::default()
        });

        let summary = api.fetch_developer_summary(1).await.unwrap();
        assert_eq!(summary.hours_this_week, 32.5);

        api.set_failing(true);
        assert!(api.fetch_admin_summary().await.is_err());
    }
}
