//! # Notification store — the client-side copy of a user's notifications
//!
//! [`NotificationStore`] holds the authoritative local list and answers
//! filtered queries. Network access goes through the [`NotificationApi`]
//! trait, so the same logic runs against the real HTTP client or the
//! in-memory [`crate::MemoryApi`].
//!
//! ## Lifecycle
//!
//! A store starts [`LoadPhase::Idle`]. [`load`](NotificationStore::load)
//! moves it to `Loading`, then to `Loaded` (wholesale replace) or `Failed`
//! (previous items retained untouched). Read-flag mutations are only valid
//! once `Loaded`; before that they are explicit no-ops returning `false`.
//!
//! ## Reconciliation
//!
//! `mark_read`/`mark_all_read` flip the local flag first and then issue the
//! backend PATCH. A failed PATCH is logged and **not** rolled back — the
//! next `load` replaces local state wholesale anyway.
//!
//! The async methods take the API by reference so they never hold the store
//! borrowed across an await point; UI code that keeps the store in a signal
//! can instead drive the pure transitions ([`begin_load`](NotificationStore::begin_load),
//! [`finish_load`](NotificationStore::finish_load),
//! [`apply_read`](NotificationStore::apply_read),
//! [`apply_all_read`](NotificationStore::apply_all_read)) around its own
//! awaits.

use crate::error::FetchError;
use crate::models::Notification;

/// Async interface to the notification endpoints.
pub trait NotificationApi {
    fn fetch_notifications(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Notification>, FetchError>>;
    fn mark_notification_read(
        &self,
        notification_id: i64,
    ) -> impl std::future::Future<Output = Result<(), FetchError>>;
    fn mark_all_notifications_read(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<(), FetchError>>;
}

/// Where the store is in its load lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(FetchError),
}

/// Filter criteria for the notification panel tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Tasks,
    Projects,
}

impl NotificationFilter {
    /// The predicate behind each tab.
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.is_read,
            Self::Tasks => notification.r#type.concerns_task(),
            Self::Projects => notification.r#type.concerns_project(),
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
            Self::Tasks => "Tasks",
            Self::Projects => "Projects",
        }
    }

    pub const ALL: [Self; 4] = [Self::All, Self::Unread, Self::Tasks, Self::Projects];
}

/// Client-side notification state for one user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationStore {
    phase: LoadPhase,
    items: Vec<Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == LoadPhase::Loaded
    }

    /// Every held notification, unfiltered.
    pub fn notifications(&self) -> &[Notification] {
        &self.items
    }

    /// Fetch the full list for `user_id`, replacing local state wholesale.
    ///
    /// On failure the previous items stay as they were and the error is
    /// recorded in the phase.
    pub async fn load<A: NotificationApi>(
        &mut self,
        api: &A,
        user_id: i64,
    ) -> Result<(), FetchError> {
        self.begin_load();
        let result = api.fetch_notifications(user_id).await;
        self.finish_load(result)
    }

    /// Mark one notification read: local flag first, then the backend PATCH.
    ///
    /// Returns `false` (and does nothing) when the store is not `Loaded` or
    /// the id is unknown. A backend failure is logged, never rolled back.
    pub async fn mark_read<A: NotificationApi>(&mut self, api: &A, notification_id: i64) -> bool {
        if !self.apply_read(notification_id) {
            return false;
        }
        if let Err(err) = api.mark_notification_read(notification_id).await {
            tracing::warn!(notification_id, %err, "mark-read not acknowledged by backend");
        }
        true
    }

    /// Mark every held notification read with one bulk PATCH.
    ///
    /// Same contract as [`mark_read`](Self::mark_read); idempotent — a
    /// second call finds nothing unread and still reports success.
    pub async fn mark_all_read<A: NotificationApi>(&mut self, api: &A, user_id: i64) -> bool {
        if !self.apply_all_read() {
            return false;
        }
        if let Err(err) = api.mark_all_notifications_read(user_id).await {
            tracing::warn!(user_id, %err, "mark-all-read not acknowledged by backend");
        }
        true
    }

    /// Derived view; never mutates stored state.
    pub fn filter(&self, criterion: NotificationFilter) -> Vec<&Notification> {
        self.items.iter().filter(|n| criterion.matches(n)).collect()
    }

    /// Recomputed on demand so it is always consistent with current state.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    // Pure transitions, for callers that must not hold the store across an
    // await (Dioxus signals).

    /// Enter `Loading`. Items are untouched until the result arrives.
    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Commit a load result: replace wholesale on success, retain previous
    /// items on failure.
    pub fn finish_load(
        &mut self,
        result: Result<Vec<Notification>, FetchError>,
    ) -> Result<(), FetchError> {
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Loaded;
                Ok(())
            }
            Err(err) => {
                self.phase = LoadPhase::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Flip the local read flag. Returns whether a PATCH should follow.
    pub fn apply_read(&mut self, notification_id: i64) -> bool {
        if self.phase != LoadPhase::Loaded {
            return false;
        }
        match self.items.iter_mut().find(|n| n.id == notification_id) {
            Some(n) => {
                n.is_read = true;
                true
            }
            None => false,
        }
    }

    /// Flip every local read flag. Returns `false` only before a successful
    /// load.
    pub fn apply_all_read(&mut self) -> bool {
        if self.phase != LoadPhase::Loaded {
            return false;
        }
        for n in &mut self.items {
            n.is_read = true;
        }
        true
    }
}
