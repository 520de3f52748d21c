//! Notification endpoints, and the [`store::NotificationApi`] impl that
//! plugs the HTTP client into the notification store.

use store::{FetchError, Notification, NotificationApi};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /api/users/{id}/notifications`
    pub async fn notifications(&self, user_id: i64) -> Result<Vec<Notification>, ApiError> {
        self.get_json(&format!("/api/users/{user_id}/notifications"))
            .await
    }

    /// `PATCH /api/notifications/{id}/read`
    pub async fn mark_notification_read(&self, notification_id: i64) -> Result<(), ApiError> {
        self.patch_empty(&format!("/api/notifications/{notification_id}/read"))
            .await
    }

    /// `PATCH /api/users/{id}/notifications/read-all`
    pub async fn mark_all_notifications_read(&self, user_id: i64) -> Result<(), ApiError> {
        self.patch_empty(&format!("/api/users/{user_id}/notifications/read-all"))
            .await
    }
}

impl NotificationApi for ApiClient {
    async fn fetch_notifications(&self, user_id: i64) -> Result<Vec<Notification>, FetchError> {
        self.notifications(user_id).await.map_err(Into::into)
    }

    async fn mark_notification_read(&self, notification_id: i64) -> Result<(), FetchError> {
        ApiClient::mark_notification_read(self, notification_id)
            .await
            .map_err(Into::into)
    }

    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<(), FetchError> {
        ApiClient::mark_all_notifications_read(self, user_id)
            .await
            .map_err(Into::into)
    }
}
