//! Role-specific dashboard summary endpoints.

use store::{
    AdminSummary, DashboardApi, DeveloperSummary, FetchError, ProjectManagerSummary,
};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /api/dashboard/admin`
    pub async fn admin_summary(&self) -> Result<AdminSummary, ApiError> {
        self.get_json("/api/dashboard/admin").await
    }

    /// `GET /api/dashboard/project-manager/{id}`
    pub async fn project_manager_summary(
        &self,
        user_id: i64,
    ) -> Result<ProjectManagerSummary, ApiError> {
        self.get_json(&format!("/api/dashboard/project-manager/{user_id}"))
            .await
    }

    /// `GET /api/dashboard/developer/{id}`
    pub async fn developer_summary(&self, user_id: i64) -> Result<DeveloperSummary, ApiError> {
        self.get_json(&format!("/api/dashboard/developer/{user_id}"))
            .await
    }
}

impl DashboardApi for ApiClient {
    async fn fetch_admin_summary(&self) -> Result<AdminSummary, FetchError> {
        self.admin_summary().await.map_err(Into::into)
    }

    async fn fetch_project_manager_summary(
        &self,
        user_id: i64,
    ) -> Result<ProjectManagerSummary, FetchError> {
        self.project_manager_summary(user_id).await.map_err(Into::into)
    }

    async fn fetch_developer_summary(&self, user_id: i64) -> Result<DeveloperSummary, FetchError> {
        self.developer_summary(user_id).await.map_err(Into::into)
    }
}
