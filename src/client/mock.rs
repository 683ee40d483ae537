//! Mock JobLink admin client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! command handlers without making real API calls.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use super::api::{AuthApi, ListingApi, ModerationApi};
use super::models::{AuthResponse, Credentials, DashboardStats, Payload, RecordList};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockAdminClient::new()
///     .with_recruiters(json!([{"id": 1, "name": "Acme"}]));
///
/// let list = mock.list_recruiters().await?;
/// assert_eq!(list.records().len(), 1);
/// ```
pub struct MockAdminClient {
    dashboard: Value,
    job_seekers: Value,
    recruiters: Value,
    token: Option<String>,
    /// Ids whose mutations fail with NotFound
    failing_ids: HashSet<String>,
    /// Error returned by the next call (consumed on first use)
    error: Arc<Mutex<Option<ApiError>>>,
    /// Calls recorded as `operation:argument`
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockAdminClient {
    fn default() -> Self {
        Self {
            dashboard: json!({}),
            job_seekers: json!([]),
            recruiters: json!([]),
            token: Some("mock-token".to_string()),
            failing_ids: HashSet::new(),
            error: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockAdminClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dashboard(mut self, stats: Value) -> Self {
        self.dashboard = stats;
        self
    }

    pub fn with_job_seekers(mut self, list: Value) -> Self {
        self.job_seekers = list;
        self
    }

    pub fn with_recruiters(mut self, list: Value) -> Self {
        self.recruiters = list;
        self
    }

    /// Token issued by `authenticate`; `None` makes the response tokenless
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }

    pub fn with_failing_id(mut self, id: &str) -> Self {
        self.failing_ids.insert(id.to_string());
        self
    }

    pub fn with_error(mut self, error: ApiError) -> Self {
        self.error = Arc::new(Mutex::new(Some(error)));
        self
    }

    /// Recorded calls in the order they were made
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: String) -> Result<()> {
        self.calls.lock().await.push(call);
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    async fn mutate(&self, op: &str, id: &str) -> Result<Payload> {
        self.record(format!("{}:{}", op, id)).await?;
        if self.failing_ids.contains(id) {
            return Err(ApiError::NotFound(format!("No account with id {}", id)).into());
        }
        Ok(Payload(json!({"id": id, "operation": op})))
    }
}

#[async_trait]
impl AuthApi for MockAdminClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse> {
        self.record(format!("authenticate:{}", credentials.email))
            .await?;
        Ok(AuthResponse(match &self.token {
            Some(token) => json!({ "token": token }),
            None => json!({ "message": "ok" }),
        }))
    }
}

#[async_trait]
impl ListingApi for MockAdminClient {
    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.record("dashboard_stats".to_string()).await?;
        Ok(DashboardStats(self.dashboard.clone()))
    }

    async fn list_job_seekers(&self) -> Result<RecordList> {
        self.record("list_job_seekers".to_string()).await?;
        Ok(RecordList(self.job_seekers.clone()))
    }

    async fn list_recruiters(&self) -> Result<RecordList> {
        self.record("list_recruiters".to_string()).await?;
        Ok(RecordList(self.recruiters.clone()))
    }
}

#[async_trait]
impl ModerationApi for MockAdminClient {
    async fn delete_job_seeker(&self, id: &str) -> Result<Payload> {
        self.mutate("delete_job_seeker", id).await
    }

    async fn delete_recruiter(&self, id: &str) -> Result<Payload> {
        self.mutate("delete_recruiter", id).await
    }

    async fn verify_recruiter(&self, id: &str) -> Result<Payload> {
        self.mutate("verify_recruiter", id).await
    }

    async fn unverify_recruiter(&self, id: &str) -> Result<Payload> {
        self.mutate("unverify_recruiter", id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_lists() {
        let mock = MockAdminClient::new()
            .with_recruiters(json!([{"id": 1}, {"id": 2}]))
            .with_job_seekers(json!({"content": [{"id": 3}]}));

        assert_eq!(mock.list_recruiters().await.unwrap().records().len(), 2);
        assert_eq!(mock.list_job_seekers().await.unwrap().records().len(), 1);
        assert_eq!(mock.calls().await, vec!["list_recruiters", "list_job_seekers"]);
    }

    #[tokio::test]
    async fn test_mock_dashboard() {
        let mock = MockAdminClient::new().with_dashboard(json!({"totalRecruiters": 3}));
        let stats = mock.dashboard_stats().await.unwrap();
        assert_eq!(stats.0, json!({"totalRecruiters": 3}));
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockAdminClient::new().with_error(ApiError::AuthExpired);

        assert!(mock.dashboard_stats().await.unwrap_err().is_auth_expired());
        assert!(mock.dashboard_stats().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_authenticate() {
        let mock = MockAdminClient::new().with_token(Some("t-1"));
        let resp = mock
            .authenticate(&Credentials::new("a@b.c", "pw"))
            .await
            .unwrap();
        assert_eq!(resp.token(), Some("t-1"));

        let mock = MockAdminClient::new().with_token(None);
        let resp = mock
            .authenticate(&Credentials::new("a@b.c", "pw"))
            .await
            .unwrap();
        assert_eq!(resp.token(), None);
    }
}
