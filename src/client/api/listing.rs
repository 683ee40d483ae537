//! Listing API trait for read-only operations

use async_trait::async_trait;

use crate::client::models::{DashboardStats, RecordList};
use crate::error::Result;

/// Read-only operations for the JobLink admin API
///
/// These are the only operations eligible for retry after a network failure.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// Fetch the admin dashboard statistics
    async fn dashboard_stats(&self) -> Result<DashboardStats>;

    /// List all registered job seekers
    async fn list_job_seekers(&self) -> Result<RecordList>;

    /// List all registered recruiters
    async fn list_recruiters(&self) -> Result<RecordList>;
}
