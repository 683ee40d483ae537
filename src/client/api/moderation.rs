//! Moderation API trait for account mutations
//!
//! Deletes and verification changes are not assumed idempotent by the
//! backend, so none of these operations is ever retried.

use async_trait::async_trait;

use crate::client::models::Payload;
use crate::error::Result;

/// Account moderation operations for the JobLink admin API
#[async_trait]
pub trait ModerationApi: Send + Sync {
    /// Delete a job seeker account by identifier
    async fn delete_job_seeker(&self, id: &str) -> Result<Payload>;

    /// Delete a recruiter account by identifier
    async fn delete_recruiter(&self, id: &str) -> Result<Payload>;

    /// Mark a recruiter as verified
    async fn verify_recruiter(&self, id: &str) -> Result<Payload>;

    /// Revoke a recruiter's verification
    async fn unverify_recruiter(&self, id: &str) -> Result<Payload>;
}
