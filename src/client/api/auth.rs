//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AuthResponse, Credentials};
use crate::error::Result;

/// Authentication operations for the JobLink admin API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange admin credentials for a session token.
    ///
    /// Never sends an `Authorization` header, whatever session the client holds.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse>;
}
