//! API trait definitions split by responsibility
//!
//! This module organizes the JobLink admin API surface into focused sub-traits:
//! - [`AuthApi`] - Admin authentication
//! - [`ListingApi`] - Read-only dashboard and collection operations
//! - [`ModerationApi`] - Account deletion and recruiter verification

mod auth;
mod listing;
mod moderation;

pub use auth::AuthApi;
pub use listing::ListingApi;
pub use moderation::ModerationApi;
