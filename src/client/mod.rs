//! JobLink admin API client
//!
//! The API surface is split into focused traits (see [`api`]).
//! [`JobLinkClient`] is the HTTP implementation; [`MockAdminClient`] stands
//! in for it in tests.

pub mod api;
pub mod joblink;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod parallel;
pub mod retry;
pub mod session;

pub use api::{AuthApi, ListingApi, ModerationApi};
pub use joblink::{ClientOptions, JobLinkClient};
#[cfg(test)]
pub use mock::MockAdminClient;
pub use parallel::{IdOutcome, for_each_id};
pub use retry::RetryPolicy;
pub use session::Session;

