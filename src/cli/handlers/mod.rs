//! Shared command handler patterns
//!
//! - [`list`] - Render job seeker / recruiter lists
//! - [`bulk`] - Run a mutation for several ids concurrently and report per-id results

pub mod bulk;
pub mod list;
