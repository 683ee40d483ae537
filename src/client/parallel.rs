//! Concurrent fan-out of per-identifier operations.
//!
//! Bulk commands (`recruiter verify 1 2 3`) issue one request per id. Calls
//! run concurrently up to a cap; each id keeps its own outcome and a failure
//! for one id does not cancel the others.

use std::future::Future;

use futures::stream::{self, StreamExt};
use log::debug;

use crate::error::Result;

/// Default cap on in-flight requests for bulk commands
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Outcome of one operation in a bulk run
#[derive(Debug)]
pub struct IdOutcome<T> {
    pub id: String,
    pub result: Result<T>,
}

impl<T> IdOutcome<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run `op` for every id with at most `max_concurrent` calls in flight.
///
/// Outcomes are returned in completion order, which is unspecified.
pub async fn for_each_id<T, F, Fut>(
    ids: Vec<String>,
    op: F,
    max_concurrent: usize,
) -> Vec<IdOutcome<T>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if ids.is_empty() {
        return Vec::new();
    }

    let limit = max_concurrent.max(1);
    debug!("Running {} operations with max {} concurrent", ids.len(), limit);

    stream::iter(ids)
        .map(|id| {
            let fut = op(id.clone());
            async move {
                let result = fut.await;
                debug!("Operation for {} finished (ok: {})", id, result.is_ok());
                IdOutcome { id, result }
            }
        })
        .buffer_unordered(limit)
        .collect()
        .await
}
