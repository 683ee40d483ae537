//! Dashboard statistic display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::DashboardStats;

/// One dashboard metric row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StatDisplay {
    #[tabled(rename = "METRIC")]
    pub metric: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl StatDisplay {
    /// Rows for every scalar metric in the payload
    pub fn rows(stats: &DashboardStats) -> Vec<Self> {
        stats
            .metrics()
            .into_iter()
            .map(|(metric, value)| Self { metric, value })
            .collect()
    }
}
