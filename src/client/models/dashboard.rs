//! Dashboard statistics model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scalar_text;

/// Raw dashboard statistics payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardStats(pub Value);

impl DashboardStats {
    /// Flatten scalar fields into `(metric, value)` pairs.
    ///
    /// Nested objects contribute dotted names one level deep
    /// (`recruiters.verified`). Arrays are reported by length.
    pub fn metrics(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let Value::Object(map) = &self.0 else {
            if let Some(text) = scalar_text(&self.0) {
                out.push(("value".to_string(), text));
            }
            return out;
        };

        for (key, value) in map {
            match value {
                Value::Object(inner) => {
                    for (inner_key, inner_value) in inner {
                        if let Some(text) = scalar_text(inner_value) {
                            out.push((format!("{}.{}", key, inner_key), text));
                        }
                    }
                }
                Value::Array(items) => out.push((key.clone(), items.len().to_string())),
                other => {
                    if let Some(text) = scalar_text(other) {
                        out.push((key.clone(), text));
                    }
                }
            }
        }
        out
    }
}

impl From<Value> for DashboardStats {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metrics_flat() {
        let stats = DashboardStats(json!({
            "totalJobSeekers": 120,
            "totalRecruiters": 14,
            "pendingVerifications": 3
        }));

        let metrics = stats.metrics();
        assert_eq!(metrics.len(), 3);
        assert!(metrics.contains(&("totalJobSeekers".to_string(), "120".to_string())));
        assert!(metrics.contains(&("pendingVerifications".to_string(), "3".to_string())));
    }

    #[test]
    fn test_metrics_nested_and_arrays() {
        let stats = DashboardStats(json!({
            "recruiters": {"verified": 10, "unverified": 4, "breakdown": {"x": 1}},
            "recentJobs": [1, 2, 3],
            "note": null
        }));

        let metrics = stats.metrics();
        assert!(metrics.contains(&("recruiters.verified".to_string(), "10".to_string())));
        assert!(metrics.contains(&("recruiters.unverified".to_string(), "4".to_string())));
        assert!(metrics.contains(&("recentJobs".to_string(), "3".to_string())));
        assert!(!metrics.iter().any(|(k, _)| k == "note"));
        assert!(!metrics.iter().any(|(k, _)| k.contains("breakdown")));
    }

    #[test]
    fn test_metrics_scalar_body() {
        let stats = DashboardStats(json!(42));
        assert_eq!(stats.metrics(), vec![("value".to_string(), "42".to_string())]);
        assert!(DashboardStats(Value::Null).metrics().is_empty());
    }
}
