//! JobLink admin API data models
//!
//! Backend entities are opaque to this crate. Each model wraps the raw JSON
//! payload unchanged and only adds read accessors, so serializing a model
//! reproduces exactly what the backend sent.

// Accessors are exported for completeness, even if not all are used by CLI commands.
#![allow(dead_code)]

mod auth;
mod dashboard;
mod record;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use auth::{AuthResponse, Credentials};
pub use dashboard::DashboardStats;
pub use record::{Record, RecordList};

/// Raw backend payload returned by mutating operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(pub Value);

impl Payload {
    /// Borrow the underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the underlying JSON value
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Short single-line rendering for status output
    pub fn summary(&self) -> String {
        match &self.0 {
            Value::Null => "ok".to_string(),
            Value::String(s) if s.is_empty() => "ok".to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Read a scalar JSON field as display text
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
