//! Bulk operation outcome display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::IdOutcome;
use crate::client::models::Payload;
use crate::error::Error;

/// Result row for one id in a bulk command
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OutcomeDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "DETAIL")]
    pub detail: String,
}

impl From<&IdOutcome<Payload>> for OutcomeDisplay {
    fn from(outcome: &IdOutcome<Payload>) -> Self {
        let (status, detail) = match &outcome.result {
            Ok(payload) => ("ok".to_string(), payload.summary()),
            Err(Error::Api(api)) => match api.status() {
                Some(code) => (format!("failed ({})", code), api.to_string()),
                None => ("failed".to_string(), api.to_string()),
            },
            Err(err) => ("failed".to_string(), err.to_string()),
        };

        Self {
            id: outcome.id.clone(),
            status,
            detail,
        }
    }
}
