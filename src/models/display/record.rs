//! Job seeker / recruiter display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{MISSING, or_missing, truncate_string};
use crate::client::models::Record;

/// Record display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RecordDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    /// `yes`/`no`, or `-` for records without a verification flag
    #[tabled(rename = "VERIFIED")]
    pub verified: String,
}

impl From<&Record> for RecordDisplay {
    fn from(record: &Record) -> Self {
        let verified = match record.verified() {
            Some(true) => "yes".to_string(),
            Some(false) => "no".to_string(),
            None => MISSING.to_string(),
        };

        Self {
            id: or_missing(record.id()),
            name: truncate_string(&or_missing(record.name()), 40),
            email: or_missing(record.email()),
            verified,
        }
    }
}

impl From<Record> for RecordDisplay {
    fn from(record: Record) -> Self {
        Self::from(&record)
    }
}
