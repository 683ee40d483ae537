//! Generic record list handler
//!
//! Job seeker and recruiter listings share one flow:
//! 1. Fetch the raw list payload
//! 2. Apply the optional filter and limit
//! 3. Print rows, or the backend payload as JSON

use log::debug;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::client::models::{Record, RecordList};
use crate::error::Result;
use crate::models::display::RecordDisplay;
use crate::output;

/// Selection applied to a record list before display
pub struct Selection<'a> {
    pub limit: Option<usize>,
    pub filter: Option<&'a dyn Fn(&Record) -> bool>,
}

impl Selection<'_> {
    pub fn all() -> Self {
        Self {
            limit: None,
            filter: None,
        }
    }

    fn is_all(&self) -> bool {
        self.limit.is_none() && self.filter.is_none()
    }

    /// Apply the filter, then the limit
    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        let filtered = records
            .into_iter()
            .filter(|r| self.filter.is_none_or(|f| f(r)));
        match self.limit {
            Some(limit) => filtered.take(limit).collect(),
            None => filtered.collect(),
        }
    }
}

/// Print a record list in the requested format.
///
/// JSON output carries the backend payload untouched when no selection is
/// active; otherwise it carries the selected records as an array.
pub fn print_records(
    list: &RecordList,
    selection: &Selection<'_>,
    heading: &str,
    format: OutputFormat,
) -> Result<()> {
    let records = selection.apply(list.records());
    debug!("Showing {} {}", records.len(), heading);

    let rows: Vec<RecordDisplay> = records.iter().map(RecordDisplay::from).collect();

    if selection.is_all() {
        output::print_rows(&rows, list, heading, format)
    } else {
        let raw: Vec<&Value> = records.iter().map(|r| &r.0).collect();
        output::print_rows(&rows, &raw, heading, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        vec![
            Record(json!({"id": 1, "verified": true})),
            Record(json!({"id": 2, "verified": false})),
            Record(json!({"id": 3, "verified": false})),
            Record(json!({"id": 4})),
        ]
    }

    #[test]
    fn test_selection_all() {
        assert_eq!(Selection::all().apply(records()).len(), 4);
    }

    #[test]
    fn test_selection_limit() {
        let selection = Selection {
            limit: Some(2),
            filter: None,
        };
        let picked = selection.apply(records());
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].id().as_deref(), Some("1"));
    }

    #[test]
    fn test_selection_filter_then_limit() {
        let unverified = |r: &Record| r.verified() == Some(false);
        let selection = Selection {
            limit: Some(1),
            filter: Some(&unverified),
        };
        let picked = selection.apply(records());
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id().as_deref(), Some("2"));
    }
}
