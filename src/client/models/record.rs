//! Job seeker and recruiter records

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scalar_text;

const ID_FIELDS: &[&str] = &["id", "_id", "jobSeekerId", "recruiterId", "userId"];
const NAME_FIELDS: &[&str] = &["name", "fullName", "companyName", "username"];
const EMAIL_FIELDS: &[&str] = &["email", "emailAddress"];
const VERIFIED_FIELDS: &[&str] = &["verified", "isVerified"];
const LIST_FIELDS: &[&str] = &["data", "content", "items", "jobSeekers", "recruiters"];

/// A single job seeker or recruiter, kept exactly as the backend sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Value);

impl Record {
    /// First matching field rendered as text
    pub fn text_field(&self, names: &[&str]) -> Option<String> {
        let map = self.0.as_object()?;
        names
            .iter()
            .find_map(|name| map.get(*name).and_then(scalar_text))
    }

    /// Backend identifier used to address this record
    pub fn id(&self) -> Option<String> {
        self.text_field(ID_FIELDS)
    }

    /// Display name, falling back to `firstName lastName`
    pub fn name(&self) -> Option<String> {
        self.text_field(NAME_FIELDS).or_else(|| {
            let first = self.text_field(&["firstName"]);
            let last = self.text_field(&["lastName"]);
            match (first, last) {
                (Some(f), Some(l)) => Some(format!("{} {}", f, l)),
                (f, l) => f.or(l),
            }
        })
    }

    pub fn email(&self) -> Option<String> {
        self.text_field(EMAIL_FIELDS)
    }

    /// Verification flag for recruiters; `None` when the record has no such field
    pub fn verified(&self) -> Option<bool> {
        let map = self.0.as_object()?;
        VERIFIED_FIELDS
            .iter()
            .find_map(|name| map.get(*name).and_then(Value::as_bool))
    }
}

/// Raw list response for job seekers or recruiters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordList(pub Value);

impl RecordList {
    /// Records contained in the payload.
    ///
    /// Reads a top-level array, or an array under a common wrapper field.
    /// Any other shape yields no records.
    pub fn records(&self) -> Vec<Record> {
        let items = match &self.0 {
            Value::Array(items) => Some(items),
            Value::Object(map) => LIST_FIELDS
                .iter()
                .find_map(|k| map.get(*k).and_then(Value::as_array)),
            _ => None,
        };

        items
            .map(|items| items.iter().cloned().map(Record).collect())
            .unwrap_or_default()
    }
}

impl From<Value> for RecordList {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_accessors() {
        let record = Record(json!({
            "id": 17,
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "verified": false
        }));

        assert_eq!(record.id().as_deref(), Some("17"));
        assert_eq!(record.name().as_deref(), Some("Ada Lovelace"));
        assert_eq!(record.email().as_deref(), Some("ada@example.com"));
        assert_eq!(record.verified(), Some(false));
    }

    #[test]
    fn test_record_name_from_parts() {
        let record = Record(json!({"firstName": "Grace", "lastName": "Hopper"}));
        assert_eq!(record.name().as_deref(), Some("Grace Hopper"));

        let record = Record(json!({"firstName": "Grace"}));
        assert_eq!(record.name().as_deref(), Some("Grace"));
    }

    #[test]
    fn test_record_missing_fields() {
        let record = Record(json!({"other": 1}));
        assert!(record.id().is_none());
        assert!(record.name().is_none());
        assert!(record.email().is_none());
        assert!(record.verified().is_none());

        let record = Record(json!("not an object"));
        assert!(record.id().is_none());
    }

    #[test]
    fn test_record_list_top_level_array() {
        let list = RecordList(json!([{"id": 1}, {"id": 2}]));
        let records = list.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id().as_deref(), Some("2"));
    }

    #[test]
    fn test_record_list_wrapped() {
        let list = RecordList(json!({"content": [{"id": "a"}], "totalElements": 1}));
        assert_eq!(list.records().len(), 1);
    }

    #[test]
    fn test_record_list_unknown_shape() {
        assert!(RecordList(json!({"message": "none"})).records().is_empty());
        assert!(RecordList(Value::Null).records().is_empty());
    }

    #[test]
    fn test_record_list_serializes_unchanged() {
        let body = json!({"content": [{"id": "a", "extra": {"deep": [1, 2]}}], "page": 0});
        let list = RecordList::from(body.clone());
        assert_eq!(serde_json::to_value(&list).unwrap(), body);
    }
}
