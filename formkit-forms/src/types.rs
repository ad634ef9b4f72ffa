//! Record — an immutable committed snapshot

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A committed form submission.
///
/// Captured from session values at commit time and owned by the store from
/// then on; the only way an existing record changes is an explicit
/// update-at-index with a freshly committed replacement.
///
/// The record remembers which form type produced it so a later edit can
/// restore the right schema before pre-filling the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Form-type id of the schema this record was committed under.
    pub form_type: String,
    /// Field name → final value, in schema order.
    pub values: IndexMap<String, String>,
}

impl Record {
    pub fn new(form_type: impl Into<String>, values: IndexMap<String, String>) -> Self {
        Self {
            form_type: form_type.into(),
            values,
        }
    }

    /// The value of a field, if the record has it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        let mut values = IndexMap::new();
        values.insert("firstName".to_string(), "Ann".to_string());
        values.insert("lastName".to_string(), "Lee".to_string());
        values.insert("age".to_string(), String::new());
        Record::new("userInfo", values)
    }

    #[test]
    fn get_by_field_name() {
        let record = sample_record();
        assert_eq!(record.get("firstName"), Some("Ann"));
        assert_eq!(record.get("age"), Some(""));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn serializes_in_field_order() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let first = json.find("firstName").unwrap();
        let last = json.find("lastName").unwrap();
        let age = json.find("age").unwrap();
        assert!(first < last && last < age);
    }

    #[test]
    fn json_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
