//! JSON snapshots of the whole address book
//!
//! The export format is an object with `contacts`, `relationships` and
//! `exportedAt`. Older exports were a bare array of contacts; both forms
//! import.

use chrono::NaiveDate;
use kinfolk_domain::{Contact, Relationship};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Not valid JSON, or a record did not match the contact schema
    #[error("Failed to read snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON that is neither a contact array nor a snapshot object
    #[error("Invalid snapshot format: expected a contact array or an object with a \"contacts\" array")]
    InvalidFormat,
}

/// Everything needed to restore an address book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// All contacts in order
    pub contacts: Vec<Contact>,

    /// Explicit relationships
    #[serde(default)]
    pub relationships: Vec<Relationship>,

    /// When the snapshot was written (RFC 3339); absent for legacy exports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
}

/// Serialize contacts and relationships as pretty-printed JSON, stamped now
pub fn export_snapshot(
    contacts: &[Contact],
    relationships: &[Relationship],
) -> Result<String, SnapshotError> {
    let snapshot = Snapshot {
        contacts: contacts.to_vec(),
        relationships: relationships.to_vec(),
        exported_at: Some(kinfolk_domain::now_rfc3339()),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Parse a snapshot in either the object or the legacy array form
pub fn import_snapshot(text: &str) -> Result<Snapshot, SnapshotError> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    match value {
        serde_json::Value::Array(_) => {
            let contacts: Vec<Contact> = serde_json::from_value(value)?;
            tracing::debug!(contacts = contacts.len(), "Imported legacy contact array");
            Ok(Snapshot {
                contacts,
                relationships: Vec::new(),
                exported_at: None,
            })
        }
        serde_json::Value::Object(ref map) if map.get("contacts").is_some_and(|c| c.is_array()) => {
            let snapshot: Snapshot = serde_json::from_value(value)?;
            tracing::debug!(
                contacts = snapshot.contacts.len(),
                relationships = snapshot.relationships.len(),
                "Imported snapshot"
            );
            Ok(snapshot)
        }
        _ => Err(SnapshotError::InvalidFormat),
    }
}

/// Suggested file name for an export made on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("relationships-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_then_import() {
        let contacts = vec![Contact::new("Ada", "Lovelace"), Contact::new("Charles", "Babbage")];
        let rel = Relationship::new(
            contacts[0].id.clone(),
            contacts[1].id.clone(),
            "Colleague",
            "Colleague",
        )
        .unwrap();

        let text = export_snapshot(&contacts, &[rel.clone()]).unwrap();
        assert!(text.contains("\"exportedAt\""));

        let snapshot = import_snapshot(&text).unwrap();
        assert_eq!(snapshot.contacts, contacts);
        assert_eq!(snapshot.relationships, vec![rel]);
        assert!(snapshot.exported_at.is_some());
    }

    #[test]
    fn test_import_legacy_array() {
        let snapshot = import_snapshot(r#"[{"id": "a1", "givenName": "Ann"}]"#).unwrap();
        assert_eq!(snapshot.contacts.len(), 1);
        assert!(snapshot.relationships.is_empty());
        assert!(snapshot.exported_at.is_none());
    }

    #[test]
    fn test_import_object_without_relationships() {
        let snapshot = import_snapshot(r#"{"contacts": []}"#).unwrap();
        assert!(snapshot.contacts.is_empty());
    }

    #[test]
    fn test_import_rejects_other_shapes() {
        assert!(matches!(import_snapshot(r#"{"people": []}"#), Err(SnapshotError::InvalidFormat)));
        assert!(matches!(import_snapshot(r#"{"contacts": 3}"#), Err(SnapshotError::InvalidFormat)));
        assert!(matches!(import_snapshot("42"), Err(SnapshotError::InvalidFormat)));
    }

    #[test]
    fn test_import_rejects_bad_json() {
        assert!(matches!(import_snapshot("{not json"), Err(SnapshotError::Json(_))));
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "relationships-2024-03-09.json");
    }
}
