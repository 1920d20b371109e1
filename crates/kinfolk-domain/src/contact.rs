//! Contact module - the person records the user manages

use crate::{Category, DomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of parents recorded on a contact.
pub const MAX_PARENTS: usize = 2;

/// Unique identifier for a contact
///
/// New ids are UUIDv7 strings, which gives:
/// - Chronological sortability of generated ids
/// - 128-bit uniqueness without coordination
///
/// Ids are otherwise opaque: records imported from older snapshots keep
/// whatever id string they were exported with.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Generate a new UUIDv7-based ContactId
    ///
    /// # Examples
    ///
    /// ```
    /// use kinfolk_domain::ContactId;
    ///
    /// let id = ContactId::new();
    /// assert_eq!(id.as_str().len(), 36);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the timestamp component (milliseconds since Unix epoch) when the
    /// id is a UUIDv7, `None` for legacy ids.
    pub fn timestamp(&self) -> Option<u64> {
        let uuid = uuid::Uuid::parse_str(&self.0).ok()?;
        if uuid.get_version_num() != 7 {
            return None;
        }
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        Some((uuid.as_u128() >> 80) as u64)
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ContactId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered parent links of a contact, at most [`MAX_PARENTS`] entries
///
/// No parent is represented as an empty list. Duplicate ids are kept as
/// recorded; the family graph collapses them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ContactId>", into = "Vec<ContactId>")]
pub struct ParentIds(Vec<ContactId>);

impl ParentIds {
    /// Create parent links from a list of ids
    ///
    /// # Errors
    /// Returns [`DomainError::TooManyParents`] when more than two ids are given
    pub fn new(ids: Vec<ContactId>) -> Result<Self, DomainError> {
        if ids.len() > MAX_PARENTS {
            return Err(DomainError::TooManyParents(ids.len()));
        }
        Ok(Self(ids))
    }

    /// Add a parent link
    ///
    /// # Errors
    /// Returns [`DomainError::TooManyParents`] when two parents are already recorded
    pub fn push(&mut self, id: ContactId) -> Result<(), DomainError> {
        if self.0.len() >= MAX_PARENTS {
            return Err(DomainError::TooManyParents(self.0.len() + 1));
        }
        self.0.push(id);
        Ok(())
    }

    /// Remove every link to `id`, returning whether anything was removed
    pub fn remove(&mut self, id: &ContactId) -> bool {
        let before = self.0.len();
        self.0.retain(|p| p != id);
        self.0.len() != before
    }

    /// Check whether `id` is recorded as a parent
    pub fn contains(&self, id: &ContactId) -> bool {
        self.0.contains(id)
    }

    /// Iterate over the recorded ids in order
    pub fn iter(&self) -> std::slice::Iter<'_, ContactId> {
        self.0.iter()
    }

    /// Number of recorded ids
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no parent is recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View the ids as a slice
    pub fn as_slice(&self) -> &[ContactId] {
        &self.0
    }
}

impl TryFrom<Vec<ContactId>> for ParentIds {
    type Error = DomainError;

    fn try_from(ids: Vec<ContactId>) -> Result<Self, Self::Error> {
        Self::new(ids)
    }
}

impl From<ParentIds> for Vec<ContactId> {
    fn from(ids: ParentIds) -> Self {
        ids.0
    }
}

impl<'a> IntoIterator for &'a ParentIds {
    type Item = &'a ContactId;
    type IntoIter = std::slice::Iter<'a, ContactId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A labelled yearly date such as an anniversary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantDate {
    /// Label shown in reminders (e.g. "Anniversary")
    pub label: String,

    /// ISO date, `YYYY-MM-DD` or `--MM-DD`
    pub date: String,
}

/// A person record
///
/// Field names serialize in camelCase so exported snapshots stay readable
/// by earlier versions of the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier
    pub id: ContactId,

    /// Surname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Middle names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_names: Option<String>,

    /// e.g. "Dr."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honorific_prefixes: Option<String>,

    /// e.g. "Jr."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honorific_suffixes: Option<String>,

    /// Birth surname before marriage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,

    /// Primary category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Free-form category tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Postal address on one line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Birthday, `YYYY-MM-DD` or `--MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    /// Whether the person has died
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_deceased: bool,

    /// Date of death
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,

    /// Parent links (0-2)
    #[serde(default)]
    pub parent_ids: ParentIds,

    /// Interests and hobbies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,

    /// Anniversaries and other yearly dates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub important_dates: Vec<ImportantDate>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_at: String,

    /// Last update timestamp (RFC 3339)
    #[serde(default)]
    pub updated_at: String,
}

impl Contact {
    /// Create a contact with a fresh id and both timestamps set to now
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        let now = crate::now_rfc3339();
        Self {
            id: ContactId::new(),
            family_name: non_empty(family_name.into()),
            given_name: non_empty(given_name.into()),
            additional_names: None,
            honorific_prefixes: None,
            honorific_suffixes: None,
            maiden_name: None,
            category: None,
            categories: Vec::new(),
            email: None,
            phone: None,
            address: None,
            birthday: None,
            is_deceased: false,
            death_date: None,
            parent_ids: ParentIds::default(),
            interests: Vec::new(),
            important_dates: Vec::new(),
            notes: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Replace the generated id (builder style)
    pub fn with_id(mut self, id: impl Into<ContactId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the parent links (builder style)
    pub fn with_parents(mut self, parents: ParentIds) -> Self {
        self.parent_ids = parents;
        self
    }

    /// Bump `updated_at` to now
    pub fn touch(&mut self) {
        self.updated_at = crate::now_rfc3339();
    }

    /// Display name built from the structured name fields
    ///
    /// Format: `[Prefix] Given [Middle] Family (Maiden), Suffix`.
    /// Falls back to `"Unknown"` when no name field is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinfolk_domain::Contact;
    ///
    /// let mut c = Contact::new("Ada", "Lovelace");
    /// c.maiden_name = Some("Byron".into());
    /// assert_eq!(c.display_name(), "Ada Lovelace (Byron)");
    /// ```
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [
            &self.honorific_prefixes,
            &self.given_name,
            &self.additional_names,
            &self.family_name,
        ]
        .into_iter()
        .filter_map(|field| trimmed(field))
        .collect();

        let mut name = parts.join(" ");

        if let Some(maiden) = trimmed(&self.maiden_name) {
            name.push_str(&format!(" ({})", maiden));
        }
        if let Some(suffix) = trimmed(&self.honorific_suffixes) {
            name.push_str(&format!(", {}", suffix));
        }

        if name.trim().is_empty() {
            "Unknown".to_string()
        } else {
            name
        }
    }
}

fn trimmed(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_chronological() {
        let id1 = ContactId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = ContactId::new();

        assert!(id1 < id2, "Earlier UUIDv7 should sort before later UUIDv7");
        assert!(id1.timestamp().unwrap() <= id2.timestamp().unwrap());
    }

    #[test]
    fn test_legacy_id_has_no_timestamp() {
        let id = ContactId::from("k3j9x2");
        assert_eq!(id.as_str(), "k3j9x2");
        assert!(id.timestamp().is_none());
    }

    #[test]
    fn test_parent_ids_limit() {
        let a = ContactId::from("a");
        let b = ContactId::from("b");
        let c = ContactId::from("c");

        let mut parents = ParentIds::new(vec![a.clone()]).unwrap();
        parents.push(b.clone()).unwrap();
        assert_eq!(parents.len(), 2);
        assert!(matches!(parents.push(c.clone()), Err(DomainError::TooManyParents(3))));

        assert!(ParentIds::new(vec![a, b, c]).is_err());
    }

    #[test]
    fn test_parent_ids_keep_duplicates() {
        let a = ContactId::from("a");
        let parents = ParentIds::new(vec![a.clone(), a.clone()]).unwrap();
        assert_eq!(parents.len(), 2);
    }

    #[test]
    fn test_parent_ids_remove() {
        let a = ContactId::from("a");
        let b = ContactId::from("b");
        let mut parents = ParentIds::new(vec![a.clone(), b.clone()]).unwrap();

        assert!(parents.remove(&a));
        assert!(!parents.remove(&a));
        assert_eq!(parents.as_slice(), &[b]);
    }

    #[test]
    fn test_display_name_full() {
        let mut c = Contact::new("  Martin ", "King");
        c.honorific_prefixes = Some("Dr.".into());
        c.additional_names = Some("Luther".into());
        c.honorific_suffixes = Some("Jr.".into());
        assert_eq!(c.display_name(), "Dr. Martin Luther King, Jr.");
    }

    #[test]
    fn test_display_name_unknown() {
        let c = Contact::new("", " ");
        assert_eq!(c.display_name(), "Unknown");
    }

    #[test]
    fn test_deserialize_legacy_record() {
        let json = r#"{
            "id": "x1y2z3",
            "givenName": "Ada",
            "familyName": "Lovelace",
            "category": "Family",
            "parentIds": ["p1", "p2"],
            "importantDates": [{"label": "Anniversary", "date": "1835-07-08"}],
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z"
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id.as_str(), "x1y2z3");
        assert_eq!(contact.category, Some(Category::Family));
        assert_eq!(contact.parent_ids.len(), 2);
        assert_eq!(contact.important_dates[0].label, "Anniversary");
    }

    #[test]
    fn test_deserialize_rejects_three_parents() {
        let json = r#"{"id": "c", "parentIds": ["a", "b", "d"]}"#;
        assert!(serde_json::from_str::<Contact>(json).is_err());
    }

    #[test]
    fn test_missing_parent_ids_means_none() {
        let contact: Contact = serde_json::from_str(r#"{"id": "c"}"#).unwrap();
        assert!(contact.parent_ids.is_empty());
    }
}
