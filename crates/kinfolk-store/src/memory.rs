//! In-memory repository

use crate::{check_unique_ids, strip_parent_links, StoreError};
use kinfolk_domain::{Contact, ContactId, ContactRepository, Relationship, RelationshipId};

/// Vector-backed [`ContactRepository`]
///
/// Keeps contacts in insertion order. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contacts: Vec<Contact>,
    relationships: Vec<Relationship>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with contacts
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            relationships: Vec::new(),
        }
    }
}

impl ContactRepository for MemoryStore {
    type Error = StoreError;

    fn list(&self) -> Result<Vec<Contact>, Self::Error> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), Self::Error> {
        self.contacts = contacts.to_vec();
        Ok(())
    }

    fn replace_all(
        &mut self,
        contacts: &[Contact],
        relationships: &[Relationship],
    ) -> Result<(), Self::Error> {
        check_unique_ids(contacts, relationships)?;
        self.contacts = contacts.to_vec();
        self.relationships = relationships.to_vec();
        Ok(())
    }

    fn merge_all(
        &mut self,
        contacts: &[Contact],
        relationships: &[Relationship],
    ) -> Result<usize, Self::Error> {
        for contact in contacts {
            self.upsert(contact.clone())?;
        }

        let mut added = 0;
        for relationship in relationships {
            if !self.relationships.iter().any(|r| r.id == relationship.id) {
                self.relationships.push(relationship.clone());
                added += 1;
            }
        }
        Ok(added)
    }

    fn get(&self, id: &ContactId) -> Result<Option<Contact>, Self::Error> {
        Ok(self.contacts.iter().find(|c| &c.id == id).cloned())
    }

    fn upsert(&mut self, contact: Contact) -> Result<(), Self::Error> {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => *existing = contact,
            None => self.contacts.push(contact),
        }
        Ok(())
    }

    fn delete(&mut self, id: &ContactId) -> Result<bool, Self::Error> {
        let before = self.contacts.len();
        self.contacts.retain(|c| &c.id != id);
        if self.contacts.len() == before {
            return Ok(false);
        }

        self.relationships.retain(|r| !r.involves(id));
        strip_parent_links(&mut self.contacts, id);
        Ok(true)
    }

    fn list_relationships(&self) -> Result<Vec<Relationship>, Self::Error> {
        Ok(self.relationships.clone())
    }

    fn save_relationships(&mut self, relationships: &[Relationship]) -> Result<(), Self::Error> {
        check_unique_ids(&[], relationships)?;
        self.relationships = relationships.to_vec();
        Ok(())
    }

    fn add_relationship(&mut self, relationship: Relationship) -> Result<(), Self::Error> {
        if self.relationships.iter().any(|r| r.id == relationship.id) {
            return Err(StoreError::InvalidData(format!(
                "Relationship {} already exists",
                relationship.id
            )));
        }
        self.relationships.push(relationship);
        Ok(())
    }

    fn remove_relationship(&mut self, id: &RelationshipId) -> Result<bool, Self::Error> {
        let before = self.relationships.len();
        self.relationships.retain(|r| &r.id != id);
        Ok(self.relationships.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinfolk_domain::ParentIds;

    #[test]
    fn test_upsert_keeps_position() {
        let a = Contact::new("Ann", "A").with_id("a");
        let b = Contact::new("Bob", "B").with_id("b");
        let mut store = MemoryStore::with_contacts(vec![a.clone(), b]);

        let mut renamed = a;
        renamed.given_name = Some("Anna".into());
        store.upsert(renamed).unwrap();

        let contacts = store.list().unwrap();
        assert_eq!(contacts[0].given_name.as_deref(), Some("Anna"));
        assert_eq!(contacts.len(), 2);
    }

    #[test]
    fn test_delete_cascades() {
        let parent = Contact::new("Pat", "P").with_id("p");
        let child = Contact::new("Kim", "P")
            .with_id("k")
            .with_parents(ParentIds::new(vec!["p".into()]).unwrap());
        let mut store = MemoryStore::with_contacts(vec![parent, child]);
        store
            .add_relationship(Relationship::new("p".into(), "k".into(), "Mentor", "Mentee").unwrap())
            .unwrap();

        assert!(store.delete(&"p".into()).unwrap());
        assert!(!store.delete(&"p".into()).unwrap());

        let child = store.get(&"k".into()).unwrap().unwrap();
        assert!(child.parent_ids.is_empty());
        assert!(store.list_relationships().unwrap().is_empty());
    }

    #[test]
    fn test_replace_all_rejects_repeated_ids() {
        let mut store = MemoryStore::with_contacts(vec![Contact::new("Old", "Entry").with_id("old")]);
        let twins = [
            Contact::new("New", "Entry").with_id("new"),
            Contact::new("New", "Again").with_id("new"),
        ];

        assert!(matches!(store.replace_all(&twins, &[]), Err(StoreError::InvalidData(_))));
        assert_eq!(store.list().unwrap()[0].id, ContactId::from("old"));
    }

    #[test]
    fn test_merge_all_skips_known_relationships() {
        let mut store = MemoryStore::new();
        let relationship = Relationship::new("a".into(), "b".into(), "Friend", "Friend").unwrap();
        let contacts = [Contact::new("Ann", "A").with_id("a")];

        assert_eq!(store.merge_all(&contacts, &[relationship.clone()]).unwrap(), 1);
        assert_eq!(store.merge_all(&contacts, &[relationship]).unwrap(), 0);
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.list_relationships().unwrap().len(), 1);
    }
}
