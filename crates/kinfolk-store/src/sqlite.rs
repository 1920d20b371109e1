//! SQLite-backed repository

use crate::{check_unique_ids, strip_parent_links, StoreError};
use kinfolk_domain::{Contact, ContactId, ContactRepository, Relationship, RelationshipId};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite-based implementation of [`ContactRepository`]
///
/// Contacts are stored as JSON payloads with an explicit position column so
/// [`ContactRepository::list`] returns them in insertion order. Explicit
/// relationships get their own table.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kinfolk_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("kinfolk.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Number of stored contacts
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn load_contacts(conn: &Connection) -> Result<Vec<Contact>, StoreError> {
        let mut stmt = conn.prepare("SELECT payload FROM contacts ORDER BY position, rowid")?;
        let payloads = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        payloads
            .iter()
            .map(|payload| serde_json::from_str(payload).map_err(StoreError::from))
            .collect()
    }

    fn write_contact(conn: &Connection, position: i64, contact: &Contact) -> Result<(), StoreError> {
        let payload = serde_json::to_string(contact)?;
        conn.execute(
            "INSERT INTO contacts (id, position, payload, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                contact.id.as_str(),
                position,
                payload,
                &contact.created_at,
                &contact.updated_at,
            ],
        )?;
        Ok(())
    }

    fn update_payload(conn: &Connection, contact: &Contact) -> Result<(), StoreError> {
        let payload = serde_json::to_string(contact)?;
        conn.execute(
            "UPDATE contacts SET payload = ?2, updated_at = ?3 WHERE id = ?1",
            params![contact.id.as_str(), payload, &contact.updated_at],
        )?;
        Ok(())
    }

    fn upsert_contact(conn: &Connection, contact: &Contact) -> Result<(), StoreError> {
        let payload = serde_json::to_string(contact)?;

        // Existing rows keep their position
        conn.execute(
            "INSERT INTO contacts (id, position, payload, created_at, updated_at)
             VALUES (?1, (SELECT COALESCE(MAX(position), -1) + 1 FROM contacts), ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
             payload = excluded.payload, updated_at = excluded.updated_at",
            params![
                contact.id.as_str(),
                payload,
                &contact.created_at,
                &contact.updated_at,
            ],
        )?;
        Ok(())
    }

    fn relationship_exists(conn: &Connection, id: &RelationshipId) -> Result<bool, StoreError> {
        let exists = conn
            .query_row(
                "SELECT 1 FROM relationships WHERE id = ?1",
                params![id.as_str()],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);
        Ok(exists)
    }

    fn write_relationship(conn: &Connection, relationship: &Relationship) -> Result<(), StoreError> {
        conn.execute(
            "INSERT INTO relationships (id, contact_id_1, contact_id_2, type_1_to_2, type_2_to_1, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                relationship.id.as_str(),
                relationship.contact_id1.as_str(),
                relationship.contact_id2.as_str(),
                &relationship.type_1_to_2,
                &relationship.type_2_to_1,
                &relationship.created_at,
                &relationship.updated_at,
            ],
        )?;
        Ok(())
    }
}

impl ContactRepository for SqliteStore {
    type Error = StoreError;

    fn list(&self) -> Result<Vec<Contact>, Self::Error> {
        Self::load_contacts(&self.conn)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM contacts", [])?;
        for (position, contact) in contacts.iter().enumerate() {
            Self::write_contact(&tx, position as i64, contact)?;
        }
        tx.commit()?;

        tracing::debug!(count = contacts.len(), "Saved contact snapshot");
        Ok(())
    }

    fn replace_all(
        &mut self,
        contacts: &[Contact],
        relationships: &[Relationship],
    ) -> Result<(), Self::Error> {
        check_unique_ids(contacts, relationships)?;

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM contacts", [])?;
        tx.execute("DELETE FROM relationships", [])?;
        for (position, contact) in contacts.iter().enumerate() {
            Self::write_contact(&tx, position as i64, contact)?;
        }
        for relationship in relationships {
            Self::write_relationship(&tx, relationship)?;
        }
        tx.commit()?;

        tracing::debug!(
            contacts = contacts.len(),
            relationships = relationships.len(),
            "Replaced store contents"
        );
        Ok(())
    }

    fn merge_all(
        &mut self,
        contacts: &[Contact],
        relationships: &[Relationship],
    ) -> Result<usize, Self::Error> {
        let tx = self.conn.transaction()?;
        for contact in contacts {
            Self::upsert_contact(&tx, contact)?;
        }

        let mut added = 0;
        for relationship in relationships {
            if !Self::relationship_exists(&tx, &relationship.id)? {
                Self::write_relationship(&tx, relationship)?;
                added += 1;
            }
        }
        tx.commit()?;

        tracing::debug!(contacts = contacts.len(), relationships = added, "Merged into store");
        Ok(added)
    }

    fn get(&self, id: &ContactId) -> Result<Option<Contact>, Self::Error> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM contacts WHERE id = ?1",
                params![id.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        payload
            .map(|p| serde_json::from_str(&p).map_err(StoreError::from))
            .transpose()
    }

    fn upsert(&mut self, contact: Contact) -> Result<(), Self::Error> {
        Self::upsert_contact(&self.conn, &contact)
    }

    fn delete(&mut self, id: &ContactId) -> Result<bool, Self::Error> {
        let tx = self.conn.transaction()?;

        let removed = tx.execute("DELETE FROM contacts WHERE id = ?1", params![id.as_str()])?;
        if removed == 0 {
            return Ok(false);
        }

        let relationships = tx.execute(
            "DELETE FROM relationships WHERE contact_id_1 = ?1 OR contact_id_2 = ?1",
            params![id.as_str()],
        )?;

        let mut contacts = Self::load_contacts(&tx)?;
        let changed = strip_parent_links(&mut contacts, id);
        for contact in contacts.iter().filter(|c| changed.contains(&c.id)) {
            Self::update_payload(&tx, contact)?;
        }

        tx.commit()?;

        tracing::debug!(
            contact = %id,
            relationships,
            unlinked_children = changed.len(),
            "Deleted contact"
        );
        Ok(true)
    }

    fn list_relationships(&self) -> Result<Vec<Relationship>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, contact_id_1, contact_id_2, type_1_to_2, type_2_to_1, created_at, updated_at
             FROM relationships ORDER BY rowid",
        )?;

        let relationships = stmt
            .query_map([], |row| {
                Ok(Relationship {
                    id: RelationshipId::from(row.get::<_, String>(0)?.as_str()),
                    contact_id1: ContactId::from(row.get::<_, String>(1)?),
                    contact_id2: ContactId::from(row.get::<_, String>(2)?),
                    type_1_to_2: row.get(3)?,
                    type_2_to_1: row.get(4)?,
                    created_at: row.get(5)?,
                    updated_at: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(relationships)
    }

    fn save_relationships(&mut self, relationships: &[Relationship]) -> Result<(), Self::Error> {
        check_unique_ids(&[], relationships)?;

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM relationships", [])?;
        for relationship in relationships {
            Self::write_relationship(&tx, relationship)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn add_relationship(&mut self, relationship: Relationship) -> Result<(), Self::Error> {
        if Self::relationship_exists(&self.conn, &relationship.id)? {
            return Err(StoreError::InvalidData(format!(
                "Relationship {} already exists",
                relationship.id
            )));
        }

        Self::write_relationship(&self.conn, &relationship)
    }

    fn remove_relationship(&mut self, id: &RelationshipId) -> Result<bool, Self::Error> {
        let removed = self
            .conn
            .execute("DELETE FROM relationships WHERE id = ?1", params![id.as_str()])?;
        Ok(removed > 0)
    }
}
