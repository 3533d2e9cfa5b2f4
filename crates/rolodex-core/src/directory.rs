//! Contact Directory
//!
//! Owns every contact and answers lookups, ordered listings and tallies.
//!
//! ## Design
//!
//! - Single ordered map: contacts are keyed by `(name, insertion sequence)`,
//!   so key order is the alphabetical listing order with ties in insertion
//!   order. There is no separate name index to keep in sync.
//! - First match wins: with duplicate names, lookups resolve to the earliest
//!   inserted contact, which is the first key in that name's range.
//! - Handles: [`ContactId`] addresses one record; mutation goes through
//!   explicit methods rather than references into storage.

use std::collections::BTreeMap;

use crate::{
    contact::{Contact, ContactId},
    error::DirectoryError,
    tally::LetterTally,
};

/// In-memory contact directory.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    /// Contacts in listing order.
    entries: BTreeMap<ContactId, Contact>,
    /// Sequence number for the next insertion. Never reused.
    next_seq: u64,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a contact. Duplicate names and empty fields are accepted.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        phone1: impl Into<String>,
        phone2: impl Into<String>,
    ) -> ContactId {
        let contact = Contact::new(name, phone1, phone2);
        let id = ContactId::new(contact.name.clone(), self.next_seq);
        self.next_seq += 1;

        tracing::debug!(name = %contact.name, seq = id.seq(), "contact added");
        self.entries.insert(id.clone(), contact);
        id
    }

    /// Handle of the earliest-inserted contact named `name`.
    pub fn find(&self, name: &str) -> Option<ContactId> {
        self.entries
            .range(ContactId::first_for(name)..)
            .next()
            .filter(|(id, _)| id.name() == name)
            .map(|(id, _)| id.clone())
    }

    /// Earliest-inserted contact named `name`.
    pub fn search(&self, name: &str) -> Option<&Contact> {
        self.find(name).and_then(|id| self.entries.get(&id))
    }

    /// Contact addressed by `id`, if it still exists.
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.entries.get(id)
    }

    /// Overwrite both phone numbers of the earliest contact named `name`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no contact has that name. The
    /// directory is unchanged in that case.
    pub fn edit(
        &mut self,
        name: &str,
        phone1: impl Into<String>,
        phone2: impl Into<String>,
    ) -> Result<ContactId, DirectoryError> {
        let id = self.find(name).ok_or_else(|| DirectoryError::NotFound { name: name.to_owned() })?;
        self.edit_at(&id, phone1, phone2)?;
        Ok(id)
    }

    /// Overwrite both phone numbers of the contact addressed by `id`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::UnknownContact` if the contact was deleted.
    pub fn edit_at(
        &mut self,
        id: &ContactId,
        phone1: impl Into<String>,
        phone2: impl Into<String>,
    ) -> Result<(), DirectoryError> {
        let contact = self
            .entries
            .get_mut(id)
            .ok_or_else(|| DirectoryError::UnknownContact { id: id.clone() })?;
        contact.phone1 = phone1.into();
        contact.phone2 = phone2.into();

        tracing::debug!(name = %id.name(), seq = id.seq(), "contact edited");
        Ok(())
    }

    /// Remove the earliest contact named `name` and return it.
    ///
    /// Exactly one record is removed; later contacts sharing the name stay
    /// stored and listed.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no contact has that name.
    pub fn delete(&mut self, name: &str) -> Result<Contact, DirectoryError> {
        let id = self.find(name).ok_or_else(|| DirectoryError::NotFound { name: name.to_owned() })?;
        self.delete_at(&id)
    }

    /// Remove the contact addressed by `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::UnknownContact` if the contact was already
    /// deleted.
    pub fn delete_at(&mut self, id: &ContactId) -> Result<Contact, DirectoryError> {
        let contact =
            self.entries.remove(id).ok_or_else(|| DirectoryError::UnknownContact { id: id.clone() })?;

        tracing::debug!(name = %id.name(), seq = id.seq(), "contact deleted");
        Ok(contact)
    }

    /// Contacts in ascending name order, equal names in insertion order.
    pub fn list_ordered(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.entries.values()
    }

    /// Handles and contacts in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContactId, &Contact)> + '_ {
        self.entries.iter()
    }

    /// Contacts in the order they were added.
    pub fn iter_insertion_order(&self) -> Vec<&Contact> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_key(|(id, _)| id.seq());
        entries.into_iter().map(|(_, contact)| contact).collect()
    }

    /// Tally contacts by the first letter of their name.
    pub fn count_per_initial_letter(&self) -> LetterTally {
        let mut tally = LetterTally::new();
        for contact in self.entries.values() {
            if !tally.record(&contact.name) {
                tracing::trace!(name = %contact.name, "name has no initial letter, not tallied");
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(directory: &ContactDirectory) -> Vec<&str> {
        directory.list_ordered().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn new_directory_is_empty() {
        let directory = ContactDirectory::new();
        assert!(directory.is_empty());
        assert_eq!(directory.len(), 0);
        assert_eq!(directory.list_ordered().count(), 0);
    }

    #[test]
    fn find_ignores_name_prefixes() {
        let mut directory = ContactDirectory::new();
        directory.add("Bobby", "1", "2");

        assert!(directory.find("Bob").is_none());
        assert!(directory.find("Bobby").is_some());
    }

    #[test]
    fn find_returns_earliest_duplicate() {
        let mut directory = ContactDirectory::new();
        let first = directory.add("Bob", "1", "1");
        let _second = directory.add("Bob", "2", "2");

        assert_eq!(directory.find("Bob"), Some(first));
        assert_eq!(directory.search("Bob").map(|c| c.phone1.as_str()), Some("1"));
    }

    #[test]
    fn edit_updates_only_first_duplicate() {
        let mut directory = ContactDirectory::new();
        directory.add("Bob", "1", "1");
        let second = directory.add("Bob", "2", "2");

        directory.edit("Bob", "9", "9").unwrap();

        assert_eq!(directory.search("Bob").map(|c| c.phone1.as_str()), Some("9"));
        assert_eq!(directory.get(&second).map(|c| c.phone1.as_str()), Some("2"));
    }

    #[test]
    fn delete_removes_exactly_one_duplicate() {
        let mut directory = ContactDirectory::new();
        directory.add("Bob", "1", "1");
        directory.add("Amy", "3", "3");
        directory.add("Bob", "2", "2");

        let removed = directory.delete("Bob").unwrap();
        assert_eq!(removed.phone1, "1");

        assert_eq!(names(&directory), vec!["Amy", "Bob"]);
        assert_eq!(directory.search("Bob").map(|c| c.phone1.as_str()), Some("2"));
    }

    #[test]
    fn stale_handle_is_rejected() {
        let mut directory = ContactDirectory::new();
        let id = directory.add("Mia", "1", "2");
        directory.delete_at(&id).unwrap();

        assert_eq!(
            directory.edit_at(&id, "3", "4"),
            Err(DirectoryError::UnknownContact { id: id.clone() })
        );
        assert_eq!(directory.delete_at(&id), Err(DirectoryError::UnknownContact { id }));
    }

    #[test]
    fn sequence_numbers_are_not_reused() {
        let mut directory = ContactDirectory::new();
        let first = directory.add("Amy", "", "");
        directory.delete_at(&first).unwrap();
        let second = directory.add("Amy", "", "");

        assert_ne!(first, second);
        assert!(second.seq() > first.seq());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut directory = ContactDirectory::new();
        directory.add("Zed", "", "");
        directory.add("Amy", "", "");
        directory.add("Mia", "", "");

        let order: Vec<_> =
            directory.iter_insertion_order().into_iter().map(|c| c.name.as_str()).collect();
        assert_eq!(order, vec!["Zed", "Amy", "Mia"]);
        assert_eq!(names(&directory), vec!["Amy", "Mia", "Zed"]);
    }

    #[test]
    fn empty_name_is_stored_and_listed_first() {
        let mut directory = ContactDirectory::new();
        directory.add("Amy", "1", "2");
        directory.add("", "3", "4");

        assert_eq!(names(&directory), vec!["", "Amy"]);
        assert_eq!(directory.search("").map(|c| c.phone1.as_str()), Some("3"));
        assert_eq!(directory.count_per_initial_letter().total(), 1);
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let mut directory = ContactDirectory::new();
        directory.add("bob", "", "");
        directory.add("Bob", "", "");
        directory.add("alice", "", "");

        assert_eq!(names(&directory), vec!["Bob", "alice", "bob"]);
    }
}
