//! Contact records and handles.

use std::fmt;

/// One directory entry.
///
/// Phone fields are free-form text and are never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Lookup key. Not unique; duplicates resolve to the earliest insertion.
    pub name: String,
    /// First phone number.
    pub phone1: String,
    /// Second phone number.
    pub phone2: String,
}

impl Contact {
    /// Create a contact from its three fields.
    pub fn new(
        name: impl Into<String>,
        phone1: impl Into<String>,
        phone2: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), phone1: phone1.into(), phone2: phone2.into() }
    }
}

/// Handle to a stored contact.
///
/// Doubles as the directory's ordering key: contacts sort by name, then by
/// insertion sequence. A contact's name never changes after insertion, so a
/// handle stays valid until that contact is deleted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId {
    name: String,
    seq: u64,
}

impl ContactId {
    pub(crate) fn new(name: String, seq: u64) -> Self {
        Self { name, seq }
    }

    /// Smallest key for `name`; every contact with that name sorts at or after
    /// it.
    pub(crate) fn first_for(name: &str) -> Self {
        Self { name: name.to_owned(), seq: 0 }
    }

    /// Name of the contact this handle refers to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insertion sequence number (0 for the first contact ever added).
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.name, self.seq)
    }
}
