//! Model directory: insertion-ordered records plus a bubble-sorted name list.

use std::collections::HashMap;

use super::operation::{Operation, OperationError, OperationResult, phone};

/// Letters tallied by the model.
const ALPHABET_SIZE: usize = 26;

/// Contact record in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelContact {
    /// Contact name.
    pub name: String,
    /// First phone number.
    pub phone1: String,
    /// Second phone number.
    pub phone2: String,
}

/// Observable state for oracle comparison.
///
/// This is the subset of directory state that can be compared against the
/// real implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Contacts in listing order.
    pub listing: Vec<ModelContact>,
    /// `(letter, count)` for `A` to `Z`.
    pub tally: Vec<(char, usize)>,
}

/// Model directory - the reference implementation.
#[derive(Debug, Clone, Default)]
pub struct ModelDirectory {
    /// Records in insertion order.
    contacts: Vec<ModelContact>,
    /// Every stored name, kept in ascending order.
    ordering_index: Vec<String>,
}

impl ModelDirectory {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order.
    pub fn contacts(&self) -> &[ModelContact] {
        &self.contacts
    }

    /// The sorted name list.
    pub fn ordering_index(&self) -> &[String] {
        &self.ordering_index
    }

    /// Apply an operation and return the result.
    ///
    /// This is the main entry point for model-based testing. The result should
    /// match the real implementation's result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Add { name, phone1, phone2 } => {
                self.add(name.to_name(), phone(*phone1), phone(*phone2));
                OperationResult::Ok
            },
            Operation::Edit { name, phone1, phone2 } => {
                if self.edit(&name.to_name(), phone(*phone1), phone(*phone2)) {
                    OperationResult::Ok
                } else {
                    OperationResult::Error(OperationError::NotFound)
                }
            },
            Operation::Delete { name } => match self.delete(&name.to_name()) {
                Some(contact) => OperationResult::Found(contact),
                None => OperationResult::Error(OperationError::NotFound),
            },
            Operation::Search { name } => match self.search(&name.to_name()) {
                Some(contact) => OperationResult::Found(contact.clone()),
                None => OperationResult::Error(OperationError::NotFound),
            },
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState { listing: self.listing(), tally: self.tally() }
    }

    fn add(&mut self, name: String, phone1: String, phone2: String) {
        self.ordering_index.push(name.clone());
        self.contacts.push(ModelContact { name, phone1, phone2 });
        self.bubble_sort();
    }

    fn bubble_sort(&mut self) {
        let len = self.ordering_index.len();
        for _ in 0..len {
            for j in 0..len.saturating_sub(1) {
                if self.ordering_index[j] > self.ordering_index[j + 1] {
                    self.ordering_index.swap(j, j + 1);
                }
            }
        }
    }

    fn edit(&mut self, name: &str, phone1: String, phone2: String) -> bool {
        match self.contacts.iter_mut().find(|c| c.name == name) {
            Some(contact) => {
                contact.phone1 = phone1;
                contact.phone2 = phone2;
                true
            },
            None => false,
        }
    }

    /// Removes one record and exactly one occurrence of its name.
    fn delete(&mut self, name: &str) -> Option<ModelContact> {
        let position = self.contacts.iter().position(|c| c.name == name)?;
        let contact = self.contacts.remove(position);

        if let Some(index) = self.ordering_index.iter().position(|n| n == name) {
            self.ordering_index.remove(index);
        }
        Some(contact)
    }

    fn search(&self, name: &str) -> Option<&ModelContact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    /// Walk the sorted names; the k-th occurrence of a name maps to the k-th
    /// record with that name in insertion order.
    fn listing(&self) -> Vec<ModelContact> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut listing = Vec::with_capacity(self.ordering_index.len());

        for name in &self.ordering_index {
            let occurrence = seen.entry(name.as_str()).or_insert(0);
            if let Some(contact) = self.contacts.iter().filter(|c| &c.name == name).nth(*occurrence)
            {
                listing.push(contact.clone());
            }
            *occurrence += 1;
        }

        listing
    }

    fn tally(&self) -> Vec<(char, usize)> {
        let mut counts = [0usize; ALPHABET_SIZE];
        for contact in &self.contacts {
            let Some(first) = contact.name.bytes().next() else {
                continue;
            };
            let index = usize::from(first.to_ascii_lowercase()).wrapping_sub(usize::from(b'a'));
            if index < ALPHABET_SIZE {
                counts[index] += 1;
            }
        }

        ('A'..='Z').zip(counts).collect()
    }
}
