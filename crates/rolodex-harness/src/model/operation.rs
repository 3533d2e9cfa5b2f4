//! Operations for model-based testing.
//!
//! Operations represent every directory call. They are generated randomly by
//! proptest or the fuzzer and applied to both the model and the real
//! directory.

use arbitrary::Arbitrary;

use super::directory::ModelContact;

/// Operations that can be applied to a directory.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Add a contact.
    Add {
        /// Contact name.
        name: SmallName,
        /// Seed for the first phone number.
        phone1: u8,
        /// Seed for the second phone number.
        phone2: u8,
    },

    /// Replace the phones of the first contact with this name.
    Edit {
        /// Name to look up.
        name: SmallName,
        /// Seed for the new first phone number.
        phone1: u8,
        /// Seed for the new second phone number.
        phone2: u8,
    },

    /// Delete the first contact with this name.
    Delete {
        /// Name to look up.
        name: SmallName,
    },

    /// Look up the first contact with this name.
    Search {
        /// Name to look up.
        name: SmallName,
    },
}

/// Compact name generator.
///
/// Draws from a deliberately tiny name space so random sequences hit
/// duplicates, case differences and names without an initial letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct SmallName {
    /// Picks the base letter (one of four).
    pub seed: u8,
    /// Picks the name's shape (0-5).
    pub shape: u8,
}

impl SmallName {
    /// Expand to the actual name.
    pub fn to_name(self) -> String {
        let letter = char::from(b'a' + self.seed % 4);
        match self.shape % 6 {
            0 => letter.to_string(),
            1 => letter.to_ascii_uppercase().to_string(),
            2 => format!("{letter}{}", self.seed % 3),
            3 => String::new(),
            4 => format!("{}{letter}", self.seed % 10),
            _ => format!("É{letter}"),
        }
    }
}

/// Expand a phone seed into a phone number string.
pub fn phone(seed: u8) -> String {
    if seed == 0 { String::new() } else { format!("555-{seed:04}") }
}

/// Result of applying an operation.
///
/// Used to compare model and real directory behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Operation succeeded with nothing to report.
    Ok,

    /// Lookup succeeded, or delete removed this contact.
    Found(ModelContact),

    /// Operation failed with expected error.
    Error(OperationError),
}

/// Expected errors that can occur during operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// No contact with the requested name.
    NotFound,
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        !self.is_err()
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        matches!(self, OperationResult::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_name_shapes() {
        assert_eq!(SmallName { seed: 1, shape: 0 }.to_name(), "b");
        assert_eq!(SmallName { seed: 1, shape: 1 }.to_name(), "B");
        assert_eq!(SmallName { seed: 5, shape: 2 }.to_name(), "b2");
        assert_eq!(SmallName { seed: 5, shape: 3 }.to_name(), "");
        assert_eq!(SmallName { seed: 7, shape: 4 }.to_name(), "7d");
        assert_eq!(SmallName { seed: 2, shape: 5 }.to_name(), "Éc");
    }

    #[test]
    fn phone_zero_is_empty() {
        assert_eq!(phone(0), "");
        assert_eq!(phone(42), "555-0042");
    }
}
