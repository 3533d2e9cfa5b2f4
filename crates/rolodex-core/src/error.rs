//! Directory error types.

use thiserror::Error;

use crate::ContactId;

/// Errors from directory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// No contact with this name exists.
    #[error("contact not found: {name:?}")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The handle refers to a contact that has since been deleted.
    #[error("unknown contact: {id}")]
    UnknownContact {
        /// The stale handle.
        id: ContactId,
    },
}
