//! Rolodex core.
//!
//! In-memory contact directory with alphabetical listing and per-letter
//! tallies. No I/O happens here; the menu session in `rolodex-cli` drives
//! these operations and renders their results.
//!
//! # Components
//!
//! - [`ContactDirectory`]: owns every [`Contact`] in a single ordered map
//! - [`ContactId`]: stable handle to one stored contact
//! - [`LetterTally`]: per-initial-letter counts across the alphabet
//! - [`DirectoryError`]: lookup failures

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod contact;
mod directory;
mod error;
mod tally;

pub use contact::{Contact, ContactId};
pub use directory::ContactDirectory;
pub use error::DirectoryError;
pub use tally::{ALPHABET_SIZE, LetterTally};
