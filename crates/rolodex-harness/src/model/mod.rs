//! Reference model for model-based testing.
//!
//! The model keeps contacts the naive way: an insertion-ordered list of
//! records plus a separately maintained list of names, bubble-sorted after
//! every insertion. It is slow and obviously correct, which makes it the
//! oracle for the single ordered map in `rolodex-core`.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Behaviour not structure: Only results and observable state are compared
//! - Deterministic: Same inputs produce same outputs

mod directory;
pub mod operation;

pub use directory::{ModelContact, ModelDirectory, ObservableState};
pub use operation::{Operation, OperationError, OperationResult, SmallName, phone};
