//! Model-based testing harness for the Rolodex directory.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation of the directory.
//! Operations are applied to both the model and [`rolodex_core::ContactDirectory`],
//! and their results and observable states are compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;

pub use model::{
    ModelContact, ModelDirectory, ObservableState, Operation, OperationError, OperationResult,
    SmallName, phone,
};
