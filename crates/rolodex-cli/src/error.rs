//! CLI error types.

use thiserror::Error;

/// Errors from parsing a menu selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Input is not one of the listed option numbers.
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),
}

/// Errors from the line driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
