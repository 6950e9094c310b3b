//! Error types for store operations.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the input was malformed." All three
//! variants are recoverable at the boundary, and every one is signaled
//! distinctly from a successful-but-empty outcome: an empty list is success,
//! a missing record is `NotFound`.

use std::fmt;

use crate::types::TodoId;

/// Errors returned by `TodoStore` operations and identifier parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required text field was empty or missing.
    InvalidInput(String),

    /// An externally supplied identifier did not parse to a `TodoId`.
    InvalidIdentifier(String),

    /// No record matches a syntactically valid identifier.
    NotFound(TodoId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            StoreError::InvalidIdentifier(raw) => {
                write!(f, "invalid identifier: {raw:?}")
            }
            StoreError::NotFound(id) => write!(f, "todo {id} not found"),
        }
    }
}

impl std::error::Error for StoreError {}
