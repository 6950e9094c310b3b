//! Domain types for the todo store.
//!
//! # Design
//! `Todo` / `NewTodo` / `TodoPatch` mirror the three payload shapes the
//! resource endpoint exchanges with callers. JSON field names (`id`,
//! `description`, `isDone`) are the rendering contract; renderers reconcile
//! items by `id`, never by list position, so the identifier type is kept
//! opaque and store-assigned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Store-assigned identifier naming exactly one todo record.
///
/// Serializes transparently as a JSON number. Callers never mint ids for new
/// records; the store's allocator does. External text representations go
/// through [`TodoId::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Parse an externally supplied identifier representation.
    ///
    /// A value that does not parse becomes `InvalidIdentifier` — never a
    /// sentinel that could spuriously match a record or reach a lookup
    /// unchecked.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        raw.parse::<u64>()
            .map(TodoId)
            .map_err(|_| StoreError::InvalidIdentifier(raw.to_string()))
    }
}

impl From<u64> for TodoId {
    fn from(raw: u64) -> Self {
        TodoId(raw)
    }
}

impl From<TodoId> for u64 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TodoId::parse(s)
    }
}

/// A single todo record as consumed by the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    #[serde(rename = "isDone")]
    pub done: bool,
}

/// Payload for creating a new record.
///
/// Carries only the description: every record starts with `done = false`,
/// and completion is only reachable through an explicit update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub description: String,
}

/// Partial-update payload. Only the fields present in the JSON are applied;
/// an omitted field means "no change", never "reset to a default."
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isDone", skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}
