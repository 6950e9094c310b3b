//! In-memory todo resource manager.
//!
//! # Overview
//! Owns the canonical todo collection: assigns identifiers, resolves
//! lookups, and enforces create/update/delete semantics. No I/O and no
//! async runtime — transport lives in the server crate, which translates
//! HTTP requests into these operations and store errors into status codes.
//!
//! # Design
//! - `TodoStore` is the single owner of collection-plus-allocator state.
//!   Construct an instance and pass it to consumers; there is no ambient
//!   module-level state.
//! - Identifiers are store-assigned and only move forward; external text
//!   becomes a `TodoId` through an explicit parse step, never an implicit
//!   coercion.
//! - Every failure is a distinct `StoreError`, never a success-shaped empty
//!   result, and leaves the store unchanged.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{NewTodo, Todo, TodoId, TodoPatch};
