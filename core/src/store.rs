//! In-memory todo collection with store-assigned identifiers.
//!
//! # Design
//! - `records` is the id index: repeated by-id lookups dominate the access
//!   pattern, so resolution is O(1) average rather than a scan.
//! - `order` holds insertion order, the list order renderers observe. Both
//!   structures are kept consistent by every mutation.
//! - `next_id` only moves forward. A deletion never returns an id to the
//!   pool, and the counter is never derived from the collection size.
//! - Operations validate before they mutate, so a failed call leaves the
//!   store exactly as it was.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::types::{NewTodo, Todo, TodoId, TodoPatch};

const EMPTY_DESCRIPTION: &str = "description must not be empty";

/// Owner of the canonical todo collection and its identifier allocator.
///
/// Construct one instance and hand it to consumers; the store is plain
/// synchronous state with no interior locking, so a transport serving
/// concurrent requests wraps it in its own mutual exclusion (the server
/// crate uses one `RwLock` around the whole store).
#[derive(Debug, Clone)]
pub struct TodoStore {
    records: HashMap<TodoId, Todo>,
    order: Vec<TodoId>,
    next_id: u64,
}

impl TodoStore {
    /// Empty store; the first created record gets id 1.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from pre-existing records, preserving their order.
    ///
    /// The allocator is seeded strictly above the highest id present, so a
    /// later create can never collide with an initial record. Duplicate ids
    /// and empty descriptions are rejected.
    pub fn from_records(records: Vec<Todo>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for todo in records {
            if todo.description.is_empty() {
                return Err(StoreError::InvalidInput(EMPTY_DESCRIPTION.to_string()));
            }
            if store.records.contains_key(&todo.id) {
                return Err(StoreError::InvalidInput(format!("duplicate id {}", todo.id)));
            }
            store.next_id = store.next_id.max(u64::from(todo.id) + 1);
            store.order.push(todo.id);
            store.records.insert(todo.id, todo);
        }
        Ok(store)
    }

    /// The fixed record set the server process boots with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for description in ["Buy groceries", "Water the plants", "File expense report"] {
            store.append(description.to_string());
        }
        store
    }

    /// All records in insertion order, as an owned snapshot.
    pub fn list(&self) -> Vec<Todo> {
        // `order` and `records` always hold the same set of ids.
        self.order.iter().map(|id| self.records[id].clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up one record by id.
    pub fn get(&self, id: TodoId) -> Result<&Todo, StoreError> {
        self.records.get(&id).ok_or(StoreError::NotFound(id))
    }

    /// Append a new record with the next identifier and `done = false`.
    pub fn create(&mut self, input: NewTodo) -> Result<Todo, StoreError> {
        if input.description.is_empty() {
            return Err(StoreError::InvalidInput(EMPTY_DESCRIPTION.to_string()));
        }
        let id = self.append(input.description);
        Ok(self.records[&id].clone())
    }

    /// Apply exactly the fields present in `patch` to the record named by
    /// `id`, returning the updated record.
    ///
    /// An empty patch is a no-op returning the record unchanged. A patch
    /// carrying an empty description is rejected before the record is
    /// touched. An absent `isDone` never flips the flag.
    pub fn update(&mut self, id: TodoId, patch: TodoPatch) -> Result<Todo, StoreError> {
        if matches!(patch.description.as_deref(), Some("")) {
            return Err(StoreError::InvalidInput(EMPTY_DESCRIPTION.to_string()));
        }
        let todo = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if let Some(description) = patch.description {
            todo.description = description;
        }
        if let Some(done) = patch.done {
            todo.done = done;
        }
        Ok(todo.clone())
    }

    /// Remove the record named by `id`.
    ///
    /// The id is resolved before anything is removed; a miss leaves both the
    /// index and the order untouched.
    pub fn delete(&mut self, id: TodoId) -> Result<(), StoreError> {
        if self.records.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        self.order.retain(|&kept| kept != id);
        Ok(())
    }

    fn append(&mut self, description: String) -> TodoId {
        let id = TodoId::from(self.next_id);
        self.next_id += 1;
        self.order.push(id);
        self.records.insert(
            id,
            Todo {
                id,
                description,
                done: false,
            },
        );
        id
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(description: &str) -> NewTodo {
        NewTodo {
            description: description.to_string(),
        }
    }

    #[test]
    fn create_assigns_distinct_increasing_ids() {
        let mut store = TodoStore::new();
        assert!(store.is_empty());
        let a = store.create(new_todo("a")).unwrap();
        let b = store.create(new_todo("b")).unwrap();
        let c = store.create(new_todo("c")).unwrap();
        assert!(a.id < b.id && b.id < c.id);
        assert_eq!(a.id, TodoId::from(1));
        assert_eq!(c.id, TodoId::from(3));
    }

    #[test]
    fn create_defaults_done_to_false() {
        let mut store = TodoStore::new();
        let todo = store.create(new_todo("Buy milk")).unwrap();
        assert!(!todo.done);
        assert_eq!(todo.description, "Buy milk");
    }

    #[test]
    fn create_rejects_empty_description_and_leaves_store_unchanged() {
        let mut store = TodoStore::new();
        store.create(new_todo("existing")).unwrap();
        let before = store.list();

        let err = store.create(new_todo("")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list(), before);

        // A rejected create must not burn an id either.
        let next = store.create(new_todo("next")).unwrap();
        assert_eq!(next.id, TodoId::from(2));
    }

    #[test]
    fn get_returns_created_record() {
        let mut store = TodoStore::new();
        let created = store.create(new_todo("find me")).unwrap();
        let fetched = store.get(created.id).unwrap();
        assert_eq!(*fetched, created);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = TodoStore::new();
        let err = store.get(TodoId::from(99)).unwrap_err();
        assert_eq!(err, StoreError::NotFound(TodoId::from(99)));
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut store = TodoStore::new();
        let id = store.create(new_todo("Walk dog")).unwrap().id;

        let updated = store
            .update(
                id,
                TodoPatch {
                    description: None,
                    done: Some(true),
                },
            )
            .unwrap();
        assert_eq!(updated.description, "Walk dog");
        assert!(updated.done);

        // Patching only the description must not touch the flag.
        let updated = store
            .update(
                id,
                TodoPatch {
                    description: Some("Walk cat".to_string()),
                    done: None,
                },
            )
            .unwrap();
        assert_eq!(updated.description, "Walk cat");
        assert!(updated.done);
    }

    #[test]
    fn update_empty_patch_is_a_noop() {
        let mut store = TodoStore::new();
        let id = store.create(new_todo("unchanged")).unwrap().id;
        let before = store.get(id).unwrap().clone();

        let after = store.update(id, TodoPatch::default()).unwrap();
        assert_eq!(after, before);
        assert_eq!(*store.get(id).unwrap(), before);
    }

    #[test]
    fn update_rejects_empty_description_and_leaves_record_unchanged() {
        let mut store = TodoStore::new();
        let id = store.create(new_todo("keep")).unwrap().id;
        let before = store.get(id).unwrap().clone();

        let err = store
            .update(
                id,
                TodoPatch {
                    description: Some(String::new()),
                    done: Some(true),
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(*store.get(id).unwrap(), before);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = TodoStore::new();
        let err = store.update(TodoId::from(5), TodoPatch::default()).unwrap_err();
        assert_eq!(err, StoreError::NotFound(TodoId::from(5)));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = TodoStore::new();
        let id = store.create(new_todo("doomed")).unwrap().id;
        store.delete(id).unwrap();
        assert_eq!(store.get(id).unwrap_err(), StoreError::NotFound(id));
    }

    #[test]
    fn delete_unknown_id_is_not_found_and_removes_nothing() {
        let mut store = TodoStore::new();
        store.create(new_todo("survivor")).unwrap();
        let before = store.list();

        let err = store.delete(TodoId::from(42)).unwrap_err();
        assert_eq!(err, StoreError::NotFound(TodoId::from(42)));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn deleted_id_is_never_reissued() {
        let mut store = TodoStore::new();
        store.create(new_todo("a")).unwrap();
        let b = store.create(new_todo("b")).unwrap();
        store.delete(b.id).unwrap();

        // The collection shrank to one record, but the counter must not be
        // derived from its size.
        let c = store.create(new_todo("c")).unwrap();
        assert_eq!(c.id, TodoId::from(3));
    }

    #[test]
    fn list_preserves_insertion_order_across_deletes() {
        let mut store = TodoStore::new();
        let a = store.create(new_todo("a")).unwrap().id;
        let b = store.create(new_todo("b")).unwrap().id;
        let c = store.create(new_todo("c")).unwrap().id;

        store.delete(b).unwrap();
        let ids: Vec<TodoId> = store.list().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn from_records_seeds_counter_above_highest_id() {
        let records = vec![
            Todo {
                id: TodoId::from(3),
                description: "three".to_string(),
                done: false,
            },
            Todo {
                id: TodoId::from(7),
                description: "seven".to_string(),
                done: true,
            },
        ];
        let mut store = TodoStore::from_records(records).unwrap();
        let next = store.create(new_todo("eight")).unwrap();
        assert_eq!(next.id, TodoId::from(8));
    }

    #[test]
    fn from_records_rejects_duplicate_ids() {
        let duplicate = Todo {
            id: TodoId::from(1),
            description: "dup".to_string(),
            done: false,
        };
        let err = TodoStore::from_records(vec![duplicate.clone(), duplicate]).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn from_records_rejects_empty_description() {
        let bad = Todo {
            id: TodoId::from(1),
            description: String::new(),
            done: false,
        };
        let err = TodoStore::from_records(vec![bad]).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn seeded_store_has_ids_one_through_three() {
        let store = TodoStore::seeded();
        let ids: Vec<u64> = store.list().into_iter().map(|t| u64::from(t.id)).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(store.list().iter().all(|t| !t.done));
    }
}
