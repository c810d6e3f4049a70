//! In-memory user store
//!
//! A single coarse-grained mutex guards both the record map and the id
//! counter. Every operation holds the lock only for its map access and hands
//! back owned copies, so callers serialize responses after the lock is gone.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::models::{NewUser, User};

/// Errors returned by store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists under the given id
    #[error("user {0} not found")]
    NotFound(i64),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug)]
struct Inner {
    users: HashMap<i64, User>,
    next_id: i64,
}

/// Thread-safe in-memory table of users keyed by id
///
/// Ids start at 1 and are never reused, even after the record is deleted.
#[derive(Debug)]
pub struct UserStore {
    inner: Mutex<Inner>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    // Each mutation is a single map operation, so a panic elsewhere can never
    // leave the data half-written and a poisoned guard is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all records, ordered by id
    pub fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.lock().users.values().cloned().collect();
        users.sort_unstable_by_key(|user| user.id);
        users
    }

    /// Store a new record under the next free id
    pub fn create(&self, candidate: NewUser) -> User {
        let user = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            let user = candidate.with_id(id);
            inner.users.insert(id, user.clone());
            user
        };

        tracing::debug!(user_id = user.id, "user created");
        user
    }

    /// Fetch a copy of the record stored under `id`
    pub fn get(&self, id: i64) -> StoreResult<User> {
        self.lock()
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replace the name and email of an existing record
    ///
    /// The stored id is kept. Missing ids are an error; nothing is inserted.
    pub fn update(&self, id: i64, replacement: NewUser) -> StoreResult<User> {
        let updated = {
            let mut inner = self.lock();
            let user = inner.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
            *user = replacement.with_id(id);
            user.clone()
        };

        tracing::debug!(user_id = id, "user updated");
        Ok(updated)
    }

    /// Remove the record stored under `id`
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        self.lock()
            .users
            .remove(&id)
            .ok_or(StoreError::NotFound(id))?;

        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn alice() -> NewUser {
        NewUser::new("Alice", "a@x.com")
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = UserStore::new();
        assert_eq!(store.create(alice()).id, 1);
        assert_eq!(store.create(alice()).id, 2);
        assert_eq!(store.create(alice()).id, 3);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = UserStore::new();
        let first = store.create(alice());
        store.delete(first.id).unwrap();

        let second = store.create(alice());
        assert_eq!(second.id, 2);
        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_returns_created_record() {
        let store = UserStore::new();
        let created = store.create(alice());
        assert_eq!(store.get(created.id).unwrap(), created);
    }

    #[test]
    fn test_get_missing() {
        let store = UserStore::new();
        assert_eq!(store.get(7), Err(StoreError::NotFound(7)));
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let store = UserStore::new();
        let created = store.create(alice());
        store.delete(created.id).unwrap();

        assert_eq!(store.get(created.id), Err(StoreError::NotFound(created.id)));
        assert_eq!(store.delete(created.id), Err(StoreError::NotFound(created.id)));
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let store = UserStore::new();
        let created = store.create(alice());

        let updated = store
            .update(created.id, NewUser::new("Alicia", "alicia@x.com"))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.email, "alicia@x.com");
        assert_eq!(store.get(created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_missing_does_not_insert() {
        let store = UserStore::new();
        assert_eq!(store.update(5, alice()), Err(StoreError::NotFound(5)));
        assert!(store.is_empty());

        // The counter is untouched by the failed update
        assert_eq!(store.create(alice()).id, 1);
    }

    #[test]
    fn test_empty_fields_accepted() {
        let store = UserStore::new();
        let created = store.create(NewUser::default());
        assert_eq!(created.name, "");
        assert_eq!(created.email, "");
    }

    #[test]
    fn test_list_is_ordered_snapshot() {
        let store = UserStore::new();
        for name in ["a", "b", "c", "d"] {
            store.create(NewUser::new(name, format!("{name}@x.com")));
        }
        store.delete(2).unwrap();

        let ids: Vec<i64> = store.list().iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_concurrent_creates_yield_distinct_ids() {
        const WORKERS: usize = 32;
        let store = Arc::new(UserStore::new());

        let mut ids: Vec<i64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..WORKERS)
                .map(|i| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || store.create(NewUser::new(format!("user{i}"), "")).id)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        ids.sort_unstable();
        let expected: Vec<i64> = (1..=WORKERS as i64).collect();
        assert_eq!(ids, expected);
        assert_eq!(store.len(), WORKERS);
    }
}
