use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::Animal;

/// Errors surfaced by store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no animals found")]
    Empty,
    #[error("animal with id {0} not found")]
    NotFound(i64),
    #[error("animal with id {0} already exists")]
    AlreadyExists(i64),
}

struct StoreInner {
    animals: HashMap<i64, Animal>,
    next_id: i64,
}

/// Shareable in-memory animal store for use across async handlers
///
/// Every operation acquires the single exclusive lock for its full duration,
/// so concurrent callers always observe a consistent map. No operation awaits
/// or performs I/O while holding the lock.
#[derive(Clone)]
pub struct AnimalStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl AnimalStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                animals: HashMap::new(),
                next_id: 1,
            })),
        }
    }

    // No operation leaves the map mid-mutation, so a guard recovered from a
    // poisoned lock still sees consistent state.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Retrieve all animals, ordered by id.
    ///
    /// An empty store is an error condition: callers distinguish "store
    /// empty" from "store has one record".
    pub fn list(&self) -> Result<Vec<Animal>, StoreError> {
        let inner = self.lock();

        if inner.animals.is_empty() {
            return Err(StoreError::Empty);
        }

        let mut all: Vec<Animal> = inner.animals.values().cloned().collect();
        all.sort_by_key(|animal| animal.id);
        Ok(all)
    }

    /// Retrieve a single animal by its id.
    pub fn get(&self, id: i64) -> Result<Animal, StoreError> {
        let inner = self.lock();

        inner
            .animals
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Add a new animal to the store.
    ///
    /// Rejects an id that is already present. An id of 0 means "unset": the
    /// store assigns the next free auto-incrementing id instead. Returns the
    /// stored record, id as assigned/provided.
    pub fn create(&self, mut animal: Animal) -> Result<Animal, StoreError> {
        let mut inner = self.lock();

        if animal.id == 0 {
            // Skip ids already taken by explicit creates.
            while inner.animals.contains_key(&inner.next_id) {
                inner.next_id += 1;
            }
            animal.id = inner.next_id;
            inner.next_id += 1;
        } else if inner.animals.contains_key(&animal.id) {
            return Err(StoreError::AlreadyExists(animal.id));
        }

        inner.animals.insert(animal.id, animal.clone());
        Ok(animal)
    }

    /// Replace an existing animal. Pure update, never creates.
    ///
    /// The stored record's id is forced to `id` regardless of the id carried
    /// by `animal`.
    pub fn update(&self, id: i64, mut animal: Animal) -> Result<Animal, StoreError> {
        let mut inner = self.lock();

        if !inner.animals.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }

        animal.id = id;
        inner.animals.insert(id, animal.clone());
        Ok(animal)
    }

    /// Insert or overwrite unconditionally, id forced to `id`. Never fails;
    /// the `Result` keeps the interface shape of the other mutations.
    pub fn upsert(&self, id: i64, mut animal: Animal) -> Result<Animal, StoreError> {
        let mut inner = self.lock();

        animal.id = id;
        inner.animals.insert(id, animal.clone());
        Ok(animal)
    }

    /// Remove an animal by id.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.lock();

        match inner.animals.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Number of records currently held.
    pub fn count(&self) -> usize {
        self.lock().animals.len()
    }
}

impl Default for AnimalStore {
    fn default() -> Self {
        Self::new()
    }
}
