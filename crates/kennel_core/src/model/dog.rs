//! Dog domain model.
//!
//! # Responsibility
//! - Define the canonical in-memory record for one `dogs` row.
//! - Expose lifecycle state (transient vs. persisted).
//!
//! # Invariants
//! - `id` is `None` until the record is inserted.
//! - Only the repository assigns an id to a transient record, exactly once;
//!   a persisted record's id has no setter. `with_id`, `from_columns` and
//!   deserialization build records that are persisted from the start.
//! - `name` and `breed` mirror nullable `TEXT` columns and may be `None`.

use serde::{Deserialize, Serialize};

/// SQLite rowid of a persisted dog.
pub type DogId = i64;

/// Lifecycle state of a [`Dog`], keyed on whether it has an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Exists only in memory.
    Transient,
    /// Backed by a row in `dogs`.
    Persisted,
}

/// In-memory representation of one `dogs` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    id: Option<DogId>,
    pub name: Option<String>,
    pub breed: Option<String>,
}

impl Dog {
    /// Creates a transient dog that has not been written to storage.
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            breed: Some(breed.into()),
        }
    }

    /// Creates a persisted dog with both columns set.
    pub fn with_id(id: DogId, name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self::from_columns(id, Some(name.into()), Some(breed.into()))
    }

    /// Creates a persisted dog from raw column values, NULLs included.
    pub fn from_columns(id: DogId, name: Option<String>, breed: Option<String>) -> Self {
        Self {
            id: Some(id),
            name,
            breed,
        }
    }

    pub fn id(&self) -> Option<DogId> {
        self.id
    }

    pub fn state(&self) -> RecordState {
        match self.id {
            Some(_) => RecordState::Persisted,
            None => RecordState::Transient,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Records the id generated by the database for a fresh insert.
    ///
    /// Callers must have checked that the record was transient.
    pub(crate) fn assign_id(&mut self, id: DogId) {
        debug_assert!(self.id.is_none(), "dog id is assigned exactly once");
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::{Dog, RecordState};

    #[test]
    fn assign_id_moves_record_to_persisted() {
        let mut dog = Dog::new("Fido", "Poodle");
        assert_eq!(dog.state(), RecordState::Transient);

        dog.assign_id(7);
        assert_eq!(dog.id(), Some(7));
        assert_eq!(dog.state(), RecordState::Persisted);
    }
}
