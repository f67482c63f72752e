//! Dog use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for callers that persist dogs.
//! - Delegate all persistence to a `DogRepository`.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Service layer remains storage-agnostic.

use crate::model::dog::{Dog, DogId};
use crate::repo::dog_repo::{DogRepository, RepoResult};
use log::info;

/// Use-case service wrapper for dog persistence.
pub struct DogService<R: DogRepository> {
    repo: R,
}

impl<R: DogRepository> DogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Ensures the backing table exists.
    pub fn prepare_storage(&self) -> RepoResult<()> {
        self.repo.create_table()
    }

    /// Drops the backing table and all rows in it.
    pub fn reset_storage(&self) -> RepoResult<()> {
        self.repo.drop_table()
    }

    /// Creates and persists a new dog.
    pub fn register(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        let dog = self.repo.create(name, breed)?;
        info!(
            "event=dog_register module=service status=ok id={}",
            dog.id().unwrap_or_default()
        );
        Ok(dog)
    }

    /// Persists `dog` whatever its current state.
    ///
    /// Transient dogs are inserted and receive an id; persisted dogs are
    /// updated in place.
    pub fn save(&self, dog: &mut Dog) -> RepoResult<()> {
        let was_persisted = dog.is_persisted();
        self.repo.save_or_update(dog)?;
        info!(
            "event=dog_save module=service status=ok mode={} id={}",
            if was_persisted { "update" } else { "insert" },
            dog.id().unwrap_or_default()
        );
        Ok(())
    }

    /// Returns an existing dog with this exact name and breed, or registers one.
    pub fn adopt(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        self.repo.find_or_create(name, breed)
    }

    pub fn get(&self, id: DogId) -> RepoResult<Option<Dog>> {
        self.repo.find(id)
    }

    pub fn get_by_name(&self, name: &str) -> RepoResult<Option<Dog>> {
        self.repo.find_by_name(name)
    }

    /// Lists every dog. Loads the whole table.
    pub fn list(&self) -> RepoResult<Vec<Dog>> {
        self.repo.all()
    }
}
