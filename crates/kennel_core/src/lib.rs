//! Core persistence logic for kennel.
//! This crate maps `Dog` records onto a single SQLite table.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dog::{Dog, DogId, RecordState};
pub use repo::dog_repo::{hydrate, DogRepository, RepoError, RepoResult, SqliteDogRepository};
pub use service::dog_service::DogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
