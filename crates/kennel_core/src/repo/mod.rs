//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for persisted records.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Lookups that match nothing return `Ok(None)`, never an error.
//! - Storage errors are passed through without translation.

pub mod dog_repo;
