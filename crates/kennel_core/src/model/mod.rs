//! Domain model for records persisted by kennel core.
//!
//! # Responsibility
//! - Define the in-memory shape of every persisted row.
//! - Keep lifecycle state derivable from the record itself.
//!
//! # Invariants
//! - A record's storage identity is assigned by SQLite, never by callers.

pub mod dog;
