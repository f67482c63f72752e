//! SQLite storage bootstrap and schema management entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for kennel core.
//! - Own the DDL for the `dogs` table.
//!
//! # Invariants
//! - Opening a connection never creates or alters application tables.
//! - Schema changes happen only through `schema::create_table` and
//!   `schema::drop_table`, both idempotent.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::{create_table, drop_table, table_exists, DOGS_TABLE};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
