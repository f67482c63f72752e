//! Dog repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Map `Dog` records to and from rows of the `dogs` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every read path hydrates rows through [`hydrate`].
//! - Insert assigns the generated id in the same statement that writes the
//!   row (`INSERT ... RETURNING`), so no other insert can interleave.
//! - SQL failures are returned unchanged inside `RepoError::Db`.
//! - `(name, breed)` is not unique. Two callers racing through
//!   `find_or_create` with the same pair can both insert.

use crate::db::{self, DbError};
use crate::model::dog::{Dog, DogId};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DOG_SELECT_SQL: &str = "SELECT id, name, breed FROM dogs";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for dog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Insert was called on a record that already has an id.
    AlreadyPersisted(DogId),
    /// Update was called on a record that was never inserted.
    NotPersisted,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::AlreadyPersisted(id) => write!(f, "dog is already persisted with id {id}"),
            Self::NotPersisted => write!(f, "dog has no id; insert it before updating"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::AlreadyPersisted(_) => None,
            Self::NotPersisted => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the dog mapper.
///
/// Implementors provide the storage primitives; the composite use cases
/// (`save_or_update`, `create`, `find_or_create`) are built on top of them.
pub trait DogRepository {
    fn create_table(&self) -> RepoResult<()>;
    fn drop_table(&self) -> RepoResult<()>;
    /// Inserts a transient dog and writes the generated id back onto it.
    fn insert(&self, dog: &mut Dog) -> RepoResult<DogId>;
    /// Overwrites name/breed of the row with `dog.id()`.
    ///
    /// Missing rows are not an error: nothing is written.
    fn update(&self, dog: &Dog) -> RepoResult<()>;
    /// Loads every row into memory. Not intended for large tables.
    fn all(&self) -> RepoResult<Vec<Dog>>;
    fn find(&self, id: DogId) -> RepoResult<Option<Dog>>;
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Dog>>;
    fn find_by_name_and_breed(&self, name: &str, breed: &str) -> RepoResult<Option<Dog>>;

    /// Inserts transient dogs and updates persisted ones.
    fn save_or_update(&self, dog: &mut Dog) -> RepoResult<()> {
        if dog.is_persisted() {
            self.update(dog)
        } else {
            self.insert(dog).map(|_| ())
        }
    }

    fn create(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        let mut dog = Dog::new(name, breed);
        self.insert(&mut dog)?;
        Ok(dog)
    }

    /// Returns the first dog matching both fields, inserting one if none does.
    fn find_or_create(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        match self.find_by_name_and_breed(name, breed)? {
            Some(dog) => Ok(dog),
            None => self.create(name, breed),
        }
    }
}

/// SQLite-backed dog repository.
pub struct SqliteDogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_one(&self, sql: &str, params: impl rusqlite::Params) -> RepoResult<Option<Dog>> {
        let dog = self.conn.query_row(sql, params, hydrate).optional()?;
        Ok(dog)
    }
}

impl DogRepository for SqliteDogRepository<'_> {
    fn create_table(&self) -> RepoResult<()> {
        db::create_table(self.conn)?;
        Ok(())
    }

    fn drop_table(&self) -> RepoResult<()> {
        db::drop_table(self.conn)?;
        Ok(())
    }

    fn insert(&self, dog: &mut Dog) -> RepoResult<DogId> {
        if let Some(id) = dog.id() {
            return Err(RepoError::AlreadyPersisted(id));
        }

        let id: DogId = self.conn.query_row(
            "INSERT INTO dogs (name, breed) VALUES (?1, ?2) RETURNING id;",
            params![dog.name.as_deref(), dog.breed.as_deref()],
            |row| row.get(0),
        )?;
        dog.assign_id(id);
        debug!("event=dog_insert module=repo status=ok id={id}");

        Ok(id)
    }

    fn update(&self, dog: &Dog) -> RepoResult<()> {
        let id = dog.id().ok_or(RepoError::NotPersisted)?;

        let changed = self.conn.execute(
            "UPDATE dogs SET name = ?1, breed = ?2 WHERE id = ?3;",
            params![dog.name.as_deref(), dog.breed.as_deref(), id],
        )?;
        if changed == 0 {
            debug!("event=dog_update module=repo status=noop id={id}");
        } else {
            debug!("event=dog_update module=repo status=ok id={id}");
        }

        Ok(())
    }

    fn all(&self) -> RepoResult<Vec<Dog>> {
        let mut stmt = self.conn.prepare(&format!("{DOG_SELECT_SQL};"))?;
        let dogs = stmt
            .query_map([], hydrate)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(dogs)
    }

    fn find(&self, id: DogId) -> RepoResult<Option<Dog>> {
        self.query_one(&format!("{DOG_SELECT_SQL} WHERE id = ?1 LIMIT 1;"), [id])
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Dog>> {
        self.query_one(&format!("{DOG_SELECT_SQL} WHERE name = ?1 LIMIT 1;"), [name])
    }

    fn find_by_name_and_breed(&self, name: &str, breed: &str) -> RepoResult<Option<Dog>> {
        self.query_one(
            &format!("{DOG_SELECT_SQL} WHERE name = ?1 AND breed = ?2 LIMIT 1;"),
            [name, breed],
        )
    }
}

/// Builds a [`Dog`] from a positional `(id, name, breed)` row.
///
/// NULL `name`/`breed` columns hydrate to `None`.
pub fn hydrate(row: &Row<'_>) -> rusqlite::Result<Dog> {
    Ok(Dog::from_columns(row.get(0)?, row.get(1)?, row.get(2)?))
}
