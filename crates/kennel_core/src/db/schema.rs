//! DDL for the `dogs` table.
//!
//! # Invariants
//! - Column order is `(id, name, breed)`; row hydration reads positionally
//!   and depends on it.
//! - Both operations are safe to repeat.

use super::DbResult;
use log::info;
use rusqlite::Connection;

/// Name of the single table managed by kennel core.
pub const DOGS_TABLE: &str = "dogs";

const CREATE_DOGS_SQL: &str =
    "CREATE TABLE IF NOT EXISTS dogs (id INTEGER PRIMARY KEY, name TEXT, breed TEXT)";
const DROP_DOGS_SQL: &str = "DROP TABLE IF EXISTS dogs";

/// Creates the `dogs` table when it is missing.
pub fn create_table(conn: &Connection) -> DbResult<()> {
    conn.execute(CREATE_DOGS_SQL, [])?;
    info!("event=schema_create module=db status=ok table={DOGS_TABLE}");
    Ok(())
}

/// Drops the `dogs` table and every row in it, if present.
pub fn drop_table(conn: &Connection) -> DbResult<()> {
    conn.execute(DROP_DOGS_SQL, [])?;
    info!("event=schema_drop module=db status=ok table={DOGS_TABLE}");
    Ok(())
}

/// Returns whether the `dogs` table currently exists.
pub fn table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [DOGS_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
