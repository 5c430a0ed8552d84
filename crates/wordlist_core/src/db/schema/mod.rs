//! Schema versioning for the word database.
//!
//! # Responsibility
//! - Create `word_table` on fresh databases.
//! - Drop and recreate the table whenever the stored version differs.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - There is no in-place upgrade path: a mismatch always discards rows.

use crate::db::DbResult;
use log::warn;
use rusqlite::Connection;

/// Schema version written by this binary.
pub const SCHEMA_VERSION: i32 = 2;

const WORD_TABLE_SQL: &str = include_str!("word_table.sql");

/// What `apply_schema` did to the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaAction {
    /// Stored version already matched.
    Unchanged,
    /// Fresh database; table created.
    Created,
    /// Stored version differed; table dropped and recreated.
    Reset { from_version: i32 },
}

/// Returns the schema version known by this binary.
pub fn latest_version() -> i32 {
    SCHEMA_VERSION
}

/// Brings the connection to `SCHEMA_VERSION`, destructively if needed.
pub fn apply_schema(conn: &mut Connection) -> DbResult<SchemaAction> {
    let current_version = current_user_version(conn)?;
    if current_version == SCHEMA_VERSION {
        return Ok(SchemaAction::Unchanged);
    }

    let action = if current_version == 0 && !word_table_exists(conn)? {
        SchemaAction::Created
    } else {
        warn!(
            "event=db_schema module=db status=reset from_version={} to_version={}",
            current_version, SCHEMA_VERSION
        );
        SchemaAction::Reset {
            from_version: current_version,
        }
    };

    let tx = conn.transaction()?;
    tx.execute_batch("DROP TABLE IF EXISTS word_table;")?;
    tx.execute_batch(WORD_TABLE_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    Ok(action)
}

/// Reads `PRAGMA user_version`.
///
/// SQLite stores the value as a signed 32-bit integer, so foreign files may
/// carry negative versions.
pub fn current_user_version(conn: &Connection) -> DbResult<i32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, i32>(0))?;
    Ok(version)
}

fn word_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'word_table'
        );",
        [],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
