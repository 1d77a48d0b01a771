//! Read-only emoji dataset backed by SQLite.
//!
//! A store is either a database file shipped alongside the extension or an
//! in-memory database seeded from the [`builtin`] table. Queries never write.

pub mod builtin;
mod schema;
pub mod types;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OpenFlags};

use crate::error::{EmojiError, EmojiResult};

pub use types::{
    EmojiRecord, EmojiRow, IconSet, IconStyle, SkinTone, SkinToneRecord, ToneOverride,
};

/// Emoji lookup table.
///
/// The connection sits behind a mutex so a store can be shared with whatever
/// thread the host delivers queries on.
pub struct EmojiStore {
    conn: Mutex<Connection>,
}

impl EmojiStore {
    /// Open an existing database file read-only.
    pub fn open(path: &Path) -> EmojiResult<Self> {
        if !path.exists() {
            return Err(EmojiError::NotFound(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        tracing::debug!(path = %path.display(), "opened emoji database");
        Ok(Self::from_connection(conn))
    }

    /// In-memory database seeded from the built-in dataset.
    pub fn builtin() -> EmojiResult<Self> {
        let mut conn = Connection::open_in_memory()?;
        seed(&mut conn, &builtin::RECORDS)?;
        Ok(Self::from_connection(conn))
    }

    /// Open the configured database, or fall back to the built-in dataset
    /// when none is configured or the file is missing.
    pub fn open_or_builtin(path: Option<&Path>) -> EmojiResult<Self> {
        match path {
            Some(path) if path.exists() => Self::open(path),
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "emoji database not found, using built-in dataset"
                );
                Self::builtin()
            }
            None => Self::builtin(),
        }
    }

    /// Write a new database file containing `records`.
    pub fn create(path: &Path, records: &[EmojiRecord]) -> EmojiResult<()> {
        if path.exists() {
            return Err(EmojiError::AlreadyExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut conn = Connection::open(path)?;
        seed(&mut conn, records)?;
        tracing::info!(path = %path.display(), count = records.len(), "wrote emoji database");
        Ok(())
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> EmojiResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| EmojiError::Lock(e.to_string()))
    }

    /// Run the wildcard lookup.
    ///
    /// `pattern` is a complete `LIKE` pattern. At most `limit` rows are
    /// returned, in table order.
    pub fn lookup(&self, pattern: &str, tone: SkinTone, limit: usize) -> EmojiResult<Vec<EmojiRow>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(schema::LOOKUP_SQL)?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![tone.column_value(), pattern, limit], row_to_emoji)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Number of emoji in the dataset.
    pub fn count(&self) -> EmojiResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM emoji", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

fn seed(conn: &mut Connection, records: &[EmojiRecord]) -> EmojiResult<()> {
    schema::apply_schema(conn)?;
    let tx = conn.transaction()?;
    schema::insert_records(&tx, records)?;
    tx.commit()?;
    Ok(())
}

fn row_to_emoji(row: &rusqlite::Row<'_>) -> rusqlite::Result<EmojiRow> {
    let tone_code: Option<String> = row.get(11)?;
    let tone = match tone_code {
        Some(code) if !code.is_empty() => Some(ToneOverride {
            code,
            icons: IconSet {
                apple: row.get(7)?,
                twemoji: row.get(8)?,
                noto: row.get(9)?,
                blobmoji: row.get(10)?,
            },
        }),
        _ => None,
    };

    Ok(EmojiRow {
        name: row.get(0)?,
        code: row.get(1)?,
        keywords: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        icons: IconSet {
            apple: row.get(3)?,
            twemoji: row.get(4)?,
            noto: row.get(5)?,
            blobmoji: row.get(6)?,
        },
        tone,
    })
}
