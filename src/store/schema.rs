//! SQLite DDL and the lookup query for the emoji database.

use rusqlite::{params, Connection, Transaction};

use super::types::{EmojiRecord, IconSet};

/// Tables of an emoji database. `name_search` holds the lowercased name and
/// keywords the wildcard query runs against.
pub(crate) const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS emoji (
    name          TEXT NOT NULL,
    code          TEXT NOT NULL,
    keywords      TEXT NOT NULL DEFAULT '',
    name_search   TEXT NOT NULL,
    icon_apple    TEXT,
    icon_twemoji  TEXT,
    icon_noto     TEXT,
    icon_blobmoji TEXT
);

CREATE TABLE IF NOT EXISTS skin_tone (
    name          TEXT NOT NULL,
    tone          TEXT NOT NULL,
    code          TEXT NOT NULL,
    icon_apple    TEXT,
    icon_twemoji  TEXT,
    icon_noto     TEXT,
    icon_blobmoji TEXT
);

CREATE INDEX IF NOT EXISTS idx_skin_tone_name ON skin_tone(name, tone);
"#;

/// Base emoji left-joined with the override for one tone.
///
/// `?1` is the tone column value, `?2` the `LIKE` pattern, `?3` the limit.
pub(crate) const LOOKUP_SQL: &str = r#"
SELECT
    em.name, em.code, em.keywords,
    em.icon_apple, em.icon_twemoji, em.icon_noto, em.icon_blobmoji,
    skt.icon_apple, skt.icon_twemoji, skt.icon_noto, skt.icon_blobmoji,
    skt.code
FROM emoji AS em
LEFT JOIN skin_tone AS skt ON skt.name = em.name AND skt.tone = ?1
WHERE em.name_search LIKE ?2
LIMIT ?3
"#;

/// Apply the schema to an open connection. Idempotent.
pub(crate) fn apply_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Insert records and their tone variants inside one transaction.
pub(crate) fn insert_records(tx: &Transaction<'_>, records: &[EmojiRecord]) -> rusqlite::Result<()> {
    let mut emoji_stmt = tx.prepare(
        "INSERT INTO emoji (name, code, keywords, name_search, \
         icon_apple, icon_twemoji, icon_noto, icon_blobmoji) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    let mut tone_stmt = tx.prepare(
        "INSERT INTO skin_tone (name, tone, code, \
         icon_apple, icon_twemoji, icon_noto, icon_blobmoji) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;

    for record in records {
        let IconSet {
            apple,
            twemoji,
            noto,
            blobmoji,
        } = &record.icons;
        emoji_stmt.execute(params![
            record.name,
            record.code,
            record.keywords.join(" "),
            record.name_search(),
            apple,
            twemoji,
            noto,
            blobmoji,
        ])?;

        for variant in &record.skin_tones {
            let IconSet {
                apple,
                twemoji,
                noto,
                blobmoji,
            } = &variant.icons;
            tone_stmt.execute(params![
                record.name,
                variant.tone.column_value(),
                variant.code,
                apple,
                twemoji,
                noto,
                blobmoji,
            ])?;
        }
    }

    Ok(())
}
