//! `users` table: the document store behind registrations and the history view.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::VisitRecord;
use crate::ui::messages::warning;
use chrono::Utc;
use rusqlite::params;
use serde::Serialize;

/// Create or replace the document stored under `id`.
pub fn put_document<T: Serialize>(pool: &mut DbPool, id: &str, kind: &str, doc: &T) -> AppResult<()> {
    let json = serde_json::to_string(doc)?;
    let now = Utc::now().to_rfc3339();

    pool.conn.execute(
        "INSERT INTO users (id, type, document, created_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
            type = excluded.type,
            document = excluded.document",
        params![id, kind, json, now],
    )?;
    Ok(())
}

/// Load every stored document, oldest first.
///
/// A row whose document is not valid JSON is skipped with a warning.
pub fn load_records(pool: &mut DbPool) -> AppResult<Vec<VisitRecord>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, document FROM users ORDER BY rowid ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (id, document) = r?;
        match serde_json::from_str::<serde_json::Value>(&document) {
            Ok(value) => out.push(VisitRecord::from_value(value)),
            Err(e) => warning(format!("Skipping user '{id}': malformed document ({e})")),
        }
    }
    Ok(out)
}

pub fn count_by_type(pool: &mut DbPool) -> AppResult<Vec<(String, i64)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT type, COUNT(*) FROM users GROUP BY type ORDER BY type ASC")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
