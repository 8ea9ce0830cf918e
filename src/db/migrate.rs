use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Ordered list of schema migrations: (version, description, SQL).
const MIGRATIONS: [(&str, &str, &str); 2] = [
    (
        "20250601_0001_create_users",
        "Created users document table",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            type        TEXT NOT NULL DEFAULT '',
            document    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        "#,
    ),
    (
        "20250615_0002_index_users_type",
        "Indexed users by type",
        r#"
        CREATE INDEX IF NOT EXISTS idx_users_type ON users(type);
        "#,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Returns the number of migrations applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        conn.execute_batch(sql)?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {version} → {message}"));
        applied += 1;
    }

    Ok(applied)
}
