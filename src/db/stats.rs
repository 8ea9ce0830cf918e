use crate::db::pool::DbPool;
use crate::db::records::count_by_type;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) USERS PER TYPE
    //
    let per_type = count_by_type(pool)?;
    let total: i64 = per_type.iter().map(|(_, n)| n).sum();
    println!("{}• Registered users:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);
    for (kind, n) in &per_type {
        let label = if kind.is_empty() { "(untyped)" } else { kind };
        println!("    {GREY}{label}:{RESET} {n}");
    }

    //
    // 3) FIRST / LAST REGISTRATION
    //
    let range: Option<(String, String)> = pool
        .conn
        .query_row(
            "SELECT MIN(created_at), MAX(created_at) FROM users HAVING COUNT(*) > 0",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match range {
        Some((first, last)) => {
            println!("{}• First registration:{} {}", CYAN, RESET, first);
            println!("{}• Last registration:{}  {}", CYAN, RESET, last);
        }
        None => println!("{}• No registrations yet.{}", GREY, RESET),
    }

    //
    // 4) LOG SIZE
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);
    println!();

    Ok(())
}
