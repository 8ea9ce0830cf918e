#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rck() -> Command {
    cargo_bin_cmd!("rcheckin")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh cache file path (file removed)
pub fn setup_test_cache(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin_cache.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, non-existing directory inside tempdir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin_dir", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Write `content` to a JSON file inside tempdir and return its path
pub fn write_json(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_records.json", name));
    fs::write(&path, content).expect("write json fixture");
    path.to_string_lossy().to_string()
}

/// Two records on 2025-06-15 (one per role), one on 2025-07-02, one undated.
pub const JUNE_RECORDS: &str = r#"[
    {"id": "v1", "name": "Ana Cruz", "type": "Visitor", "date": "2025-06-15T09:30:00",
     "purpose": "Enrollment", "timeIn": "09:30", "room": "Registrar's Office"},
    {"id": "n1", "name": "Ben Reyes", "type": "Newcomer", "date": "2025-06-15"},
    {"id": "v2", "name": "Carla Diaz", "type": "visitor", "createdAt": "2025-07-02T08:00:00Z"},
    {"id": "x1", "name": "No Date", "type": "Visitor"}
]"#;

/// Initialize the schema of a test DB through the CLI
pub fn init_db(db_path: &str) {
    rck()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
