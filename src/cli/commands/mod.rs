pub mod config;
pub mod db;
pub mod history;
pub mod init;
pub mod log;
pub mod logout;
pub mod register;
pub mod rooms;

use crate::cache::FileStore;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database with its schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn open_cache(cfg: &Config) -> FileStore {
    FileStore::new(&cfg.cache_file)
}
