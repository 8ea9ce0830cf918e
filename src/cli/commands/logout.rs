use crate::cli::commands::{open_cache, open_pool};
use crate::config::Config;
use crate::core::register::RegisterLogic;
use crate::db::log::oplog_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut cache = open_cache(cfg);

    match RegisterLogic::logout(&mut cache)? {
        Some(user) => {
            let pool = open_pool(cfg)?;
            oplog_or_warn(
                &pool.conn,
                "logout",
                user.id(),
                &format!("Logged out {} '{}'", user.kind(), user.name()),
            );
            success(format!("Goodbye, {}!", user.name()));
        }
        None => info("No user is currently registered on this kiosk."),
    }

    Ok(())
}
