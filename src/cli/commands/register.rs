use crate::cli::commands::{open_cache, open_pool};
use crate::cli::parser::{Commands, RegisterKind};
use crate::config::Config;
use crate::core::register::{NewcomerForm, RegisterLogic, VisitorForm};
use crate::errors::{AppError, AppResult};
use crate::models::user::UserDoc;
use crate::ui::messages::{alert, success};
use crate::utils::colors::{CYAN, GREY, RESET};
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Register { kind } = cmd else {
        return Ok(());
    };

    let mut pool = open_pool(cfg)?;
    let mut cache = open_cache(cfg);

    match kind {
        RegisterKind::Visitor {
            name,
            purpose,
            office,
        } => {
            let form = VisitorForm {
                name: name.clone(),
                purpose: purpose.clone(),
                office: office.clone(),
            };
            let doc = RegisterLogic::register_visitor(&mut pool, &mut cache, &form, Utc::now())?;
            success(format!("Welcome, {}! You are registered as a visitor.", doc.name));
            print_user(&UserDoc::Visitor(doc));
        }
        RegisterKind::Newcomer {
            name,
            department,
            year_level,
        } => {
            let form = NewcomerForm {
                name: name.clone(),
                department: department.clone(),
                year_level: year_level.clone(),
            };
            match RegisterLogic::register_newcomer(&mut pool, &mut cache, &form, Utc::now()) {
                Ok(doc) => {
                    success(format!("Welcome, {}! You are registered as a newcomer.", doc.name));
                    print_user(&UserDoc::Newcomer(doc));
                }
                // the kiosk continues with the cached user
                Err(e @ AppError::AlreadyRegistered(_)) => {
                    alert(e);
                    if let Some(user) = RegisterLogic::current_user(&cache) {
                        print_user(&user);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}

/// Summary card of a registered user.
pub(crate) fn print_user(user: &UserDoc) {
    let field = |label: &str, value: &str| {
        let shown = if value.is_empty() { "—" } else { value };
        println!("  {CYAN}{label:<11}{RESET} {shown}");
    };

    field("Id:", user.id());
    field("Name:", user.name());
    match user {
        UserDoc::Visitor(v) => {
            field("Purpose:", &v.purpose);
            field("Office:", &v.office);
            field("Registered:", &v.registered_at);
        }
        UserDoc::Newcomer(n) => {
            field("Department:", &n.department);
            field("Year level:", &n.year_level);
            field("Registered:", &n.registered_at);
        }
    }
    println!("{GREY}  Type:       {}{RESET}", user.kind());
}
