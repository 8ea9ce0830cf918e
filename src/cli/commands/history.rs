use crate::calendar::{Action, HistoryView, ViewState};
use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::{HistoryLogic, RecordSource};
use crate::db::log::oplog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::RoleFilter;
use crate::ui::messages::header;
use crate::utils::date::{parse_date, today};
use std::path::{Path, PathBuf};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::History {
        month,
        year,
        role,
        day,
        from_json,
        export,
        format,
        out_dir,
        force,
    } = cmd
    else {
        return Ok(());
    };

    // records from the JSON file never touch the database
    let mut pool: Option<DbPool> = None;
    let records = match from_json {
        Some(file) => HistoryLogic::load(RecordSource::JsonFile(Path::new(file)))?,
        None => {
            let p = pool.insert(open_pool(cfg)?);
            HistoryLogic::load(RecordSource::Store(p))?
        }
    };

    let defaults = ViewState::new(today(), cfg.default_role);
    let mut view = HistoryView::new(records, cfg.years.clone(), defaults);

    if let Some(r) = role {
        view.dispatch(Action::SetRole(RoleFilter::from_name(r)?))?;
    }
    if let Some(y) = year {
        view.dispatch(Action::SetYear(*y))?;
    }
    if let Some(m) = month {
        if !(1..=12).contains(m) {
            return Err(AppError::InvalidMonth(*m));
        }
        view.dispatch(Action::SetMonth(m - 1))?;
    }
    if let Some(d) = day {
        select_day(&mut view, d)?;
    }

    header("Visit History");
    print!("{}", HistoryLogic::render(&view));

    if *export {
        let dir = out_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(&cfg.report_dir));

        let path = ExportLogic::export_daily_report(&view, *format, &dir, *force)?;

        if let Some(pool) = &pool {
            let target = view
                .state()
                .selected
                .as_ref()
                .map(|d| d.to_string())
                .unwrap_or_default();
            oplog_or_warn(
                &pool.conn,
                "report",
                &target,
                &format!("Daily report written to {}", path.display()),
            );
        }
    }

    Ok(())
}

/// `--day` accepts a full ISO date of either displayed month, or a day
/// number of the first one.
fn select_day(view: &mut HistoryView, input: &str) -> AppResult<()> {
    let input = input.trim();

    if let Ok(n) = input.parse::<u32>() {
        return view.dispatch(Action::SelectDay {
            day: n,
            next_month: false,
        });
    }

    let date = parse_date(input).ok_or_else(|| AppError::InvalidDate(input.to_string()))?;
    view.select_date(date)
}
