use crate::cli::commands::{open_cache, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rooms::{RoomLogic, Wayfinding};
use crate::db::log::oplog_or_warn;
use crate::errors::AppResult;
use crate::models::Room;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{GREEN, RED, RESET};
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Rooms {
        list,
        select,
        show,
        clear,
    } = cmd
    else {
        return Ok(());
    };

    let mut cache = open_cache(cfg);

    if *clear {
        let previous = RoomLogic::clear(&mut cache)?;
        if let Some(room) = previous {
            let pool = open_pool(cfg)?;
            oplog_or_warn(&pool.conn, "room_clear", &room.id, "Back to room selection");
        }
        info("Back to room selection");
    }

    if let Some(query) = select {
        let room = RoomLogic::select(&mut cache, query)?;
        let pool = open_pool(cfg)?;
        oplog_or_warn(
            &pool.conn,
            "room_select",
            &room.id,
            &format!("Selected room '{}'", room.name),
        );
        success(format!("Selected room: {} {}", room.icon().glyph(), room.name));
        print_wayfinding(&room, Path::new(&cfg.images_dir));
    }

    if *show {
        match RoomLogic::selected(&cache) {
            Some(room) => print_wayfinding(&room, Path::new(&cfg.images_dir)),
            None => info("No room selected. Use `rooms --select <room>` first."),
        }
    }

    let nothing_else = !*clear && select.is_none() && !*show;
    if *list || nothing_else {
        print_directory(RoomLogic::selected(&cache).as_ref());
    }

    Ok(())
}

fn print_directory(selected: Option<&Room>) {
    header("Room Directory");

    let mut table = Table::new(vec!["", "ID", "ROOM"]);
    for room in Room::all() {
        let name = if selected.is_some_and(|s| s.id == room.id) {
            format!("{GREEN}{} (selected){RESET}", room.name)
        } else {
            room.name.clone()
        };
        table.add_row(vec![room.icon().glyph().to_string(), room.id.clone(), name]);
    }
    print!("{}", table.render());
}

fn print_wayfinding(room: &Room, images_dir: &Path) {
    header(format!("{} {}", room.icon().glyph(), room.name));

    match RoomLogic::wayfinding(room, images_dir) {
        Wayfinding::Image(path) => {
            println!("{RED}Follow the red line to reach your destination.{RESET}");
            println!("🗺️  {}", path.display());
        }
        Wayfinding::ImageMissing(path) => {
            println!("{RED}Follow the red line to reach your destination.{RESET}");
            warning(format!("Failed to load image: {}", path.display()));
        }
        Wayfinding::NoImage => info("No image available for this room."),
    }
}
