//! Room directory and image-based wayfinding.

use crate::cache::{KeyValueStore, SELECTED_ROOM_KEY, get_json, set_json};
use crate::errors::{AppError, AppResult};
use crate::models::Room;
use std::path::{Path, PathBuf};

/// What the kiosk shows for the selected room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wayfinding {
    /// Image found on disk.
    Image(PathBuf),
    /// The room maps to an image, but the file cannot be loaded.
    ImageMissing(PathBuf),
    /// The room has no wayfinding image.
    NoImage,
}

pub struct RoomLogic;

impl RoomLogic {
    pub fn select(cache: &mut dyn KeyValueStore, query: &str) -> AppResult<Room> {
        let room = Room::find(query).ok_or_else(|| AppError::UnknownRoom(query.to_string()))?;
        set_json(cache, SELECTED_ROOM_KEY, &room)?;
        Ok(room)
    }

    /// The persisted selection; malformed data counts as no selection.
    pub fn selected(cache: &dyn KeyValueStore) -> Option<Room> {
        get_json(cache, SELECTED_ROOM_KEY)
    }

    /// Back to the room grid.
    pub fn clear(cache: &mut dyn KeyValueStore) -> AppResult<Option<Room>> {
        let previous = Self::selected(cache);
        cache.remove(SELECTED_ROOM_KEY)?;
        Ok(previous)
    }

    pub fn wayfinding(room: &Room, images_dir: &Path) -> Wayfinding {
        match room.image_file_name() {
            Some(file) => {
                let path = images_dir.join(file);
                if path.is_file() {
                    Wayfinding::Image(path)
                } else {
                    Wayfinding::ImageMissing(path)
                }
            }
            None => Wayfinding::NoImage,
        }
    }
}
