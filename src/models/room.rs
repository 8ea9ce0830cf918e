use serde::{Deserialize, Serialize};

/// A destination in the kiosk room directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
}

/// Category icon used when listing rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomIcon {
    Building,
    Chapel,
    Finance,
    Registrar,
    Chancellor,
    Canteen,
    Kitchen,
    Clinic,
    Guidance,
    Lab,
}

impl RoomIcon {
    pub fn for_name(name: &str) -> Self {
        match name {
            "Chapel" => RoomIcon::Chapel,
            "Finance Office" => RoomIcon::Finance,
            "Registrar's Office" => RoomIcon::Registrar,
            "Chancellor's Office" => RoomIcon::Chancellor,
            "Canteen" => RoomIcon::Canteen,
            "Hot Kitchen" => RoomIcon::Kitchen,
            "Clinic" => RoomIcon::Clinic,
            "Guidance Office" => RoomIcon::Guidance,
            "Science Lab" => RoomIcon::Lab,
            _ => RoomIcon::Building,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            RoomIcon::Building => "🏫",
            RoomIcon::Chapel => "⛪",
            RoomIcon::Finance => "💰",
            RoomIcon::Registrar => "📋",
            RoomIcon::Chancellor => "🎓",
            RoomIcon::Canteen => "🍴",
            RoomIcon::Kitchen => "🍳",
            RoomIcon::Clinic => "🏥",
            RoomIcon::Guidance => "💬",
            RoomIcon::Lab => "🧪",
        }
    }
}

/// (id, display name) of every room, in directory order.
pub const DIRECTORY: [(&str, &str); 20] = [
    ("room_101", "Room 101"),
    ("room_102", "Room 102"),
    ("science_lab", "Science Lab"),
    ("room_103", "Room 103"),
    ("ssg_office", "SSG Office"),
    ("room_104", "Room 104"),
    ("room_105", "Room 105"),
    ("guidance_office", "Guidance Office"),
    ("clinic", "Clinic"),
    ("chancellor_office", "Chancellor's Office"),
    ("finance", "Finance Office"),
    ("registrar", "Registrar's Office"),
    ("hm_lab", "HM Lab"),
    ("hot_kitchen", "Hot Kitchen"),
    ("hs_room_102", "HS Room 102"),
    ("hs_room_103", "HS Room 103"),
    ("hs_room_104", "HS Room 104"),
    ("hs_room_105", "HS Room 105"),
    ("canteen", "Canteen"),
    ("chapel", "Chapel"),
];

impl Room {
    pub fn all() -> Vec<Room> {
        DIRECTORY
            .iter()
            .map(|(id, name)| Room {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect()
    }

    /// Look a room up by id or by display name (case-insensitive).
    pub fn find(query: &str) -> Option<Room> {
        let q = query.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|r| r.id == q || r.name.to_lowercase() == q)
    }

    pub fn icon(&self) -> RoomIcon {
        RoomIcon::for_name(&self.name)
    }

    /// Wayfinding image file name, only for rooms in the directory.
    pub fn image_file_name(&self) -> Option<String> {
        DIRECTORY
            .iter()
            .any(|(_, name)| *name == self.name)
            .then(|| format!("{}.png", self.name))
    }
}
