use serde::{Deserialize, Serialize};

pub const OFFICES: [&str; 4] = [
    "Chancellor's Office",
    "Finance Office",
    "Guidance Office",
    "Registrar Office",
];

pub const DEPARTMENTS: [&str; 2] = ["College", "High School"];

pub const YEAR_LEVELS: [&str; 10] = [
    "Grade 7", "Grade 8", "Grade 9", "Grade 10", "Grade 11", "Grade 12", "1st Year", "2nd Year",
    "3rd Year", "4th Year",
];

/// Document written for a registered visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorDoc {
    pub id: String,
    pub name: String,
    pub purpose: String,
    pub office: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub registered_at: String,
}

/// Document written for a registered newcomer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewcomerDoc {
    pub id: String,
    pub name: String,
    pub department: String,
    pub year_level: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub registered_at: String,
}

/// The user cached under `userData`: either kind of registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserDoc {
    Newcomer(NewcomerDoc),
    Visitor(VisitorDoc),
}

impl UserDoc {
    pub fn id(&self) -> &str {
        match self {
            UserDoc::Newcomer(n) => &n.id,
            UserDoc::Visitor(v) => &v.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            UserDoc::Newcomer(n) => &n.name,
            UserDoc::Visitor(v) => &v.name,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            UserDoc::Newcomer(n) => &n.kind,
            UserDoc::Visitor(v) => &v.kind,
        }
    }

    pub fn is_newcomer(&self) -> bool {
        self.kind() == "newcomer"
    }
}
