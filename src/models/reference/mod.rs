// Reference-list models
// Rows behind the filter and edit-form dropdowns. Thin wire shapes only.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchoolYear {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Semester {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub semester_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub building_name: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default, rename = "type")]
    pub room_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Professor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
}

impl Professor {
    /// Dropdown label, surname first.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub subject_code: String,
    pub subject_name: String,
}

impl Subject {
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.subject_code, self.subject_name)
    }
}

/// A dropdown entry keyed by entity id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdOption {
    pub value: i64,
    pub label: String,
}

/// A dropdown entry keyed by text, e.g. building names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOption {
    pub value: String,
    pub label: String,
}
