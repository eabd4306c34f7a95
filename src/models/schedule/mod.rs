// Schedule wire models
// Shapes returned by the schedule query endpoint, per day and time range

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::time;

/// Day of week as the backend spells it ("Monday", "Tuesday", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// Column-header abbreviation.
    pub fn short_label(&self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Days the calendar renders by default. The institution schedules classes
/// Monday through Saturday; Sunday blocks are accepted on the wire but only
/// laid out when a board is configured with Sunday.
pub const WEEK_DISPLAY_DAYS: [DayOfWeek; 6] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
];

/// A single class meeting folded into a time block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassOccurrence {
    pub id: i64,
    pub title: String,
    pub professor: String,
    pub room: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub capacity_status: Option<String>,
    pub start_time: String,
    pub end_time: String,
}

/// One backend-reported chunk of schedule occupying a day/time range,
/// possibly already aggregating multiple classes. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub count: u32,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub classes: Vec<ClassOccurrence>,
}

impl TimeBlock {
    /// Validate the block
    pub fn validate(&self) -> Result<(), String> {
        if self.count < 1 {
            return Err("Time block count must be at least 1".to_string());
        }

        let start = time::parse_minutes(&self.start_time)
            .ok_or_else(|| format!("Invalid start time {:?}", self.start_time))?;
        let end = time::parse_minutes(&self.end_time)
            .ok_or_else(|| format!("Invalid end time {:?}", self.end_time))?;

        if end <= start {
            return Err("Time block end must be after start".to_string());
        }

        Ok(())
    }
}
