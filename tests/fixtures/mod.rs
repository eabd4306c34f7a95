// Test fixtures - reusable schedule payloads
// Provides consistent test data across integration and property tests

use class_calendar::models::schedule::{ClassOccurrence, DayOfWeek, TimeBlock};

/// Sample class occurrences
pub mod classes {
    use super::*;

    pub fn occurrence(id: i64, title: &str, start: &str, end: &str) -> ClassOccurrence {
        ClassOccurrence {
            id,
            title: title.to_string(),
            professor: "Santos, Maria".to_string(),
            room: "B-204".to_string(),
            section: Some("BSCS 2-A".to_string()),
            capacity_status: None,
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    /// A morning calculus lecture
    pub fn calculus() -> ClassOccurrence {
        occurrence(1, "Calculus I", "09:00", "10:00")
    }

    /// An overlapping physics lab
    pub fn physics_lab() -> ClassOccurrence {
        occurrence(2, "Physics Lab", "09:30", "11:00")
    }
}

/// Sample time blocks
pub mod blocks {
    use super::*;

    pub fn block(day: DayOfWeek, start: &str, end: &str, classes: Vec<ClassOccurrence>) -> TimeBlock {
        TimeBlock {
            day_of_week: day,
            start_time: start.to_string(),
            end_time: end.to_string(),
            count: classes.len().max(1) as u32,
            label: None,
            classes,
        }
    }

    /// Two overlapping Monday-morning blocks that merge into one event
    pub fn overlapping_monday_pair() -> Vec<TimeBlock> {
        vec![
            block(DayOfWeek::Monday, "09:00", "10:00", vec![classes::calculus()]),
            block(DayOfWeek::Monday, "09:30", "11:00", vec![classes::physics_lab()]),
        ]
    }

    /// Back-to-back blocks that must stay separate
    pub fn touching_monday_pair() -> Vec<TimeBlock> {
        vec![
            block(DayOfWeek::Monday, "09:00", "10:00", vec![classes::calculus()]),
            block(
                DayOfWeek::Monday,
                "10:00",
                "11:00",
                vec![classes::occurrence(3, "Data Structures", "10:00", "11:00")],
            ),
        ]
    }

    /// A realistic light week across three days
    pub fn sample_week() -> Vec<TimeBlock> {
        let mut week = overlapping_monday_pair();
        week.push(block(
            DayOfWeek::Wednesday,
            "13:00",
            "14:30",
            vec![classes::occurrence(4, "Ethics", "13:00", "14:30")],
        ));
        week.push(block(
            DayOfWeek::Saturday,
            "07:30",
            "09:00",
            vec![classes::occurrence(5, "PE", "07:30", "09:00")],
        ));
        week
    }
}
