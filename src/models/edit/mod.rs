// Edit-session models
// The in-progress edit form, the conflict pre-check exchange, and the
// schedule update payload.

use serde::{Deserialize, Serialize};

use crate::models::schedule::DayOfWeek;

/// The in-progress edit form. Owned by the current edit session, discarded
/// on drawer close or save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditDraft {
    pub id: Option<i64>,
    pub subject_id: Option<i64>,
    pub professor_id: Option<i64>,
    pub building: Option<String>,
    pub room_id: Option<i64>,
    pub day_of_week: Option<DayOfWeek>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub section_id: Option<i64>,
    pub course_id: Option<i64>,
    pub year_level: Option<u32>,
}

impl EditDraft {
    /// A conflict check is only meaningful once day, start and end are set.
    pub fn has_timing(&self) -> bool {
        self.day_of_week.is_some() && self.start_time.is_some() && self.end_time.is_some()
    }

    pub fn from_detail(detail: &ScheduleDetail) -> Self {
        Self {
            id: Some(detail.id),
            subject_id: detail.subject_id,
            professor_id: detail.professor_id,
            building: detail
                .room
                .as_ref()
                .and_then(|room| room.building_name.clone()),
            room_id: detail.room_id,
            day_of_week: detail.day_of_week,
            start_time: detail.start_time.as_deref().map(truncate_to_hhmm),
            end_time: detail.end_time.as_deref().map(truncate_to_hhmm),
            section_id: detail.class_section_id,
            course_id: detail
                .class_section
                .as_ref()
                .and_then(|section| section.course_id),
            year_level: detail
                .class_section
                .as_ref()
                .and_then(|section| section.year_level),
        }
    }
}

/// The backend may report "HH:MM:SS"; the form works in "HH:MM".
fn truncate_to_hhmm(time: &str) -> String {
    time.chars().take(5).collect()
}

/// Conflict flags returned by the pre-check endpoint. Replaced wholesale on
/// every response; stale the instant a watched draft field changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictResult {
    pub conflict: bool,
    pub room_conflict: bool,
    pub professor_conflict: bool,
    pub class_conflict: bool,
    pub room_capacity_conflict: bool,
}

/// Body of `POST /schedules/check-conflict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictQuery {
    pub professor_id: Option<i64>,
    pub room_id: Option<i64>,
    pub class_section_id: Option<i64>,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
}

impl ConflictQuery {
    /// Build from a draft with complete timing fields; `None` otherwise.
    pub fn from_draft(draft: &EditDraft) -> Option<Self> {
        Some(Self {
            professor_id: draft.professor_id,
            room_id: draft.room_id,
            class_section_id: draft.section_id,
            day_of_week: draft.day_of_week?,
            start_time: draft.start_time.clone()?,
            end_time: draft.end_time.clone()?,
        })
    }
}

/// Nested room reference on a schedule detail.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoomRef {
    #[serde(default)]
    pub building_name: Option<String>,
}

/// Nested class-section reference on a schedule detail.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClassSectionRef {
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub year_level: Option<u32>,
}

/// Response of `GET /schedules/{id}`, used to populate the edit draft.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScheduleDetail {
    pub id: i64,
    #[serde(default)]
    pub subject_id: Option<i64>,
    #[serde(default)]
    pub professor_id: Option<i64>,
    #[serde(default)]
    pub room_id: Option<i64>,
    #[serde(default)]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub class_section_id: Option<i64>,
    #[serde(default)]
    pub room: Option<RoomRef>,
    #[serde(default)]
    pub class_section: Option<ClassSectionRef>,
}

/// Body of `PUT /schedules/{id}`. Unset fields are omitted; the backend
/// stays the arbiter of what a partial update means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub status: String,
}

impl ScheduleUpdate {
    /// Every save finalizes the schedule row.
    pub const STATUS_FINALIZED: &'static str = "Finalized";

    pub fn from_draft(draft: &EditDraft) -> Self {
        Self {
            subject_id: draft.subject_id,
            professor_id: draft.professor_id,
            room_id: draft.room_id,
            day_of_week: draft.day_of_week,
            start_time: draft.start_time.clone(),
            end_time: draft.end_time.clone(),
            status: Self::STATUS_FINALIZED.to_string(),
        }
    }
}

/// Acknowledgment body of a schedule update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateReceipt {
    #[serde(default)]
    pub message: Option<String>,
}
