// Derived render models
// Everything the calendar grid actually draws: merged events, their overlap
// groups, and the visible minute window. Rebuilt wholesale on every layout
// pass, never patched in place.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::schedule::{ClassOccurrence, DayOfWeek, TimeBlock};

/// A merged, positioned unit ultimately drawn on the calendar.
///
/// Holds `start < end` for every event handed to a renderer; the merge pass
/// drops anything degenerate before it gets here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEvent {
    /// Synthetic render key, unique within one layout pass.
    pub id: String,
    pub label: String,
    /// Minutes from midnight.
    pub start: u32,
    pub end: u32,
    pub count: u32,
    /// 0-based column within the overlap group.
    pub col: usize,
    /// Column count of the overlap group this event belongs to.
    pub group_cols: usize,
    /// Concatenation of contributing occurrences, original order preserved.
    pub classes: Vec<ClassOccurrence>,
    /// The first contributing block, kept as a read-only back-reference.
    pub raw: TimeBlock,
}

impl RenderEvent {
    pub fn duration_minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// True when the event stands for exactly one class meeting.
    pub fn is_single_class(&self) -> bool {
        self.count == 1 && self.classes.len() == 1
    }
}

/// Events considered concurrent for column layout, as indices into the
/// owning day's event vector. Every event belongs to exactly one group per
/// pass; under single-column layout each group has exactly one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapGroup {
    pub members: Vec<usize>,
}

/// Layout output for one display day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayLayout {
    pub events: Vec<RenderEvent>,
    pub groups: Vec<OverlapGroup>,
}

impl DayLayout {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// The full week of positioned events, one entry per configured display day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekLayout {
    pub days: HashMap<DayOfWeek, DayLayout>,
}

impl WeekLayout {
    pub fn day(&self, day: DayOfWeek) -> Option<&DayLayout> {
        self.days.get(&day)
    }

    pub fn total_events(&self) -> usize {
        self.days.values().map(|d| d.events.len()).sum()
    }
}

/// The visible minute-of-day range for the whole calendar.
///
/// Invariant: `FLOOR_MINUTE <= start_minute < end_minute <= CEILING_MINUTE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewWindow {
    pub start_minute: u32,
    pub end_minute: u32,
}

impl ViewWindow {
    /// 06:00, the earliest the institutional day can start.
    pub const FLOOR_MINUTE: u32 = 6 * 60;
    /// 22:00, the latest it can end.
    pub const CEILING_MINUTE: u32 = 22 * 60;

    pub fn minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    pub fn satisfies_bounds(&self) -> bool {
        Self::FLOOR_MINUTE <= self.start_minute
            && self.start_minute < self.end_minute
            && self.end_minute <= Self::CEILING_MINUTE
    }
}

impl Default for ViewWindow {
    /// 07:00-18:00, shown until the first data set arrives.
    fn default() -> Self {
        Self {
            start_minute: 7 * 60,
            end_minute: 18 * 60,
        }
    }
}
