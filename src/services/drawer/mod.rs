//! Drawer-mode resolution for calendar clicks.

use crate::models::render::RenderEvent;
use crate::models::schedule::DayOfWeek;
use crate::utils::time::format_range;

/// What the detail drawer shows for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerMode {
    /// One class meeting: open it straight into the edit form.
    EditSingle,
    /// One time slot holding several classes: list them.
    ListSingleTimeslot,
    /// A whole overlap group across time slots.
    MultiTimeslot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawerRequest {
    pub title: String,
    pub mode: DrawerMode,
}

impl DrawerRequest {
    pub fn for_event(event: &RenderEvent) -> Self {
        if event.is_single_class() {
            Self {
                title: format!("Edit — {}", event.classes[0].title),
                mode: DrawerMode::EditSingle,
            }
        } else {
            Self {
                title: format!(
                    "{} — {} classes",
                    format_range(event.start, event.end),
                    event.classes.len()
                ),
                mode: DrawerMode::ListSingleTimeslot,
            }
        }
    }

    /// `None` for an empty group; clicking a phantom summary opens nothing.
    pub fn for_group(day: DayOfWeek, events: &[RenderEvent]) -> Option<Self> {
        if events.is_empty() {
            return None;
        }

        let start = events.iter().map(|event| event.start).min().unwrap_or(0);
        let end = events.iter().map(|event| event.end).max().unwrap_or(0);

        Some(Self {
            title: format!("{} — {}", day, format_range(start, end)),
            mode: DrawerMode::MultiTimeslot,
        })
    }
}
