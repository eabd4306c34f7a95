//! Pixel geometry for the week grid.
//!
//! Maps merged events onto a variable-height container: vertical position
//! from minute-of-day, horizontal position from overlap-group columns.
//! Pure functions of the view window and the last observed container
//! height; nothing here holds state across recomputations.

use serde::Serialize;

use crate::models::render::{RenderEvent, ViewWindow};

/// Grid row granularity.
pub const SLOT_MINUTES: u32 = 30;
/// Floor that keeps short windows legible.
pub const MIN_HOUR_HEIGHT: f32 = 40.0;
/// Floor that keeps degenerate/clamped events clickable.
pub const MIN_EVENT_HEIGHT: f32 = 6.0;
/// Horizontal inset reserved between event and column edge.
pub const EVENT_GUTTER_PX: f32 = 6.0;

/// Rendered-size thresholds below which an event card switches to its
/// compact presentation.
pub const COMPACT_HEIGHT_PX: f32 = 56.0;
pub const COMPACT_WIDTH_PX: f32 = 100.0;

/// Sizing derived from the view window and the observed container height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    window: ViewWindow,
    hour_height: f32,
}

impl GridMetrics {
    pub fn new(window: ViewWindow, container_height: f32) -> Self {
        let hours = (window.minutes() as f32 / 60.0).max(1.0);
        let hour_height = (container_height / hours).max(MIN_HOUR_HEIGHT);
        Self {
            window,
            hour_height,
        }
    }

    pub fn window(&self) -> ViewWindow {
        self.window
    }

    pub fn hour_height(&self) -> f32 {
        self.hour_height
    }

    pub fn slot_height(&self) -> f32 {
        self.hour_height * (SLOT_MINUTES as f32 / 60.0)
    }

    pub fn total_grid_height(&self) -> f32 {
        self.window.minutes() as f32 / 60.0 * self.hour_height
    }

    /// Every slot-spaced minute mark from window start to end, end excluded.
    pub fn time_slots(&self) -> Vec<u32> {
        (self.window.start_minute..self.window.end_minute)
            .step_by(SLOT_MINUTES as usize)
            .collect()
    }

    /// Pixel geometry for one event, clamped to the visible window.
    pub fn event_geometry(&self, event: &RenderEvent) -> EventGeometry {
        let start = self.window.start_minute;
        let end = self.window.end_minute;

        let visible_start = event.start.max(start) as f32 - start as f32;
        let visible_end = event.end.min(end) as f32 - start as f32;

        let top = visible_start / 60.0 * self.hour_height;
        let height = ((visible_end - visible_start) / 60.0 * self.hour_height).max(MIN_EVENT_HEIGHT);

        let width_percent = 100.0 / event.group_cols.max(1) as f32;
        let left_percent = event.col as f32 * width_percent;

        EventGeometry {
            top,
            height,
            left_percent,
            width_percent,
            gutter_px: EVENT_GUTTER_PX,
        }
    }
}

/// Positioned box for one event, in container pixels and column percents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventGeometry {
    pub top: f32,
    pub height: f32,
    pub left_percent: f32,
    pub width_percent: f32,
    pub gutter_px: f32,
}

impl EventGeometry {
    /// Pixel width once the percent share of the day column and the gutter
    /// are applied.
    pub fn rendered_width(&self, column_width_px: f32) -> f32 {
        (column_width_px * self.width_percent / 100.0 - self.gutter_px).max(0.0)
    }

    /// Too small for the full card layout.
    pub fn is_compact(&self, column_width_px: f32) -> bool {
        self.height < COMPACT_HEIGHT_PX || self.rendered_width(column_width_px) < COMPACT_WIDTH_PX
    }

    /// CSS width expression for hosts that render through a style string.
    pub fn css_width(&self) -> String {
        format!("calc({}% - {}px)", self.width_percent, self.gutter_px)
    }
}
