//! Central calendar state.
//!
//! `ScheduleBoard` owns the raw blocks of the last fetch, the visible
//! window and the merged week layout, and recomputes them through explicit
//! calls only: data replaced, container resized. The display-day list and
//! the time-parse cache are injected/owned state, never module globals.

use crate::layout::geometry::GridMetrics;
use crate::layout::merge::compute_week_layout;
use crate::layout::observe::SizeHandle;
use crate::layout::range::fit_window;
use crate::models::render::{DayLayout, ViewWindow, WeekLayout};
use crate::models::schedule::{DayOfWeek, TimeBlock, WEEK_DISPLAY_DAYS};
use crate::utils::time::TimeParser;

/// Height assumed until the host reports a real measurement.
const DEFAULT_CONTAINER_HEIGHT: f32 = 600.0;

pub struct ScheduleBoard {
    display_days: Vec<DayOfWeek>,
    parser: TimeParser,
    raw_blocks: Vec<TimeBlock>,
    window: ViewWindow,
    layout: WeekLayout,
    container_height: f32,
}

impl ScheduleBoard {
    pub fn new(display_days: Vec<DayOfWeek>) -> Self {
        let mut board = Self {
            display_days,
            parser: TimeParser::new(),
            raw_blocks: Vec::new(),
            window: ViewWindow::default(),
            layout: WeekLayout::default(),
            container_height: DEFAULT_CONTAINER_HEIGHT,
        };
        // Seed empty layouts so every display day resolves from the start.
        board.recompute();
        board
    }

    pub fn display_days(&self) -> &[DayOfWeek] {
        &self.display_days
    }

    pub fn window(&self) -> ViewWindow {
        self.window
    }

    pub fn week(&self) -> &WeekLayout {
        &self.layout
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&DayLayout> {
        self.layout.day(day)
    }

    pub fn raw_blocks(&self) -> &[TimeBlock] {
        &self.raw_blocks
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    /// Replace the raw data set wholesale and rebuild window and layout,
    /// in that order. Never merges into the previous set.
    pub fn replace_raw_data(&mut self, blocks: Vec<TimeBlock>) {
        self.raw_blocks = blocks;
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.replace_raw_data(Vec::new());
    }

    /// Record an observed container height. Zero and negative measurements
    /// are ignored; geometry is derived on demand so nothing else changes.
    pub fn set_container_height(&mut self, height: f32) {
        if height > 0.0 {
            self.container_height = height;
        }
    }

    /// Drain the latest height from a size handle, if one arrived.
    pub fn apply_observed_size(&mut self, handle: &SizeHandle) {
        if let Some(height) = handle.take() {
            self.set_container_height(height);
        }
    }

    /// Sizing for the current window and container height.
    pub fn metrics(&self) -> GridMetrics {
        GridMetrics::new(self.window, self.container_height)
    }

    fn recompute(&mut self) {
        fit_window(&mut self.window, &self.raw_blocks, &mut self.parser);
        self.layout = compute_week_layout(
            self.raw_blocks.clone(),
            &self.display_days,
            &mut self.parser,
        );
        log::debug!(
            "Recomputed layout: {} events across {} days, window {}-{}",
            self.layout.total_events(),
            self.display_days.len(),
            self.window.start_minute,
            self.window.end_minute
        );
    }
}

impl Default for ScheduleBoard {
    fn default() -> Self {
        Self::new(WEEK_DISPLAY_DAYS.to_vec())
    }
}
