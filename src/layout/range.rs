//! Visible day-window estimation.
//!
//! Recomputed whenever the raw data set is replaced: the window grows to
//! contain the data rounded to whole hours, but never escapes the
//! institutional 06:00-22:00 bounds.

use crate::models::render::ViewWindow;
use crate::models::schedule::TimeBlock;
use crate::utils::time::TimeParser;

/// Fit the window around the given blocks.
///
/// An empty set leaves the window untouched (stale window preserved rather
/// than collapsed). Data entirely outside the institutional bounds would
/// invert the clamped window, so the nearer bound is nudged until
/// `start < end` holds again; geometry then clamps such data out visually.
pub fn fit_window(window: &mut ViewWindow, blocks: &[TimeBlock], parser: &mut TimeParser) {
    if blocks.is_empty() {
        return;
    }

    let mut min_start = u32::MAX;
    let mut max_end = 0u32;
    for block in blocks {
        min_start = min_start.min(parser.to_minutes(&block.start_time));
        max_end = max_end.max(parser.to_minutes(&block.end_time));
    }

    let mut start = (min_start / 60 * 60).max(ViewWindow::FLOOR_MINUTE);
    let mut end = (max_end.div_ceil(60) * 60).min(ViewWindow::CEILING_MINUTE);

    // Keep at least one visible hour inside the bounds.
    start = start.min(ViewWindow::CEILING_MINUTE - 60);
    end = end.max(start + 60);

    window.start_minute = start;
    window.end_minute = end;
}
