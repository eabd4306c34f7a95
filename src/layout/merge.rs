//! Interval merging for the week grid.
//!
//! Turns the raw per-day time blocks of one fetch into non-overlapping
//! render events: partition by day, sort, then fold strictly-overlapping
//! neighbours together. Touching endpoints do not merge (half-open
//! interval semantics), so back-to-back classes stay separate rows.

use std::collections::HashMap;

use crate::models::render::{DayLayout, OverlapGroup, RenderEvent, WeekLayout};
use crate::models::schedule::{ClassOccurrence, DayOfWeek, TimeBlock};
use crate::utils::time::TimeParser;

/// Compute the full week layout for one fetch's worth of blocks.
///
/// Blocks on days outside `display_days` are ignored. Every configured day
/// gets an entry, empty days included. Output is rebuilt from scratch; the
/// synthetic event ids restart from zero each pass.
pub fn compute_week_layout(
    blocks: Vec<TimeBlock>,
    display_days: &[DayOfWeek],
    parser: &mut TimeParser,
) -> WeekLayout {
    let mut by_day: HashMap<DayOfWeek, Vec<Accumulator>> = HashMap::new();

    for block in blocks {
        let start = parser.to_minutes(&block.start_time);
        let end = parser.to_minutes(&block.end_time);
        by_day
            .entry(block.day_of_week)
            .or_default()
            .push(Accumulator {
                start,
                end,
                count: block.count,
                label: block.label.clone(),
                classes: block.classes.clone(),
                raw: block,
            });
    }

    let mut week = WeekLayout::default();
    let mut next_id = 0usize;
    for &day in display_days {
        let pending = by_day.remove(&day).unwrap_or_default();
        week.days.insert(day, layout_day(day, pending, &mut next_id));
    }
    week
}

/// One merged interval being built up during the fold.
struct Accumulator {
    start: u32,
    end: u32,
    count: u32,
    label: Option<String>,
    classes: Vec<ClassOccurrence>,
    raw: TimeBlock,
}

impl Accumulator {
    /// Fold a later-starting interval into this one.
    fn absorb(&mut self, next: Accumulator) {
        self.end = self.end.max(next.end);
        self.count += next.count;
        self.classes.extend(next.classes);
    }

    fn into_event(self, day: DayOfWeek, id_seq: &mut usize) -> RenderEvent {
        let id = format!("{}-{}-{}-{}", day, self.start, self.end, *id_seq);
        *id_seq += 1;

        let label = self
            .label
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| format!("{} classes", self.count));

        RenderEvent {
            id,
            label,
            start: self.start,
            end: self.end,
            count: self.count,
            col: 0,
            group_cols: 1,
            classes: self.classes,
            raw: self.raw,
        }
    }
}

fn layout_day(day: DayOfWeek, mut pending: Vec<Accumulator>, id_seq: &mut usize) -> DayLayout {
    pending.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

    let mut merged: Vec<Accumulator> = Vec::new();
    let mut iter = pending.into_iter();
    let Some(mut current) = iter.next() else {
        return DayLayout::default();
    };

    for next in iter {
        // Strict overlap only: a block starting exactly at current.end
        // begins a new row.
        if next.start < current.end {
            current.absorb(next);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    let events: Vec<RenderEvent> = merged
        .into_iter()
        .filter(|acc| {
            if acc.start >= acc.end {
                log::warn!(
                    "Dropping degenerate {} block ({} >= {}) from layout",
                    day,
                    acc.start,
                    acc.end
                );
                return false;
            }
            true
        })
        .map(|acc| acc.into_event(day, id_seq))
        .collect();

    // Single-column layout: every merged interval is its own group.
    let groups = (0..events.len())
        .map(|index| OverlapGroup {
            members: vec![index],
        })
        .collect();

    DayLayout { events, groups }
}
