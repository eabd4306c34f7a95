// Property-based tests for the layout engine
// Random per-day block sets must always merge into non-overlapping rows
// that cover exactly the input's time union, inside a bounded window.

use proptest::prelude::*;

use class_calendar::layout::geometry::{GridMetrics, MIN_EVENT_HEIGHT, MIN_HOUR_HEIGHT};
use class_calendar::layout::merge::compute_week_layout;
use class_calendar::layout::range::fit_window;
use class_calendar::models::render::ViewWindow;
use class_calendar::models::schedule::{DayOfWeek, TimeBlock, WEEK_DISPLAY_DAYS};
use class_calendar::utils::time::{minutes_to_time, TimeParser};

fn minute_block(start: u32, duration: u32) -> TimeBlock {
    TimeBlock {
        day_of_week: DayOfWeek::Monday,
        start_time: minutes_to_time(start),
        end_time: minutes_to_time(start + duration),
        count: 1,
        label: None,
        classes: vec![],
    }
}

/// Random Monday blocks with positive duration inside the day.
fn monday_blocks() -> impl Strategy<Value = Vec<TimeBlock>> {
    prop::collection::vec((0u32..1380, 5u32..=120), 1..40)
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(start, duration)| minute_block(start, duration.min(1439 - start).max(1)))
                .collect()
        })
}

/// Minute-resolution occupancy of a set of intervals.
fn occupancy(intervals: &[(u32, u32)]) -> Vec<bool> {
    let mut minutes = vec![false; 1440];
    for &(start, end) in intervals {
        for slot in minutes.iter_mut().take(end as usize).skip(start as usize) {
            *slot = true;
        }
    }
    minutes
}

proptest! {
    /// Merged events never overlap and stay ordered.
    #[test]
    fn prop_merged_events_are_disjoint_and_sorted(blocks in monday_blocks()) {
        let mut parser = TimeParser::new();
        let week = compute_week_layout(blocks, &WEEK_DISPLAY_DAYS, &mut parser);
        let monday = week.day(DayOfWeek::Monday).unwrap();

        for event in &monday.events {
            prop_assert!(event.start < event.end);
        }
        for pair in monday.events.windows(2) {
            // Half-open semantics: the next row may start exactly at the
            // previous row's end, never before.
            prop_assert!(pair[1].start >= pair[0].end);
        }
    }

    /// Merging loses no time and invents none: the union is preserved.
    #[test]
    fn prop_merge_preserves_time_union(blocks in monday_blocks()) {
        let mut parser = TimeParser::new();
        let input: Vec<(u32, u32)> = blocks
            .iter()
            .map(|block| {
                (
                    parser.to_minutes(&block.start_time),
                    parser.to_minutes(&block.end_time),
                )
            })
            .collect();

        let week = compute_week_layout(blocks, &WEEK_DISPLAY_DAYS, &mut parser);
        let merged: Vec<(u32, u32)> = week
            .day(DayOfWeek::Monday)
            .unwrap()
            .events
            .iter()
            .map(|event| (event.start, event.end))
            .collect();

        prop_assert_eq!(occupancy(&input), occupancy(&merged));
    }

    /// Total class count survives the merge.
    #[test]
    fn prop_merge_preserves_counts(blocks in monday_blocks()) {
        let input_count: u32 = blocks.iter().map(|block| block.count).sum();

        let mut parser = TimeParser::new();
        let week = compute_week_layout(blocks, &WEEK_DISPLAY_DAYS, &mut parser);
        let merged_count: u32 = week
            .day(DayOfWeek::Monday)
            .unwrap()
            .events
            .iter()
            .map(|event| event.count)
            .sum();

        prop_assert_eq!(input_count, merged_count);
    }

    /// A second pass over merged output is a fixed point.
    #[test]
    fn prop_merge_is_idempotent(blocks in monday_blocks()) {
        let mut parser = TimeParser::new();
        let first = compute_week_layout(blocks, &WEEK_DISPLAY_DAYS, &mut parser);
        let monday = first.day(DayOfWeek::Monday).unwrap();

        let refed: Vec<TimeBlock> = monday
            .events
            .iter()
            .map(|event| TimeBlock {
                day_of_week: DayOfWeek::Monday,
                start_time: minutes_to_time(event.start),
                end_time: minutes_to_time(event.end),
                count: event.count,
                label: None,
                classes: vec![],
            })
            .collect();

        let second = compute_week_layout(refed, &WEEK_DISPLAY_DAYS, &mut parser);
        let monday_again = second.day(DayOfWeek::Monday).unwrap();

        let intervals = |events: &[class_calendar::models::render::RenderEvent]| {
            events.iter().map(|e| (e.start, e.end, e.count)).collect::<Vec<_>>()
        };
        prop_assert_eq!(intervals(&monday.events), intervals(&monday_again.events));
    }

    /// The fitted window always lands inside the institutional bounds and
    /// contains whatever part of the data those bounds admit.
    #[test]
    fn prop_window_bounds_hold_for_any_input(blocks in monday_blocks()) {
        let mut parser = TimeParser::new();
        let min_start = blocks
            .iter()
            .map(|b| parser.to_minutes(&b.start_time))
            .min()
            .unwrap();
        let max_end = blocks
            .iter()
            .map(|b| parser.to_minutes(&b.end_time))
            .max()
            .unwrap();

        let mut window = ViewWindow::default();
        fit_window(&mut window, &blocks, &mut parser);

        prop_assert!(window.satisfies_bounds());
        if min_start >= ViewWindow::FLOOR_MINUTE {
            prop_assert!(window.start_minute <= min_start);
        }
        if max_end <= ViewWindow::CEILING_MINUTE {
            prop_assert!(window.end_minute >= max_end);
        }
    }

    /// Geometry floors hold for any container height and any event.
    #[test]
    fn prop_geometry_floors_hold(
        container in 0.0f32..3000.0,
        blocks in monday_blocks(),
    ) {
        let mut parser = TimeParser::new();
        let mut window = ViewWindow::default();
        fit_window(&mut window, &blocks, &mut parser);

        let week = compute_week_layout(blocks, &WEEK_DISPLAY_DAYS, &mut parser);
        let metrics = GridMetrics::new(window, container);
        prop_assert!(metrics.hour_height() >= MIN_HOUR_HEIGHT);

        for event in &week.day(DayOfWeek::Monday).unwrap().events {
            let geometry = metrics.event_geometry(event);
            prop_assert!(geometry.height >= MIN_EVENT_HEIGHT);
        }
    }
}
