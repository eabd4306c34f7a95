// Class Calendar demo binary
// Fetches the active week once and prints the merged grid as text

use std::time::Instant;

use anyhow::Result;

use class_calendar::config::AppConfig;
use class_calendar::models::filters::ScheduleFilters;
use class_calendar::services::api::http::HttpScheduleApi;
use class_calendar::services::board::ScheduleBoard;
use class_calendar::services::fetch::{FetchCoordinator, FETCH_DEBOUNCE};
use class_calendar::utils::time::{format_range, minutes_to_time};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting class calendar");

    let config = AppConfig::load()?;
    let api = HttpScheduleApi::new(&config.base_url, config.request_timeout())?;

    let mut board = ScheduleBoard::default();
    let mut fetch = FetchCoordinator::new();

    // Schedule a fetch with the default (active year/semester) filters and
    // let the debounce window elapse before ticking it.
    fetch.apply_filters(ScheduleFilters::default(), Instant::now());
    std::thread::sleep(FETCH_DEBOUNCE);
    fetch.run_due(Instant::now(), &api, &mut board);

    if let Some(warning) = fetch.take_warning() {
        eprintln!("warning: {}", warning);
    }

    let window = board.window();
    let metrics = board.metrics();
    println!(
        "Week view {} - {} ({:.0}px/hour)",
        minutes_to_time(window.start_minute),
        minutes_to_time(window.end_minute),
        metrics.hour_height()
    );

    let days: Vec<_> = board.display_days().to_vec();
    for day in days {
        let Some(layout) = board.day(day) else {
            continue;
        };
        println!("{} ({} events)", day, layout.events.len());
        for event in &layout.events {
            println!(
                "  {}  {}",
                format_range(event.start, event.end),
                event.label
            );
        }
    }

    Ok(())
}
