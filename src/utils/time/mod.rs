// Time-of-day utilities
// HH:MM string <-> minute-of-day conversions shared by layout and services

use std::collections::HashMap;

use chrono::{NaiveTime, Timelike};

/// Parses "HH:MM" clock strings into minutes from midnight, memoizing results.
///
/// A schedule payload repeats the same handful of timestamps across hundreds
/// of blocks, so parses are cached by input string. The cache is owned by the
/// parser instance, bounded, and cleared wholesale when full.
pub struct TimeParser {
    cache: HashMap<String, u32>,
    max_entries: usize,
}

impl TimeParser {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            cache: HashMap::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Convert a clock string to minutes from midnight.
    ///
    /// Accepts "HH:MM" and "HH:MM:SS". Empty or unparseable input degrades
    /// to 0 rather than failing, so a malformed block still renders.
    pub fn to_minutes(&mut self, time: &str) -> u32 {
        if time.is_empty() {
            return 0;
        }
        if let Some(&minutes) = self.cache.get(time) {
            return minutes;
        }

        let minutes = parse_minutes(time).unwrap_or_else(|| {
            log::warn!("Unparseable time string {:?}, treating as 00:00", time);
            0
        });

        if self.cache.len() >= self.max_entries {
            log::debug!("Time parse cache full ({} entries), clearing", self.cache.len());
            self.cache.clear();
        }
        self.cache.insert(time.to_string(), minutes);
        minutes
    }

    #[cfg(test)]
    fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

impl Default for TimeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Strict variant of [`TimeParser::to_minutes`]: `None` instead of 0 on
/// unparseable input. Used by model validation.
pub fn parse_minutes(time: &str) -> Option<u32> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()
        .map(|t| t.hour() * 60 + t.minute())
}

/// Convert minutes from midnight back to a zero-padded "HH:MM" string.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Format a start-end pair as "HH:MM - HH:MM" for drawer headers.
pub fn format_range(start: u32, end: u32) -> String {
    format!("{} - {}", minutes_to_time(start), minutes_to_time(end))
}

/// 12-hour axis label for a whole-hour minute mark, e.g. 420 -> "7:00 AM".
pub fn format_hour_label(minute: u32) -> String {
    let hour = minute / 60;
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = (hour + 11) % 12 + 1;
    format!("{}:00 {}", display_hour, suffix)
}
