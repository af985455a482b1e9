//! Aggregation engine
//!
//! Every report here is a pure function over the fully-built event collection:
//! local reduction state in, immutable ranked tuples out. Reports are
//! independent of each other and can run in any order.
//!
//! Tie-breaks are explicit everywhere the ranking could otherwise depend on
//! map iteration order: equal values rank lexicographically by label, and the
//! busiest day prefers the earliest date.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::WatchEvent;

pub mod render;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Tuning knobs for the ranked reports
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    /// How many entries each ranked report keeps
    pub top_n: usize,
    /// Minimum occurrence count before a key may appear in an average-ranked
    /// report; suppresses one-hit wonders with perfect ratings
    pub min_sample: usize,
    /// Directors appear in far fewer events than actors or genres, so their
    /// suppression threshold is lower
    pub min_sample_directors: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 20,
            min_sample: 5,
            min_sample_directors: 2,
        }
    }
}

/// Selects the multi-valued field a ranking runs over
pub type FieldSelector = fn(&WatchEvent) -> &[String];

pub fn genres(event: &WatchEvent) -> &[String] {
    &event.content.genres
}

pub fn actors(event: &WatchEvent) -> &[String] {
    &event.content.actors
}

pub fn directors(event: &WatchEvent) -> &[String] {
    &event.content.directors
}

pub fn production_companies(event: &WatchEvent) -> &[String] {
    &event.content.production_companies
}

/// Top-N field values by total watched minutes, descending
///
/// An event with an empty field contributes nothing, which is expected.
pub fn sum_ranking(
    events: &[WatchEvent],
    field: FieldSelector,
    top_n: usize,
) -> Vec<(String, u64)> {
    let mut minutes: HashMap<String, u64> = HashMap::new();
    for event in events {
        for value in field(event) {
            *minutes.entry(value.clone()).or_insert(0) +=
                u64::from(event.content.runtime_minutes);
        }
    }

    let mut ranked = rank_descending(minutes);
    ranked.truncate(top_n);
    ranked
}

/// Top-N field values by mean personal rating, descending
///
/// Values observed fewer than `min_sample` times are excluded entirely,
/// no matter how high their raw average is.
pub fn average_ranking(
    events: &[WatchEvent],
    field: FieldSelector,
    min_sample: usize,
    top_n: usize,
) -> Vec<(String, f64)> {
    let mut samples: HashMap<String, (f64, usize)> = HashMap::new();
    for event in events {
        for value in field(event) {
            let entry = samples.entry(value.clone()).or_insert((0.0, 0));
            entry.0 += event.rating;
            entry.1 += 1;
        }
    }

    let means: HashMap<String, f64> = samples
        .into_iter()
        .filter(|(_, (_, count))| *count >= min_sample)
        .map(|(value, (sum, count))| (value, sum / count as f64))
        .collect();

    let mut ranked = rank_descending(means);
    ranked.truncate(top_n);
    ranked
}

/// Count and watched minutes for one side of the movie/series split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketTotal {
    pub count: usize,
    pub minutes: u64,
}

/// Movies vs series episodes, counts and minutes; always covers the whole
/// collection, no truncation or suppression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaTotals {
    pub movies: BucketTotal,
    pub series: BucketTotal,
}

pub fn movie_series_totals(events: &[WatchEvent]) -> MediaTotals {
    let mut totals = MediaTotals::default();
    for event in events {
        let bucket = if event.content.kind.is_movie() {
            &mut totals.movies
        } else {
            &mut totals.series
        };
        bucket.count += 1;
        bucket.minutes += u64::from(event.content.runtime_minutes);
    }
    totals
}

/// Watched minutes per platform; every platform reported, sorted by minutes
pub fn platform_usage(events: &[WatchEvent]) -> Vec<(String, u64)> {
    let mut minutes: HashMap<String, u64> = HashMap::new();
    for event in events {
        *minutes.entry(event.platform.clone()).or_insert(0) +=
            u64::from(event.content.runtime_minutes);
    }
    rank_descending(minutes)
}

/// Watched minutes per calendar month; always exactly 12 buckets in calendar
/// order, zeros included.
pub fn activity_by_month(events: &[WatchEvent]) -> Vec<(String, u64)> {
    let mut buckets = [0u64; 12];
    for event in events {
        buckets[event.watched_on.month0() as usize] += u64::from(event.content.runtime_minutes);
    }
    MONTH_NAMES
        .iter()
        .zip(buckets)
        .map(|(name, minutes)| (name.to_string(), minutes))
        .collect()
}

/// Watched minutes per weekday; always exactly 7 buckets, Monday first,
/// zeros included.
pub fn activity_by_weekday(events: &[WatchEvent]) -> Vec<(String, u64)> {
    let mut buckets = [0u64; 7];
    for event in events {
        buckets[event.watched_on.weekday().num_days_from_monday() as usize] +=
            u64::from(event.content.runtime_minutes);
    }
    WEEKDAY_NAMES
        .iter()
        .zip(buckets)
        .map(|(name, minutes)| (name.to_string(), minutes))
        .collect()
}

/// The single date with the most watched minutes; ties go to the earliest
/// date. `None` for an empty collection.
pub fn busiest_day(events: &[WatchEvent]) -> Option<(NaiveDate, u64)> {
    let mut minutes: HashMap<NaiveDate, u64> = HashMap::new();
    for event in events {
        *minutes.entry(event.watched_on).or_insert(0) +=
            u64::from(event.content.runtime_minutes);
    }
    minutes
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
}

/// Sorts map entries by value descending, then label ascending
fn rank_descending<V: PartialOrd>(map: HashMap<String, V>) -> Vec<(String, V)> {
    let mut entries: Vec<(String, V)> = map.into_iter().collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    entries
}
