//! Console rendering of the computed reports
//!
//! Presentation only; everything here consumes the engine's (label, value)
//! tuples and how they get printed is outside the core contract.

use std::fmt::Display;

use crate::models::WatchEvent;
use crate::report::{self, ReportConfig};

fn print_ranked<V: Display>(heading: &str, entries: &[(String, V)]) {
    println!("{}", heading);
    for (label, value) in entries {
        println!("{}: {}", label, value);
    }
    println!();
}

/// Prints the full report sequence in its fixed order
pub fn print_year_in_review(events: &[WatchEvent], config: &ReportConfig) {
    print_ranked(
        "Most watched genres",
        &report::sum_ranking(events, report::genres, config.top_n),
    );
    print_ranked(
        "Best rated genres",
        &report::average_ranking(events, report::genres, config.min_sample, config.top_n),
    );

    let totals = report::movie_series_totals(events);
    println!(
        "Amount of movies watched: {} ({} minutes)",
        totals.movies.count, totals.movies.minutes
    );
    println!(
        "Amount of series watched: {} ({} minutes)",
        totals.series.count, totals.series.minutes
    );
    println!();

    print_ranked("Platform usage", &report::platform_usage(events));

    print_ranked(
        "Most watched actors",
        &report::sum_ranking(events, report::actors, config.top_n),
    );
    print_ranked(
        "Best rated actors",
        &report::average_ranking(events, report::actors, config.min_sample, config.top_n),
    );

    print_ranked(
        "Most watched production companies",
        &report::sum_ranking(events, report::production_companies, config.top_n),
    );
    print_ranked(
        "Best rated production companies",
        &report::average_ranking(
            events,
            report::production_companies,
            config.min_sample,
            config.top_n,
        ),
    );

    print_ranked(
        "Most watched directors",
        &report::sum_ranking(events, report::directors, config.top_n),
    );
    print_ranked(
        "Best rated directors",
        &report::average_ranking(
            events,
            report::directors,
            config.min_sample_directors,
            config.top_n,
        ),
    );

    print_ranked("Activity by month", &report::activity_by_month(events));
    print_ranked("Activity by weekday", &report::activity_by_weekday(events));

    if let Some((day, minutes)) = report::busiest_day(events) {
        println!(
            "Day with the most activity: {} ({} minutes)",
            day.format("%m/%d"),
            minutes
        );
    }
}
