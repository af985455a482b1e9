use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    history::HistoryRecord,
    models::WatchEvent,
    services::{providers::CatalogProvider, resolver::ContentResolver},
};

/// A record that could not be turned into a watch event, with the facts a
/// diagnostic needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub name: String,
    pub imdb_id: String,
    pub reason: String,
}

/// Result of one builder pass over the history log
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub events: Vec<WatchEvent>,
    pub skipped: Vec<SkippedRecord>,
}

/// Turns history records into watch events by resolving each record's content.
///
/// Unresolvable records (no catalog entry, a failed catalog call, a response
/// missing required fields) are skipped with a diagnostic; they never abort
/// the run. Malformed dates or ratings in the log itself do abort, since the
/// log is local input the user can fix.
pub async fn build_events<P: CatalogProvider>(
    resolver: &ContentResolver<P>,
    records: &[HistoryRecord],
) -> AppResult<BuildOutcome> {
    let mut outcome = BuildOutcome::default();

    for record in records {
        let resolved = resolver.resolve(record.media_kind(), &record.imdb_id).await;
        let content = match resolved {
            Ok(Some(content)) => content,
            Ok(None) => {
                skip(&mut outcome, record, "no catalog entry".to_string());
                continue;
            }
            Err(err) if err.is_resolution_scoped() => {
                skip(&mut outcome, record, err.to_string());
                continue;
            }
            // Transport-level failures (connection refused, invalid body)
            // abort the whole run; the catalog itself is unreachable.
            Err(err) => return Err(err),
        };

        let watched_on = parse_watch_date(&record.date).map_err(|_| {
            AppError::InvalidRecord(format!(
                "unparseable date {:?} for {}",
                record.date, record.name
            ))
        })?;
        let rating = record.rating.trim().parse::<f64>().map_err(|_| {
            AppError::InvalidRecord(format!(
                "unparseable rating {:?} for {}",
                record.rating, record.name
            ))
        })?;

        outcome.events.push(WatchEvent {
            content,
            platform: record.platform.clone(),
            watched_on,
            rating,
        });
    }

    tracing::info!(
        events = outcome.events.len(),
        skipped = outcome.skipped.len(),
        "Watch events built"
    );

    Ok(outcome)
}

fn skip(outcome: &mut BuildOutcome, record: &HistoryRecord, reason: String) {
    tracing::warn!(
        name = %record.name,
        imdb_id = %record.imdb_id,
        reason = %reason,
        "Skipping unresolvable record"
    );
    outcome.skipped.push(SkippedRecord {
        name: record.name.clone(),
        imdb_id: record.imdb_id.clone(),
        reason,
    });
}

/// Parses the log's `MM/DD/YYYY` date column
fn parse_watch_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
}
