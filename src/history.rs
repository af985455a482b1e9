use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{
    error::AppResult,
    models::MediaKind,
};

/// One row of the watch-history log, exactly as exported: tab-delimited with
/// a single header row. All fields stay as strings here; parsing into dates
/// and ratings happens in the event builder where failures can be attributed
/// to a record.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HistoryRecord {
    /// `MM/DD/YYYY`
    #[serde(rename = "Date")]
    pub date: String,

    /// `Movie`, or anything else meaning a series episode
    #[serde(rename = "Movie or Series")]
    pub kind: String,

    /// Display name, used only for diagnostics
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Platform")]
    pub platform: String,

    /// Decimal personal rating
    #[serde(rename = "Rating")]
    pub rating: String,

    #[serde(rename = "IMDB ID")]
    pub imdb_id: String,
}

impl HistoryRecord {
    pub fn media_kind(&self) -> MediaKind {
        if self.kind == "Movie" {
            MediaKind::Movie
        } else {
            MediaKind::Episode
        }
    }
}

/// Reads history records from any tab-delimited source with a header row
pub fn read_history<R: Read>(reader: R) -> AppResult<Vec<HistoryRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        records.push(row?);
    }

    tracing::info!(records = records.len(), "Loaded watch-history log");
    Ok(records)
}

/// Loads the watch-history log from a file path
pub fn load_history(path: impl AsRef<Path>) -> AppResult<Vec<HistoryRecord>> {
    let file = std::fs::File::open(path.as_ref())?;
    read_history(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Date\tMovie or Series\tName\tPlatform\tRating\tIMDB ID\n\
        03/02/2020\tMovie\tInception\tNetflix\t9.5\ttt1375666\n\
        03/03/2020\tSeries\tOzymandias\tPlex\t10\ttt2301451\n";

    #[test]
    fn test_read_history_parses_rows() {
        let records = read_history(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            HistoryRecord {
                date: "03/02/2020".to_string(),
                kind: "Movie".to_string(),
                name: "Inception".to_string(),
                platform: "Netflix".to_string(),
                rating: "9.5".to_string(),
                imdb_id: "tt1375666".to_string(),
            }
        );
    }

    #[test]
    fn test_media_kind_dispatch() {
        let records = read_history(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records[0].media_kind(), MediaKind::Movie);
        // Anything that is not exactly "Movie" is treated as an episode
        assert_eq!(records[1].media_kind(), MediaKind::Episode);
    }

    #[test]
    fn test_read_history_empty_after_header() {
        let records =
            read_history("Date\tMovie or Series\tName\tPlatform\tRating\tIMDB ID\n".as_bytes())
                .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_history_rejects_malformed_row() {
        let bad = "Date\tMovie or Series\tName\tPlatform\tRating\tIMDB ID\n03/02/2020\tMovie\n";
        assert!(read_history(bad.as_bytes()).is_err());
    }
}
