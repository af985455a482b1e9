/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// The catalog answered with something other than the documented success
    /// code. Carries the full exchange for debugging; resolution of the
    /// current record stops here and the caller decides skip vs abort.
    #[error("catalog request to {url} failed: expected status {expected}, got {actual}: {body}")]
    CatalogRequestFailed {
        url: String,
        expected: u16,
        actual: u16,
        body: String,
    },

    /// A catalog response parsed fine but is missing a field the pipeline
    /// requires (absent release date, empty episode runtime list, ...).
    /// Fails the single content resolution, never the whole run.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    /// A watch-history row that cannot be parsed (bad date, bad rating).
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("history file error: {0}")]
    History(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for failures scoped to a single content resolution, which the
    /// event builder turns into a per-record skip instead of aborting the run.
    pub fn is_resolution_scoped(&self) -> bool {
        matches!(
            self,
            AppError::CatalogRequestFailed { .. } | AppError::DataIntegrity(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_request_failed_display() {
        let err = AppError::CatalogRequestFailed {
            url: "https://api.example.com/find/tt123".to_string(),
            expected: 200,
            actual: 404,
            body: "{\"status_message\":\"not found\"}".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("expected status 200"));
        assert!(msg.contains("got 404"));
        assert!(msg.contains("https://api.example.com/find/tt123"));
    }

    #[test]
    fn test_resolution_scoped_classification() {
        let catalog = AppError::CatalogRequestFailed {
            url: String::new(),
            expected: 200,
            actual: 500,
            body: String::new(),
        };
        assert!(catalog.is_resolution_scoped());
        assert!(AppError::DataIntegrity("empty runtime list".into()).is_resolution_scoped());
        assert!(!AppError::InvalidRecord("bad rating".into()).is_resolution_scoped());
    }
}
