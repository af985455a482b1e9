use chrono::NaiveDate;

/// Which catalog shape a history row refers to, taken from the
/// "Movie or Series" column before any catalog lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Episode,
}

/// Variant tag for resolved content
///
/// The episode variant keeps the coordinates that were needed to re-query the
/// catalog during resolution; they also identify the episode unambiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Movie,
    Episode {
        show_id: u64,
        season: u32,
        episode: u32,
    },
}

impl ContentKind {
    pub fn is_movie(&self) -> bool {
        matches!(self, ContentKind::Movie)
    }
}

/// Enriched metadata for one piece of watched content, fully populated by the
/// resolver. Unresolvable external ids never produce a `Content`; the resolver
/// returns `None` instead, so every value of this type is usable for
/// aggregation. Constructed once, immutable, owned by its `WatchEvent`.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    /// The catalog's own id for this movie or episode
    pub catalog_id: u64,
    pub kind: ContentKind,
    pub title: String,
    pub genres: Vec<String>,
    /// First entries of the catalog's cast list, in catalog order, capped
    pub actors: Vec<String>,
    /// Crew entries with the "Director" job, in catalog order, capped
    pub directors: Vec<String>,
    pub production_companies: Vec<String>,
    /// Movie release date, or the episode's own air date
    pub release_date: NaiveDate,
    pub runtime_minutes: u32,
}

/// One historical instance of watching a piece of content
#[derive(Debug, Clone, PartialEq)]
pub struct WatchEvent {
    pub content: Content,
    pub platform: String,
    pub watched_on: NaiveDate,
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_is_movie() {
        assert!(ContentKind::Movie.is_movie());
        assert!(!ContentKind::Episode {
            show_id: 1396,
            season: 5,
            episode: 14
        }
        .is_movie());
    }
}
