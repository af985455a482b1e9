use serde::Deserialize;

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response from GET /find/{external_id}
///
/// Only the result lists the pipeline dispatches on are kept; TMDB also
/// returns person/tv/season results that we never consume.
#[derive(Debug, Clone, Deserialize)]
pub struct FindResponse {
    #[serde(default)]
    pub movie_results: Vec<MovieMatch>,
    #[serde(default)]
    pub tv_episode_results: Vec<EpisodeMatch>,
}

/// A movie entry in a find-by-external-id response
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MovieMatch {
    pub id: u64,
}

/// An episode entry in a find-by-external-id response
///
/// Carries the coordinates needed for the two follow-up lookups an episode
/// requires (series detail, episode detail).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EpisodeMatch {
    pub id: u64,
    pub show_id: u64,
    pub season_number: u32,
    pub episode_number: u32,
}

/// A `{"id": ..., "name": ...}` object; TMDB uses this shape for genres and
/// production companies alike.
#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    pub name: String,
}

/// Cast and crew credits, embedded via append_to_response=credits
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
}

/// Response from GET /movie/{id}?append_to_response=credits
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub original_title: String,
    #[serde(default)]
    pub genres: Vec<Named>,
    #[serde(default)]
    pub production_companies: Vec<Named>,
    /// ISO `YYYY-MM-DD`; TMDB serves an empty string for unknown dates
    #[serde(default)]
    pub release_date: String,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub credits: Credits,
}

/// Response from GET /tv/{id}?append_to_response=credits
#[derive(Debug, Clone, Deserialize)]
pub struct TvDetails {
    pub original_name: String,
    #[serde(default)]
    pub genres: Vec<Named>,
    #[serde(default)]
    pub production_companies: Vec<Named>,
    /// Declared per-episode runtimes; TMDB has no per-episode runtime field,
    /// so episodes average this list instead.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub credits: Credits,
}

/// Response from GET /tv/{id}/season/{s}/episode/{e}?append_to_response=credits
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeDetails {
    pub air_date: Option<String>,
    #[serde(default)]
    pub credits: Credits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_response_movie_deserialization() {
        let json = r#"{
            "movie_results": [{"id": 27205, "title": "Inception"}],
            "person_results": [],
            "tv_results": [],
            "tv_episode_results": [],
            "tv_season_results": []
        }"#;

        let response: FindResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.movie_results.len(), 1);
        assert_eq!(response.movie_results[0].id, 27205);
        assert!(response.tv_episode_results.is_empty());
    }

    #[test]
    fn test_find_response_episode_deserialization() {
        let json = r#"{
            "movie_results": [],
            "tv_episode_results": [{
                "id": 62085,
                "show_id": 1396,
                "season_number": 5,
                "episode_number": 14,
                "name": "Ozymandias"
            }]
        }"#;

        let response: FindResponse = serde_json::from_str(json).unwrap();
        let episode = &response.tv_episode_results[0];
        assert_eq!(episode.id, 62085);
        assert_eq!(episode.show_id, 1396);
        assert_eq!(episode.season_number, 5);
        assert_eq!(episode.episode_number, 14);
    }

    #[test]
    fn test_find_response_missing_lists_default_empty() {
        let response: FindResponse = serde_json::from_str("{}").unwrap();
        assert!(response.movie_results.is_empty());
        assert!(response.tv_episode_results.is_empty());
    }

    #[test]
    fn test_movie_details_deserialization() {
        let json = r#"{
            "original_title": "Inception",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "production_companies": [{"id": 923, "name": "Legendary Pictures"}],
            "release_date": "2010-07-15",
            "runtime": 148,
            "credits": {
                "cast": [{"name": "Leonardo DiCaprio"}, {"name": "Joseph Gordon-Levitt"}],
                "crew": [
                    {"name": "Christopher Nolan", "job": "Director"},
                    {"name": "Hans Zimmer", "job": "Original Music Composer"}
                ]
            }
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.original_title, "Inception");
        assert_eq!(details.genres[1].name, "Science Fiction");
        assert_eq!(details.release_date, "2010-07-15");
        assert_eq!(details.runtime, Some(148));
        assert_eq!(details.credits.cast.len(), 2);
        assert_eq!(details.credits.crew[0].job, "Director");
    }

    #[test]
    fn test_movie_details_null_runtime() {
        let json = r#"{"original_title": "Obscure Film", "release_date": "", "runtime": null}"#;
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.runtime, None);
        assert!(details.release_date.is_empty());
        assert!(details.credits.cast.is_empty());
    }

    #[test]
    fn test_tv_details_deserialization() {
        let json = r#"{
            "original_name": "Breaking Bad",
            "genres": [{"id": 18, "name": "Drama"}],
            "production_companies": [{"id": 11073, "name": "Sony Pictures Television"}],
            "episode_run_time": [45, 47],
            "credits": {"cast": [{"name": "Bryan Cranston"}], "crew": []}
        }"#;

        let details: TvDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.original_name, "Breaking Bad");
        assert_eq!(details.episode_run_time, vec![45, 47]);
        assert_eq!(details.credits.cast[0].name, "Bryan Cranston");
    }

    #[test]
    fn test_episode_details_deserialization() {
        let json = r#"{
            "air_date": "2013-09-15",
            "credits": {"crew": [{"name": "Rian Johnson", "job": "Director"}]}
        }"#;

        let details: EpisodeDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.air_date.as_deref(), Some("2013-09-15"));
        assert_eq!(details.credits.crew[0].name, "Rian Johnson");
    }
}
