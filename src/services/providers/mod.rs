/// Content catalog abstraction
///
/// The resolver only ever talks to the catalog through this trait, which keeps
/// the HTTP transport swappable and lets tests drive resolution from canned
/// responses.
use crate::{
    error::AppResult,
    models::{EpisodeDetails, FindResponse, MovieDetails, TvDetails},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// The four catalog lookups the pipeline needs
///
/// Every operation either returns a parsed response body or fails fast with
/// `AppError::CatalogRequestFailed`; there is no retry and no partial result.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Maps an external (IMDB) identifier to catalog entries
    async fn find_by_external_id(&self, imdb_id: &str) -> AppResult<FindResponse>;

    /// Full movie metadata with embedded credits, one round trip
    async fn movie_details(&self, movie_id: u64) -> AppResult<MovieDetails>;

    /// Full series metadata with embedded credits, one round trip
    async fn tv_details(&self, show_id: u64) -> AppResult<TvDetails>;

    /// Full episode metadata with embedded credits, one round trip
    async fn episode_details(
        &self,
        show_id: u64,
        season: u32,
        episode: u32,
    ) -> AppResult<EpisodeDetails>;
}
