/// TMDB API provider
///
/// Implements the catalog boundary against themoviedb.org v3:
/// 1. Id resolution: /find/{imdb_id}?external_source=imdb_id
/// 2. Details: /movie/{id}, /tv/{id}, /tv/{id}/season/{s}/episode/{e}
///
/// Every detail call uses append_to_response=credits so cast and crew arrive
/// in the same round trip.
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::{EpisodeDetails, FindResponse, MovieDetails, TvDetails},
    services::providers::CatalogProvider,
};

const STATUS_OK: u16 = 200;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Performs one GET against the catalog and parses the JSON body.
    ///
    /// Any status other than the documented success code is a hard failure
    /// carrying the requested URL, both status codes and the raw body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let requested_url = response.url().to_string();
        let status = response.status().as_u16();
        if status != STATUS_OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::CatalogRequestFailed {
                url: requested_url,
                expected: STATUS_OK,
                actual: status,
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn find_by_external_id(&self, imdb_id: &str) -> AppResult<FindResponse> {
        let path = format!("/find/{}", imdb_id);
        self.get_json(&path, &[("external_source", "imdb_id")])
            .await
    }

    async fn movie_details(&self, movie_id: u64) -> AppResult<MovieDetails> {
        let path = format!("/movie/{}", movie_id);
        self.get_json(&path, &[("append_to_response", "credits")])
            .await
    }

    async fn tv_details(&self, show_id: u64) -> AppResult<TvDetails> {
        let path = format!("/tv/{}", show_id);
        self.get_json(&path, &[("append_to_response", "credits")])
            .await
    }

    async fn episode_details(
        &self,
        show_id: u64,
        season: u32,
        episode: u32,
    ) -> AppResult<EpisodeDetails> {
        let path = format!("/tv/{}/season/{}/episode/{}", show_id, season, episode);
        self.get_json(&path, &[("append_to_response", "credits")])
            .await
    }
}
