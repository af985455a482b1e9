use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{Content, ContentKind, CrewMember, MediaKind, Named},
    services::providers::CatalogProvider,
};

/// Tuning knobs for content resolution
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// How many cast entries to keep, in catalog order
    pub max_cast: usize,
    /// How many "Director" crew entries to keep, in catalog order
    pub max_directors: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_cast: 15,
            max_directors: 2,
        }
    }
}

/// Resolves an external identifier into enriched `Content` through the
/// catalog provider.
///
/// `Ok(None)` means the catalog has no entry for the id; that is a normal
/// outcome, not an error, and no further catalog calls are made for it.
pub struct ContentResolver<P> {
    provider: P,
    config: ResolverConfig,
}

impl<P: CatalogProvider> ContentResolver<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, ResolverConfig::default())
    }

    pub fn with_config(provider: P, config: ResolverConfig) -> Self {
        Self { provider, config }
    }

    pub async fn resolve(&self, kind: MediaKind, imdb_id: &str) -> AppResult<Option<Content>> {
        match kind {
            MediaKind::Movie => self.resolve_movie(imdb_id).await,
            MediaKind::Episode => self.resolve_episode(imdb_id).await,
        }
    }

    async fn resolve_movie(&self, imdb_id: &str) -> AppResult<Option<Content>> {
        let found = self.provider.find_by_external_id(imdb_id).await?;
        // External ids are globally unique, so at most one match is expected
        let Some(matched) = found.movie_results.first().copied() else {
            return Ok(None);
        };

        let details = self.provider.movie_details(matched.id).await?;

        let release_date = parse_catalog_date(&details.release_date, "movie release_date")?;
        let runtime_minutes = details.runtime.ok_or_else(|| {
            AppError::DataIntegrity(format!("movie {} has no runtime", matched.id))
        })?;

        Ok(Some(Content {
            catalog_id: matched.id,
            kind: ContentKind::Movie,
            title: details.original_title,
            genres: into_names(details.genres),
            actors: details
                .credits
                .cast
                .into_iter()
                .take(self.config.max_cast)
                .map(|member| member.name)
                .collect(),
            directors: director_names(details.credits.crew, self.config.max_directors),
            production_companies: into_names(details.production_companies),
            release_date,
            runtime_minutes,
        }))
    }

    async fn resolve_episode(&self, imdb_id: &str) -> AppResult<Option<Content>> {
        let found = self.provider.find_by_external_id(imdb_id).await?;
        let Some(matched) = found.tv_episode_results.first().copied() else {
            return Ok(None);
        };

        // Title, genres and companies live on the series; directors and the
        // air date only come back from the episode-level call.
        let series = self.provider.tv_details(matched.show_id).await?;
        let episode = self
            .provider
            .episode_details(matched.show_id, matched.season_number, matched.episode_number)
            .await?;

        // The catalog has no per-episode runtime; the integer-truncated mean
        // of the series' declared runtimes is the documented approximation.
        if series.episode_run_time.is_empty() {
            return Err(AppError::DataIntegrity(format!(
                "series {} declares no episode runtimes",
                matched.show_id
            )));
        }
        let runtime_minutes =
            series.episode_run_time.iter().sum::<u32>() / series.episode_run_time.len() as u32;

        let air_date = episode
            .air_date
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| {
                AppError::DataIntegrity(format!("episode {} has no air date", matched.id))
            })?;
        let release_date = parse_catalog_date(air_date, "episode air_date")?;

        Ok(Some(Content {
            catalog_id: matched.id,
            kind: ContentKind::Episode {
                show_id: matched.show_id,
                season: matched.season_number,
                episode: matched.episode_number,
            },
            title: series.original_name,
            genres: into_names(series.genres),
            actors: series
                .credits
                .cast
                .into_iter()
                .take(self.config.max_cast)
                .map(|member| member.name)
                .collect(),
            directors: director_names(episode.credits.crew, self.config.max_directors),
            production_companies: into_names(series.production_companies),
            release_date,
            runtime_minutes,
        }))
    }
}

fn into_names(named: Vec<Named>) -> Vec<String> {
    named.into_iter().map(|entry| entry.name).collect()
}

fn director_names(crew: Vec<CrewMember>, cap: usize) -> Vec<String> {
    crew.into_iter()
        .filter(|member| member.job == "Director")
        .take(cap)
        .map(|member| member.name)
        .collect()
}

fn parse_catalog_date(raw: &str, what: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::DataIntegrity(format!("unparseable {}: {:?}", what, raw)))
}
