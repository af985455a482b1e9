use rewind::{
    history,
    report::{render, ReportConfig},
    services::{builder, providers::TmdbProvider, resolver::ContentResolver},
    Config,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let records = history::load_history(&config.history_file)?;

    let provider = TmdbProvider::new(config.tmdb_api_key.clone(), config.tmdb_api_url.clone());
    let resolver = ContentResolver::new(provider);
    let outcome = builder::build_events(&resolver, &records).await?;

    for skipped in &outcome.skipped {
        println!(
            "There's an error with {} ({}): {}",
            skipped.name, skipped.imdb_id, skipped.reason
        );
    }

    render::print_year_in_review(&outcome.events, &ReportConfig::default());

    Ok(())
}
