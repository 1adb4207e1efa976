use color_eyre::Result;
use watchlist_models::MoviePage;
use watchlist_sources::{MovieMetadataSource, TmdbClient};

use crate::commands;
use crate::output::{Output, OutputFormat};
use crate::render;

pub async fn run_search(query: &str, page: u32, limit: usize, output: &Output) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        output.error("Please enter a movie title to search");
        return Ok(());
    }

    let client = metadata_client()?;

    let spinner = render::maybe_spinner(output, "Searching...");
    let result = client.search_movies(query, page).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(results) => render_results(&results, limit, output),
        Err(e) => {
            output.error(format!(
                "Search failed: {}. Please check your connection and try again.",
                e
            ));
            Ok(())
        }
    }
}

pub async fn run_popular(page: u32, limit: usize, output: &Output) -> Result<()> {
    let client = metadata_client()?;

    let spinner = render::maybe_spinner(output, "Loading popular movies...");
    let result = client.popular_movies(page).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(results) => render_results(&results, limit, output),
        Err(e) => {
            output.error(format!("Failed to load popular movies: {}", e));
            Ok(())
        }
    }
}

fn metadata_client() -> Result<TmdbClient> {
    let config = commands::load_config()?;
    let tmdb = config
        .require_tmdb()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    Ok(TmdbClient::new(tmdb.api_key.clone()))
}

fn render_results(results: &MoviePage, limit: usize, output: &Output) -> Result<()> {
    if results.results.is_empty() {
        output.info("No movies found. Try a different search term.");
        return Ok(());
    }

    let shown: Vec<_> = results.results.iter().take(limit).collect();

    match output.format() {
        OutputFormat::Human => {
            output.println(render::movie_table(&shown).to_string());
            output.println(format!(
                "Showing {} of {} results (page {}/{})",
                shown.len(),
                results.total_results,
                results.page,
                results.total_pages.max(1)
            ));
        }
        _ => {
            output.json(&serde_json::to_value(&shown)?);
        }
    }

    Ok(())
}
