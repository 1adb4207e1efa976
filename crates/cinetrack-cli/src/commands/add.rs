use color_eyre::Result;
use watchlist_core::AddError;
use watchlist_sources::TmdbClient;

use crate::commands;
use crate::output::Output;
use crate::render;

pub async fn run_add(id: u64, output: &Output) -> Result<()> {
    let config = commands::load_config()?;
    let tmdb = config
        .require_tmdb()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let client = TmdbClient::new(tmdb.api_key.clone());

    let mut store = commands::open_store();

    let spinner = render::maybe_spinner(output, "Fetching movie details...");
    let result = store.add(&client, id).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(entry) => {
            output.success(format!("Added \"{}\" to your watchlist", entry.title));
        }
        Err(AddError::AlreadyExists { title, .. }) => {
            output.info(format!("\"{}\" is already in your watchlist", title));
        }
        Err(err @ AddError::FetchFailed { .. }) => {
            output.error(format!("{}", err));
        }
    }

    Ok(())
}
