use clap::ValueEnum;
use color_eyre::Result;
use watchlist_core::WatchlistFilter;

use crate::commands;
use crate::output::{Output, OutputFormat};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFilter {
    All,
    Recent,
    #[value(name = "highly-rated")]
    HighlyRated,
    #[value(name = "by-genre")]
    ByGenre,
}

impl From<ListFilter> for WatchlistFilter {
    fn from(filter: ListFilter) -> Self {
        match filter {
            ListFilter::All => WatchlistFilter::All,
            ListFilter::Recent => WatchlistFilter::Recent,
            ListFilter::HighlyRated => WatchlistFilter::HighlyRated,
            ListFilter::ByGenre => WatchlistFilter::ByGenre,
        }
    }
}

pub fn run_list(filter: ListFilter, output: &Output) -> Result<()> {
    let store = commands::open_store();

    if store.is_empty() {
        output.info("Your watchlist is empty. Find movies with `cinetrack search` and save them with `cinetrack add <id>`.");
        return Ok(());
    }

    let view = store.view(filter.into());
    if view.is_empty() {
        output.info("No movies match this filter.");
        return Ok(());
    }

    match output.format() {
        OutputFormat::Human => {
            output.println(render::watchlist_table(&view).to_string());
        }
        _ => {
            output.json(&serde_json::to_value(&view)?);
        }
    }

    Ok(())
}
