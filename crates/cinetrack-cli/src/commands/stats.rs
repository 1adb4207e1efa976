use color_eyre::Result;

use crate::commands;
use crate::output::{Output, OutputFormat};

pub fn run_stats(output: &Output) -> Result<()> {
    let store = commands::open_store();
    let stats = store.stats();

    match output.format() {
        OutputFormat::Human => {
            let movies = if stats.count == 1 { "movie" } else { "movies" };
            output.println(format!(
                "{} {} saved, {}h {}m of runtime",
                stats.count, movies, stats.hours, stats.minutes
            ));
        }
        _ => {
            output.json(&serde_json::to_value(&stats)?);
        }
    }

    Ok(())
}
