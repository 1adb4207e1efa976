use color_eyre::Result;

use crate::commands;
use crate::commands::prompts;
use crate::output::Output;

pub fn run_clear(yes: bool, output: &Output) -> Result<()> {
    let mut store = commands::open_store();

    if store.is_empty() {
        output.info("Your watchlist is already empty");
        return Ok(());
    }

    if !yes {
        let confirmed = prompts::prompt_yes_no(
            &format!("Remove all {} movies from your watchlist?", store.len()),
            Some(false),
        )?;
        if !confirmed {
            output.info("Clear cancelled");
            return Ok(());
        }
    }

    match store.clear() {
        Some(count) => output.success(format!("Removed {} movies from your watchlist", count)),
        None => output.info("Your watchlist is already empty"),
    }

    Ok(())
}
