use color_eyre::Result;

use crate::commands;
use crate::output::Output;

pub fn run_remove(id: u64, output: &Output) -> Result<()> {
    let mut store = commands::open_store();

    match store.remove(id) {
        Some(entry) => output.success(format!("Removed \"{}\" from your watchlist", entry.title)),
        None => output.info(format!("Movie {} is not in your watchlist", id)),
    }

    Ok(())
}
