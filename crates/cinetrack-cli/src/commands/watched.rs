use color_eyre::Result;

use crate::commands;
use crate::output::Output;

pub fn run_watched(id: u64, watched: bool, output: &Output) -> Result<()> {
    let mut store = commands::open_store();

    match store.set_watched(id, watched) {
        Some(entry) if watched => {
            output.success(format!("Enjoy watching \"{}\"!", entry.title));
        }
        Some(entry) => {
            output.success(format!("Marked \"{}\" as not watched", entry.title));
        }
        None => {
            output.info(format!("Movie {} is not in your watchlist", id));
        }
    }

    Ok(())
}
