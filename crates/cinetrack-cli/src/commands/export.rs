use std::path::Path;

use color_eyre::eyre::Context;
use color_eyre::Result;
use watchlist_core::write_csv;

use crate::commands;
use crate::output::Output;

pub fn run_export(path: &Path, output: &Output) -> Result<()> {
    let store = commands::open_store();

    if store.is_empty() {
        output.info("No movies to export");
        return Ok(());
    }

    let rows = store.export_rows();
    let file = std::fs::File::create(path)
        .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
    write_csv(&rows, file).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    output.success(format!("Exported {} movies to {}", rows.len(), path.display()));
    Ok(())
}
