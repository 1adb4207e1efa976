use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;
use watchlist_config::{config::DEFAULT_ASSISTANT_MODEL, AssistantConfig, Config, PathManager, TmdbConfig};

use crate::commands::prompts;
use crate::output::{Output, OutputFormat};

pub fn run_config(cmd: crate::ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show { full } => show_config(full, output),
        crate::ConfigCommands::Tmdb { api_key } => configure_tmdb(api_key, output),
        crate::ConfigCommands::Assistant { api_key, model } => {
            configure_assistant(api_key, model, output)
        }
        crate::ConfigCommands::Interactive => run_interactive(output),
    }
}

fn show_config(full: bool, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let config_file = paths.config_file();

    if !config_file.exists() {
        output.warn(format!("Configuration file not found at: {}", config_file.display()));
        output.info("It will be created when you run `cinetrack config tmdb` or `cinetrack config assistant`.");
        return Ok(());
    }

    let config = Config::load_from_file(&config_file).map_err(|e| {
        color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e)
    })?;

    let tmdb_key = config.tmdb.as_ref().map(|t| t.api_key.as_str()).unwrap_or("");
    let assistant_key = config.assistant.as_ref().map(|a| a.api_key.as_str()).unwrap_or("");
    let assistant_model = config
        .assistant
        .as_ref()
        .map(|a| a.model.as_str())
        .unwrap_or(DEFAULT_ASSISTANT_MODEL);

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

            table.add_row(vec![
                Cell::new("Config file"),
                Cell::new(config_file.display().to_string()),
            ]);
            table.add_row(vec![
                Cell::new("Watchlist file"),
                Cell::new(paths.watchlist_file().display().to_string()),
            ]);
            table.add_row(vec![
                Cell::new("TMDB API key"),
                Cell::new(display_key(tmdb_key, full)),
            ]);
            table.add_row(vec![
                Cell::new("Assistant API key"),
                Cell::new(display_key(assistant_key, full)),
            ]);
            table.add_row(vec![Cell::new("Assistant model"), Cell::new(assistant_model)]);

            println!("{}", table);
        }
        _ => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "watchlist_file": paths.watchlist_file().display().to_string(),
                "tmdb": { "api_key": display_key(tmdb_key, full) },
                "assistant": {
                    "api_key": display_key(assistant_key, full),
                    "model": assistant_model,
                },
            }));
        }
    }

    Ok(())
}

fn configure_tmdb(api_key: Option<String>, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let mut config = Config::load_or_default(&paths.config_file()).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let api_key = match api_key {
        Some(key) => key,
        None => prompts::prompt_string("TMDB API key", None)?,
    };

    if api_key.trim().is_empty() {
        output.error("API key cannot be empty");
        return Ok(());
    }

    config.tmdb = Some(TmdbConfig { api_key: api_key.trim().to_string() });
    config.save_to_file(&paths.config_file()).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    output.success("TMDB configuration saved");
    Ok(())
}

fn configure_assistant(
    api_key: Option<String>,
    model: Option<String>,
    output: &Output,
) -> Result<()> {
    let paths = PathManager::default();
    let mut config = Config::load_or_default(&paths.config_file()).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let current_model = config
        .assistant
        .as_ref()
        .map(|a| a.model.clone())
        .unwrap_or_else(|| DEFAULT_ASSISTANT_MODEL.to_string());

    let api_key = match api_key {
        Some(key) => key,
        None => prompts::prompt_string("Assistant API key", None)?,
    };

    if api_key.trim().is_empty() {
        output.error("API key cannot be empty");
        return Ok(());
    }

    let model = match model {
        Some(model) => model,
        None => prompts::prompt_string("Assistant model", Some(&current_model))?,
    };

    config.assistant = Some(AssistantConfig {
        api_key: api_key.trim().to_string(),
        model: model.trim().to_string(),
    });
    config.save_to_file(&paths.config_file()).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    output.success("Assistant configuration saved");
    Ok(())
}

fn run_interactive(output: &Output) -> Result<()> {
    output.println("Welcome to CineTrack setup. A TMDB API key is required for search and add.");

    configure_tmdb(None, output)?;

    if prompts::prompt_yes_no("Configure the movie assistant as well?", Some(false))? {
        configure_assistant(None, None, output)?;
    }

    output.success("Configuration complete. Try `cinetrack search \"the matrix\"`.");
    Ok(())
}

fn display_key(key: &str, full: bool) -> String {
    if full {
        return key.to_string();
    }
    mask_string(key)
}

fn mask_string(s: &str) -> String {
    if s.is_empty() || s == "YOUR_API_KEY" {
        return "<not set>".to_string();
    }
    if s.len() <= 4 {
        return "*".repeat(s.len());
    }
    format!("{}***{}", &s[..2], &s[s.len() - 2..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string(""), "<not set>");
        assert_eq!(mask_string("ab"), "**");
        assert_eq!(mask_string("8265bd1679"), "82***79");
    }
}
