use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use commands::{add, ask, clear, config, export, list, remove, search, stats, watched};

mod commands;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "cinetrack")]
#[command(about = "CineTrack - Discover movies and keep a watchlist from your terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for movies by title
    #[command(long_about = "Search the movie metadata catalog by title and show one page of matches. Use `cinetrack add <id>` with an id from the results to save a movie.")]
    Search {
        /// Title to search for
        query: String,

        /// Result page to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Maximum number of results to display
        #[arg(long, default_value_t = 12)]
        limit: usize,
    },
    /// Show currently popular movies
    Popular {
        /// Result page to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Maximum number of results to display
        #[arg(long, default_value_t = 12)]
        limit: usize,
    },
    /// Add a movie to the watchlist
    #[command(long_about = "Fetch a movie's full details by its catalog id and add it to the watchlist. Adding an id that is already saved is reported and changes nothing.")]
    Add {
        /// Movie id (from search results)
        id: u64,
    },
    /// Remove a movie from the watchlist
    Remove {
        /// Movie id
        id: u64,
    },
    /// List the watchlist
    #[command(long_about = "Show the watchlist. Filters produce derived views: 'recent' sorts by date added, 'highly-rated' keeps movies rated 7.0+ sorted by rating, 'by-genre' sorts alphabetically by first genre.")]
    List {
        /// View to apply
        #[arg(long, default_value = "all", value_enum)]
        filter: list::ListFilter,
    },
    /// Mark a movie as watched (or not watched)
    Watched {
        /// Movie id
        id: u64,

        /// Mark as not watched instead
        #[arg(long, action = ArgAction::SetTrue)]
        unset: bool,
    },
    /// Show watchlist statistics
    Stats,
    /// Export the watchlist to CSV
    Export {
        /// Destination file path
        #[arg(short, long, default_value = "my_watchlist.csv")]
        file: PathBuf,
    },
    /// Remove every movie from the watchlist
    #[command(long_about = "Empty the watchlist. Asks for confirmation unless --yes is given.")]
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Ask the movie assistant a question
    Ask {
        /// The message to send
        message: String,
    },
    /// Configure API keys and settings
    #[command(long_about = "Manage configuration for CineTrack. Running without a subcommand starts the interactive configuration wizard.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks API keys)
    Show {
        /// Show full configuration including masked values
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    /// Configure the movie metadata API key
    Tmdb {
        /// TMDB API key (if not provided, will prompt)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Configure the assistant API key and model
    Assistant {
        /// Generative-language API key (if not provided, will prompt)
        #[arg(long)]
        api_key: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,
    },

    /// Interactive configuration wizard
    Interactive,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Search { query, page, limit } => search::run_search(&query, page, limit, &output).await,
        Commands::Popular { page, limit } => search::run_popular(page, limit, &output).await,
        Commands::Add { id } => add::run_add(id, &output).await,
        Commands::Remove { id } => remove::run_remove(id, &output),
        Commands::List { filter } => list::run_list(filter, &output),
        Commands::Watched { id, unset } => watched::run_watched(id, !unset, &output),
        Commands::Stats => stats::run_stats(&output),
        Commands::Export { file } => export::run_export(&file, &output),
        Commands::Clear { yes } => clear::run_clear(yes, &output),
        Commands::Ask { message } => ask::run_ask(&message, &output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Interactive);
            config::run_config(cmd, &output)
        }
    }
}
