use std::time::Duration;

use comfy_table::{Cell, Table};
use indicatif::{ProgressBar, ProgressStyle};
use watchlist_models::{genre_names, release_year, MovieSummary, WatchlistEntry};

use crate::output::{Output, OutputFormat};

/// Spinner for network waits. Only shown for interactive human output.
pub fn maybe_spinner(output: &Output, msg: &str) -> Option<ProgressBar> {
    if output.is_quiet() || output.format() != OutputFormat::Human {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Five-star rendering of a 0-10 vote average.
pub fn stars(vote_average: f32) -> String {
    let filled = ((vote_average / 2.0).round() as usize).min(5);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Human name for the common two-letter language codes; anything else is
/// shown as the upper-cased code.
pub fn language_name(code: &str) -> String {
    match code {
        "en" => "English".to_string(),
        "es" => "Spanish".to_string(),
        "fr" => "French".to_string(),
        "de" => "German".to_string(),
        "it" => "Italian".to_string(),
        "ja" => "Japanese".to_string(),
        "ko" => "Korean".to_string(),
        "zh" => "Chinese".to_string(),
        "hi" => "Hindi".to_string(),
        "ar" => "Arabic".to_string(),
        "ru" => "Russian".to_string(),
        "pt" => "Portuguese".to_string(),
        other => other.to_uppercase(),
    }
}

pub fn movie_table(movies: &[&MovieSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Title"),
        Cell::new("Year"),
        Cell::new("Rating"),
        Cell::new("Votes"),
        Cell::new("Genres"),
        Cell::new("Language"),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    for movie in movies {
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(release_year(movie.release_date.as_deref()).unwrap_or("Unknown")),
            Cell::new(format!("{} {:.1}/10", stars(movie.vote_average), movie.vote_average)),
            Cell::new(movie.vote_count),
            Cell::new(genre_names(&movie.genre_ids)),
            Cell::new(language_name(&movie.original_language)),
        ]);
    }

    table
}

pub fn watchlist_table(entries: &[&WatchlistEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Title"),
        Cell::new("Year"),
        Cell::new("Rating"),
        Cell::new("Runtime"),
        Cell::new("Genre"),
        Cell::new("Added"),
        Cell::new("Watched"),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.id),
            Cell::new(&entry.title),
            Cell::new(entry.release_year().unwrap_or("Unknown")),
            Cell::new(format!("{:.1}", entry.vote_average)),
            Cell::new(format!("{}m", entry.runtime_minutes)),
            Cell::new(entry.first_genre_name()),
            Cell::new(entry.added_at.format("%b %d, %Y").to_string()),
            Cell::new(if entry.watched { "✓" } else { "" }),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(0.0), "☆☆☆☆☆");
        assert_eq!(stars(8.2), "★★★★☆");
        assert_eq!(stars(10.0), "★★★★★");
    }

    #[test]
    fn test_language_name_fallback() {
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("sv"), "SV");
    }
}
