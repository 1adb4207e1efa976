/// TMDB's fixed movie genre id table. Search results only carry ids, so
/// rendering them without an extra details request needs this lookup.
pub fn genre_name(id: u64) -> Option<&'static str> {
    match id {
        28 => Some("Action"),
        12 => Some("Adventure"),
        16 => Some("Animation"),
        35 => Some("Comedy"),
        80 => Some("Crime"),
        99 => Some("Documentary"),
        18 => Some("Drama"),
        10751 => Some("Family"),
        14 => Some("Fantasy"),
        36 => Some("History"),
        27 => Some("Horror"),
        10402 => Some("Music"),
        9648 => Some("Mystery"),
        10749 => Some("Romance"),
        878 => Some("Sci-Fi"),
        10770 => Some("TV Movie"),
        53 => Some("Thriller"),
        10752 => Some("War"),
        37 => Some("Western"),
        _ => None,
    }
}

/// Display string for a list of genre ids: up to the first three known
/// names joined with ", ", or "Unknown" when none resolve.
pub fn genre_names(ids: &[u64]) -> String {
    let names: Vec<&str> = ids.iter().take(3).filter_map(|&id| genre_name(id)).collect();
    if names.is_empty() {
        "Unknown".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_names_takes_first_three_known() {
        assert_eq!(genre_names(&[28, 12, 16, 35]), "Action, Adventure, Animation");
    }

    #[test]
    fn test_genre_names_skips_unknown_ids() {
        assert_eq!(genre_names(&[4242, 18]), "Drama");
    }

    #[test]
    fn test_genre_names_empty_is_unknown() {
        assert_eq!(genre_names(&[]), "Unknown");
        assert_eq!(genre_names(&[4242]), "Unknown");
    }
}
