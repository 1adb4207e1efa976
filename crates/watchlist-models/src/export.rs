use serde::{Deserialize, Serialize};

/// Flat projection of a watchlist entry for tabular export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportRow {
    pub title: String,
    pub year: String, // 4-digit year or "Unknown"
    pub rating: f32,
    pub added: String, // YYYY-MM-DD
}
