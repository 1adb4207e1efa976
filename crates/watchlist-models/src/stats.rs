use serde::{Deserialize, Serialize};

/// Aggregate watchlist statistics. `hours`/`minutes` are the integer
/// split of `total_runtime_minutes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchlistStats {
    pub count: usize,
    pub total_runtime_minutes: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl WatchlistStats {
    pub fn new(count: usize, total_runtime_minutes: u32) -> Self {
        Self {
            count,
            total_runtime_minutes,
            hours: total_runtime_minutes / 60,
            minutes: total_runtime_minutes % 60,
        }
    }
}
