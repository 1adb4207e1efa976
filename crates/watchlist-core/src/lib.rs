pub mod error;
pub mod export;
pub mod storage;
pub mod store;
pub mod view;

pub use error::AddError;
pub use export::{csv_string, write_csv};
pub use storage::WatchlistStorage;
pub use store::WatchlistStore;
pub use view::{WatchlistFilter, HIGHLY_RATED_THRESHOLD};
